//! Till ledger - line-item tracking for a retail counter
//!
//! # Module structure
//!
//! ```text
//! till-ledger/src/
//! ├── core/          # configuration
//! ├── ledger/        # active order, history, checkout
//! ├── money.rs       # decimal arithmetic for totals
//! ├── validation.rs  # input parsing and checks
//! ├── storage.rs     # string key-value backends (redb, memory)
//! ├── persistence.rs # history <-> key-value adapter
//! └── utils/         # logging
//! ```
//!
//! # Data Flow
//!
//! ```text
//! UI event → Ledger mutation → HistoryStore::save → UI re-render
//! ```

pub mod core;
pub mod ledger;
pub mod money;
pub mod persistence;
pub mod storage;
pub mod utils;
pub mod validation;

// Re-exports
pub use crate::core::LedgerConfig;
pub use ledger::{HistorySummary, Ledger, LedgerError, LedgerResult};
pub use persistence::{HISTORY_KEY, HistoryStore};
pub use storage::{KvStore, MemoryStore, RedbStore, StorageError, StorageResult};
pub use validation::ValidationError;

// Re-export shared types for convenience
pub use shared::{ErrorCode, LineItem, Receipt};

// Re-export logger functions
pub use utils::logger::{init_from_config, init_logger, init_logger_with_file};
