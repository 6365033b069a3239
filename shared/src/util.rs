use chrono::{DateTime, Local};

/// Display format for item and receipt timestamps (`19/10/2026, 14:05:09`)
pub const DISPLAY_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Current local time as a human-readable string
pub fn now_display() -> String {
    format_display(Local::now())
}

/// Format a local time with [`DISPLAY_TIME_FORMAT`]
pub fn format_display(time: DateTime<Local>) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}
