pub mod colors;
pub mod table;
pub mod time;

pub use time::format_seconds_hms;
