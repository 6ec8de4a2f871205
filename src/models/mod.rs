pub mod action;
pub mod daily_stats;
pub mod faculty;
pub mod latest_event;
pub mod status_row;
