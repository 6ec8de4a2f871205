/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Note color:
/// "properly done" → green
/// "not done" → red
/// anything else → reset
pub fn color_for_note(note: &str) -> &'static str {
    match note {
        "properly done" => GREEN,
        "not done" => RED,
        _ => RESET,
    }
}
