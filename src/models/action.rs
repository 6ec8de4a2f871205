use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    CheckOut,
}

impl Action {
    /// Parse a user-supplied action code ("in", "out", "check-in", ...).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "checkin" | "check-in" => Some(Self::CheckIn),
            "out" | "checkout" | "check-out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "Check-In",
            Action::CheckOut => "Check-Out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Check-In" => Some(Action::CheckIn),
            "Check-Out" => Some(Action::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, Action::CheckOut)
    }
}
