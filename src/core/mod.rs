pub mod analytics;
pub mod check;
pub mod register;
pub mod report;
