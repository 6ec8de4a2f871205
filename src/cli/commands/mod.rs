pub mod analytics;
pub mod check;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod register;
pub mod report;
