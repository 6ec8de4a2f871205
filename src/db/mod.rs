pub mod attendance;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod roster;
pub mod stats;
