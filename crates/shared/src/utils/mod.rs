pub mod logging;
pub mod signal;
