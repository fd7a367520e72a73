pub mod index;
pub mod report;
pub mod session_logger;
