// Common utilities

pub mod layout;
pub mod log_format;

pub use layout::{Field, WordError};
pub use log_format::LogFormat;
