pub mod common;
pub mod line_pointer;
pub mod timestamp;

pub use common::layout::{Field, WordError};
pub use common::LogFormat;
pub use line_pointer::LinePointer;
pub use timestamp::{TimeFields, Timestamp};
