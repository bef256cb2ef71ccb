//! Shared data structures for insensible fluid loss estimation.

pub mod adjustment;
pub mod file_formats;
pub mod observation;
pub mod parameter;
pub mod report;
