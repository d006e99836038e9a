// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod timestamp;

pub use file_info::{FileName, FileSize, PLACEHOLDER_NAME};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
