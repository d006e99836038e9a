// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DomainError, DomainResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileName, FileSize, PLACEHOLDER_NAME, TIMESTAMP_FORMAT, Timestamp};
