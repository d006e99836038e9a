#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;

pub use config::{RecordOptions, RecordOptionsBuilder, RecordOptionsBuilderError};
pub use model::{FileRecord, UNMODIFIED_MESSAGE};
