pub mod record_options;

pub use record_options::{RecordOptions, RecordOptionsBuilder, RecordOptionsBuilderError};
