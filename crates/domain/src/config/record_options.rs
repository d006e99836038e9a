// crates/domain/src/config/record_options.rs
use derive_builder::Builder;
use file_record_ports::{SharedClock, system_clock};
use file_record_shared_kernel::FileSize;

/// Construction-time settings for a [`FileRecord`](crate::FileRecord).
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RecordOptions {
    #[builder(default)]
    pub size: FileSize,
    #[builder(default = "true")]
    pub writable: bool,
    /// Time source for the creation stamp and later modifications.
    #[builder(default = "system_clock()")]
    pub clock: SharedClock,
}

impl RecordOptions {
    pub fn builder() -> RecordOptionsBuilder {
        RecordOptionsBuilder::default()
    }
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self { size: FileSize::zero(), writable: true, clock: system_clock() }
    }
}
