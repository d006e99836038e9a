// tests/common/fixtures.rs
//! テストフィクスチャ: 決定的な時計とレコード生成

use std::sync::Arc;

use file_record::{FileRecord, FileSize, RecordOptions, SharedClock, SteppingClock};

/// 2023-11-14 22:13:20 UTC, aligned to a whole second.
#[allow(dead_code)]
pub const EPOCH_START: i64 = 1_700_000_000_000;

/// Manually driven clock plus the shared handle records are built with.
#[allow(dead_code)]
pub struct TestClock {
    raw: Arc<SteppingClock>,
    shared: SharedClock,
}

#[allow(dead_code)]
impl TestClock {
    /// Clock that only moves when [`TestClock::sleep`] is called.
    pub fn frozen_at(start: i64) -> Self {
        Self::stepping(start, 0)
    }

    pub fn stepping(start: i64, step: i64) -> Self {
        let raw = Arc::new(SteppingClock::new(start, step));
        let shared: SharedClock = raw.clone();
        Self { raw, shared }
    }

    /// Advances time by `millis`, standing in for a real sleep.
    pub fn sleep(&self, millis: i64) {
        self.raw.advance(millis);
    }

    pub fn now(&self) -> i64 {
        self.raw.peek()
    }

    pub fn record(&self, name: &str) -> FileRecord {
        FileRecord::with_options(name, self.options(FileSize::zero(), true))
    }

    pub fn read_only(&self, name: &str) -> FileRecord {
        FileRecord::with_options(name, self.options(FileSize::zero(), false))
    }

    pub fn options(&self, size: FileSize, writable: bool) -> RecordOptions {
        RecordOptions::builder()
            .size(size)
            .writable(writable)
            .clock(Arc::clone(&self.shared))
            .build()
            .expect("all option fields have defaults")
    }
}
