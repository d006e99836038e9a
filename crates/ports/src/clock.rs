// crates/ports/src/clock.rs
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    },
};

use chrono::Utc;
use file_record_shared_kernel::Timestamp;

/// Source of the current time, in milliseconds since the Unix epoch.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now_millis(&self) -> i64;

    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now_millis())
    }
}

/// Clock handle shared between records.
pub type SharedClock = Arc<dyn Clock>;

/// Default clock used when a record is built without one.
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

/// Clock that advances by `step` milliseconds after every read.
///
/// Reads are atomic, so one instance can stamp several records and every
/// read observes a distinct, increasing instant (for a positive step).
pub struct SteppingClock {
    next: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self { next: AtomicI64::new(start), step }
    }

    /// Instant the next read will return, without consuming it.
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Moves the clock forward without producing a reading.
    pub fn advance(&self, millis: i64) {
        self.next.fetch_add(millis, Ordering::SeqCst);
    }
}

impl fmt::Debug for SteppingClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteppingClock")
            .field("next", &self.peek())
            .field("step", &self.step)
            .finish()
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::SeqCst)
    }
}
