//! In-memory file records.
//!
//! A [`FileRecord`] tracks a sanitized name, a bounded byte size, a writable
//! flag and creation/modification timestamps taken from an injected
//! [`Clock`]. Two records can be compared for an overlapping use period.
//!
//! ```
//! use file_record::{FileRecord, UNMODIFIED_MESSAGE};
//!
//! let mut record = FileRecord::new("notes?.txt");
//! assert_eq!(record.name(), "notes.txt");
//! assert_eq!(record.modification_time(), UNMODIFIED_MESSAGE);
//!
//! record.set_name("");
//! assert_eq!(record.name(), ".");
//! assert!(record.set_size(-1).is_err());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod version;

pub use file_record_domain::{
    FileRecord, RecordOptions, RecordOptionsBuilder, RecordOptionsBuilderError, UNMODIFIED_MESSAGE,
};
pub use file_record_ports::{Clock, FixedClock, SharedClock, SteppingClock, SystemClock, system_clock};
pub use file_record_shared_kernel::{
    DomainError, DomainResult, FileName, FileSize, PLACEHOLDER_NAME, TIMESTAMP_FORMAT, Timestamp,
};
pub use version::VERSION;
