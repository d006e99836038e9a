// crates/domain/src/model/entities/file_record.rs
use file_record_ports::SharedClock;
use file_record_shared_kernel::{DomainError, DomainResult, FileName, FileSize, Timestamp};
use log::{debug, trace};

use crate::config::RecordOptions;

/// Text reported by [`FileRecord::modification_time`] before the first rename.
pub const UNMODIFIED_MESSAGE: &str = "File has not been modified yet.";

/// In-memory file: a sanitized name, a bounded size, a writable flag and
/// creation/modification stamps.
///
/// Invariants:
/// - `name` only holds `[A-Za-z0-9._-]` and is never empty.
/// - `size` stays within `[FileSize::MIN_SIZE, FileSize::MAX_SIZE]`.
/// - `created_at` never changes after construction.
/// - `modified_at` is `None` until the first successful [`set_name`](Self::set_name).
#[derive(Debug, Clone)]
pub struct FileRecord {
    name: FileName,
    size: FileSize,
    writable: bool,
    created_at: Timestamp,
    modified_at: Option<Timestamp>,
    clock: SharedClock,
}

impl FileRecord {
    /// Empty, writable record stamped with the system clock.
    pub fn new(name: &str) -> Self {
        Self::with_options(name, RecordOptions::default())
    }

    pub fn with_attributes(name: &str, size: FileSize, writable: bool) -> Self {
        Self::with_options(name, RecordOptions { size, writable, ..RecordOptions::default() })
    }

    pub fn with_options(name: &str, options: RecordOptions) -> Self {
        let RecordOptions { size, writable, clock } = options;
        let created_at = clock.now();
        let record = Self {
            name: FileName::sanitize(name),
            size,
            writable,
            created_at,
            modified_at: None,
            clock,
        };
        trace!("created file record '{}' ({} bytes) at {}", record.name, record.size, created_at.millis());
        record
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn file_name(&self) -> &FileName {
        &self.name
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub fn modified_at(&self) -> Option<Timestamp> {
        self.modified_at
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified_at.is_some()
    }

    /// Creation time as `YYYY-MM-DD HH:MM:SS` in the local timezone.
    #[must_use]
    pub fn creation_time(&self) -> String {
        self.created_at.to_string()
    }

    /// Modification time as `YYYY-MM-DD HH:MM:SS`, or [`UNMODIFIED_MESSAGE`].
    #[must_use]
    pub fn modification_time(&self) -> String {
        match self.modified_at {
            Some(ts) => ts.to_string(),
            None => UNMODIFIED_MESSAGE.to_string(),
        }
    }

    /// Renames the record, keeping only allowed characters.
    ///
    /// Read-only records ignore the call. Every accepted rename restamps the
    /// modification time, even when the sanitized name is unchanged.
    pub fn set_name(&mut self, name: &str) {
        if !self.writable {
            debug!("ignoring rename of read-only file '{}'", self.name);
            return;
        }
        self.name = FileName::sanitize(name);
        let now = self.clock.now();
        self.modified_at = Some(now);
        trace!("renamed file to '{}' at {}", self.name, now.millis());
    }

    #[must_use]
    pub fn is_valid_size(size: i64) -> bool {
        FileSize::is_valid(size)
    }

    /// Replaces the size. Fails on read-only records and out-of-range sizes,
    /// leaving the current size untouched.
    pub fn set_size(&mut self, size: i64) -> DomainResult<()> {
        self.ensure_writable()?;
        let size = FileSize::new(size)
            .inspect_err(|err| debug!("rejected size for '{}': {err}", self.name))?;
        self.size = size;
        Ok(())
    }

    /// Grows the size by `amount` bytes.
    pub fn enlarge(&mut self, amount: i64) -> DomainResult<()> {
        self.set_size(i64::from(self.size).saturating_add(amount))
    }

    /// Shrinks the size by `amount` bytes.
    pub fn shorten(&mut self, amount: i64) -> DomainResult<()> {
        self.set_size(i64::from(self.size).saturating_sub(amount))
    }

    /// Whether `other` was created inside this pair's earlier use period.
    ///
    /// The earlier-created record is `A` (ties pick `other`); the result is
    /// true when `A.created <= B.created < A.modified` and both records have
    /// been modified. Only `B`'s creation is tested against `A`'s window, so
    /// a modification landing in the same millisecond as the other record's
    /// creation reads as no overlap.
    #[must_use]
    pub fn has_overlapping_use_period(&self, other: &FileRecord) -> bool {
        let (first, second) =
            if self.created_at < other.created_at { (self, other) } else { (other, self) };

        let (Some(first_modified), Some(_)) = (first.modified_at, second.modified_at) else {
            return false;
        };

        first.created_at <= second.created_at && second.created_at < first_modified
    }

    fn ensure_writable(&self) -> DomainResult<()> {
        if self.writable {
            Ok(())
        } else {
            debug!("rejected size change of read-only file '{}'", self.name);
            Err(DomainError::ReadOnly { name: self.name.to_string() })
        }
    }
}
