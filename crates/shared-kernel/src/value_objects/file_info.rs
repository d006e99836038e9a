// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Name used when sanitization leaves nothing behind.
pub const PLACEHOLDER_NAME: &str = ".";

/// Sanitized file name: ASCII letters, digits, `.`, `_` and `-` only, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Filters `raw` down to the allowed alphabet, falling back to [`PLACEHOLDER_NAME`].
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let filtered: String = raw.chars().filter(|&c| Self::is_allowed(c)).collect();
        if filtered.is_empty() {
            Self(PLACEHOLDER_NAME.to_string())
        } else {
            Self(filtered)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_NAME
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::sanitize(&name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::sanitize(name)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.into_string()
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FileName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FileName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Byte count bounded to `[MIN_SIZE, MAX_SIZE]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(try_from = "i64", into = "i64")]
pub struct FileSize(u32);

impl FileSize {
    pub const MIN_SIZE: i64 = 0;
    pub const MAX_SIZE: i64 = i32::MAX as i64;

    pub fn new(bytes: i64) -> DomainResult<Self> {
        let invalid = || DomainError::InvalidSize {
            size: bytes,
            min: Self::MIN_SIZE,
            max: Self::MAX_SIZE,
        };
        if !Self::is_valid(bytes) {
            return Err(invalid());
        }
        u32::try_from(bytes).map(Self).map_err(|_| invalid())
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(bytes: i64) -> bool {
        bytes >= Self::MIN_SIZE && bytes <= Self::MAX_SIZE
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn bytes(self) -> u32 {
        self.0
    }

    /// Size grown by `amount`; fails when the result leaves the valid range.
    pub fn checked_add(self, amount: i64) -> DomainResult<Self> {
        Self::new(self.as_i64().saturating_add(amount))
    }

    /// Size reduced by `amount`; fails when the result leaves the valid range.
    pub fn checked_sub(self, amount: i64) -> DomainResult<Self> {
        Self::new(self.as_i64().saturating_sub(amount))
    }

    #[inline]
    const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Returns a base-2 human readable representation (KiB, MiB, GiB).
    pub fn to_human(self) -> String {
        const KIB: f64 = 1024.0;
        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let kib = f64::from(bytes) / KIB;
        if kib < KIB {
            return format!("{kib:.1} KiB");
        }

        let mib = kib / KIB;
        if mib < KIB {
            return format!("{mib:.1} MiB");
        }

        let gib = mib / KIB;
        format!("{gib:.1} GiB")
    }
}

impl TryFrom<i64> for FileSize {
    type Error = DomainError;

    fn try_from(bytes: i64) -> DomainResult<Self> {
        Self::new(bytes)
    }
}

impl From<FileSize> for i64 {
    fn from(size: FileSize) -> Self {
        size.as_i64()
    }
}

impl PartialEq<i64> for FileSize {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == *other
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
