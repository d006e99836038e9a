// tests/unit/domain/file_record_test.rs
use file_record::{DomainError, FileRecord, FileSize, UNMODIFIED_MESSAGE};

use crate::common::{EPOCH_START, TestClock};

#[test]
fn name_only_constructor_defaults() {
    let record = FileRecord::new("name");
    assert_eq!(record.name(), "name");
    assert_eq!(record.size(), 0);
    assert!(record.is_writable());
}

#[test]
fn full_constructor_keeps_attributes() {
    let record = FileRecord::with_attributes("file_2", FileSize::new(4096).unwrap(), false);
    assert_eq!(record.name(), "file_2");
    assert_eq!(record.size().bytes(), 4096);
    assert!(!record.is_writable());
}

#[test]
fn rename_without_permission_keeps_name() {
    let clock = TestClock::frozen_at(EPOCH_START);
    let mut record = clock.read_only("file_2");
    let before = record.name().to_string();
    record.set_name("different_");
    assert_eq!(record.name(), before);
    assert_eq!(record.modification_time(), UNMODIFIED_MESSAGE);
}

#[test]
fn rename_sanitizes_input() {
    let mut record = FileRecord::new("filename");
    let cases = [
        ("", "."),
        ("+*", "."),
        ("A@2", "A2"),
        ("~.!@#$%^&*()_+Az09-+/*", "._Az09-"),
        ("Aa_1.2-3", "Aa_1.2-3"),
    ];
    for (input, expected) in cases {
        record.set_name(input);
        assert_eq!(record.name(), expected, "input {input:?}");
    }
}

#[test]
fn fresh_record_reports_unmodified() {
    let record = FileRecord::new("filename");
    assert_eq!(record.modification_time(), "File has not been modified yet.");
}

#[test]
fn rename_sets_modification_time() {
    let mut record = FileRecord::new("filename");
    record.set_name("change");
    assert_ne!(record.modification_time(), UNMODIFIED_MESSAGE);
    assert!(record.is_modified());
}

#[test]
fn delayed_rename_differs_from_creation_time() {
    let clock = TestClock::frozen_at(EPOCH_START);
    let mut record = clock.record("filename");
    clock.sleep(1_500);
    record.set_name("change");
    assert_ne!(record.modification_time(), record.creation_time());
    assert_ne!(record.modification_time(), UNMODIFIED_MESSAGE);
}

#[test]
fn valid_size_range() {
    assert!(FileRecord::is_valid_size(0));
    assert!(FileRecord::is_valid_size(2_147_483_647));
    assert!(!FileRecord::is_valid_size(-1));
    assert!(!FileRecord::is_valid_size(2_147_483_648));
}

#[test]
fn enlarge_and_shorten_round_trip() {
    let clock = TestClock::frozen_at(EPOCH_START);
    let mut record = FileRecord::with_options("data.bin", clock.options(FileSize::new(10).unwrap(), true));
    record.enlarge(90).unwrap();
    assert_eq!(record.size(), 100);
    record.shorten(25).unwrap();
    assert_eq!(record.size(), 75);
}

#[test]
fn shortening_below_zero_is_rejected() {
    let mut record = FileRecord::new("data.bin");
    let err = record.shorten(1).unwrap_err();
    assert_eq!(err, DomainError::InvalidSize { size: -1, min: 0, max: 2_147_483_647 });
    assert_eq!(record.size(), 0);
}

#[test]
fn read_only_size_error_names_the_file() {
    let mut record = FileRecord::with_attributes("locked.txt", FileSize::zero(), false);
    let err = record.set_size(1).unwrap_err();
    assert_eq!(err, DomainError::ReadOnly { name: "locked.txt".into() });
    assert_eq!(err.to_string(), "File 'locked.txt' is read-only");
}
