pub mod entities;

pub use entities::{FileRecord, UNMODIFIED_MESSAGE};
