//! Journaling system for recording what happened on an expedition.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
