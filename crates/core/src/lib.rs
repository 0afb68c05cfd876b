//! Core types and errors for the aoilog event-log subsystem
//!
//! This crate holds the shared vocabulary of the event log: the entry type
//! and its level/category enums, the draft builder used by recording call
//! sites, the snapshot-store error taxonomy, and the constants that pin down
//! the persisted wire format.

pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{Result, StoreError};
pub use types::{EventDraft, LogCategory, LogEntry, LogLevel};
