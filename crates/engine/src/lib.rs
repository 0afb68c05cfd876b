//! Event-log engine for the AOI review dashboard
//!
//! This crate provides the application's event log:
//! - Bounded write-through persistence (newest 1000 entries snapshotted)
//! - Silent degradation to memory-only operation on storage failure
//! - Level/category/time-range filtering
//! - Bounds-checked pagination with first/prev/next/last navigation
//! - On-demand statistics with an observer hook for the presentation layer
//! - Retention-based cleanup with a self-describing audit entry
//! - CSV export (UTF-8 with BOM)
//!
//! One [`EventLog`] instance is constructed per application session and
//! passed explicitly to every module that records or reads events. All
//! operations are synchronous and run on the caller's thread; there is a
//! single logical writer and no interior locking.

pub mod config;
pub mod export;
pub mod filter;
pub mod log;
pub mod pagination;
pub mod stats;
pub mod view;

pub use config::EventLogConfig;
pub use export::{export_csv, export_filename, CSV_HEADER};
pub use filter::EntryFilter;
pub use log::{CleanupReport, EventLog, StorageNotice};
pub use pagination::{page_count, paginate, Page, PageNav};
pub use stats::LogStatistics;
pub use view::LogView;
