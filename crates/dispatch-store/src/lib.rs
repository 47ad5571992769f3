//! CSV-backed record store for the Dispatch events-discovery backend.
//!
//! This crate is the data engine: it loads the flat-file collections into
//! typed in-memory vectors, filters and sorts them, resolves display names
//! for foreign-key-like fields, and writes mutations back by rewriting the
//! whole file.
//!
//! # Components
//!
//! - [`RecordStore`] — load/filter/sort accessors and the partial-field
//!   event update
//! - [`cache`] — TTL-bounded events cache and load-once venues cache,
//!   driven by an injected clock
//! - [`resolve`] — venue/host display-name resolution with "Unknown"
//!   sentinels
//! - [`codec`] — shared CSV read/write/append helpers used here and by the
//!   saved ledger and review log
//!
//! # Design Rules
//!
//! 1. Reads never fail the caller: a missing or corrupt file logs a
//!    warning and loads as an empty collection.
//! 2. Writes rewrite the entire file and propagate errors.
//! 3. There is no cross-request locking; the later of two racing rewrites
//!    wins. Callers own any coordination they need.
//! 4. All time comes from the injected [`Clock`](dispatch_types::Clock).

pub mod cache;
pub mod codec;
pub mod error;
pub mod files;
pub mod records;
pub mod resolve;
pub mod store;

pub use cache::{default_events_ttl, EventsCache, VenuesCache};
pub use error::{StoreError, StoreResult};
pub use files::{DataDir, DEFAULT_DATA_DIR};
pub use records::{EventRecord, HostRecord, TagRecord, VenueRecord};
pub use resolve::{UNKNOWN_HOST, UNKNOWN_VENUE};
pub use store::{EventFilter, RecordStore};
