//! Record store subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     snapshot.rs (read <data_dir>/tasks.json if present)
//!         → table.rs (in-memory collection, insertion order preserved)
//!
//! per request:
//!     handler → table.rs (insert / select / get / update / delete)
//!         → snapshot.rs (rewrite whole collection on each mutation)
//! ```
//!
//! # Design Decisions
//! - One typed store per entity kind; no string-keyed table lookup
//! - All access serialized by a single mutex (low contention expected)
//! - Lookups that find nothing are empty results or no-ops, never errors
//! - Snapshot is the entire collection, overwritten wholesale

pub mod record;
pub mod snapshot;
pub mod table;

pub use record::{Task, TaskChanges, TaskFilter};
pub use snapshot::StoreError;
pub use table::TaskStore;
