//! Thread-safe ordered containers
//!
//! Every container keeps its whole state behind a single
//! `parking_lot::RwLock`: reads (`get`, `keys`, `items`, `len`, ...) share
//! the lock, mutations (`set`, `delete`, `append`, `remove`) take it
//! exclusively. Instances are independent; there is no global lock.
//!
//! Missing keys and out-of-range indices are ordinary outcomes reported
//! as `None` or `false`, never panics. Snapshot methods return owned
//! copies taken under one read guard, so a caller never observes a
//! half-applied mutation.

pub mod ordered_map;
pub mod slice;
pub mod unique_slice;

pub use ordered_map::OrderedMap;
pub use slice::Slice;
pub use unique_slice::UniqueSlice;
