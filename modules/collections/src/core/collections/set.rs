//! Lock-guarded hash set.

mod sync_set;

pub use sync_set::SyncSet;
