use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by the factories to derive unique names and slugs so multiple
/// records can be created within a single test without collisions.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
