use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

/// A simple counter which starts at 1 so that 0 can mean "no connection".
static CONNECTION_ID_COUNTER: Lazy<AtomicU64> = Lazy::new(|| AtomicU64::new(1));

#[inline]
pub fn generate_connection_id() -> u64 {
    CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}
