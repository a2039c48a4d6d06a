//! Timing and allocation measurement around a single call.
//!
//! Measurement wraps calls at the boundary, the measured code knows nothing
//! about it. Allocation figures need `stats_alloc::INSTRUMENTED_SYSTEM`
//! installed as the global allocator, otherwise they read zero.
//!
//! ```ignore
//! use std::alloc::System;
//! use stats_alloc::{StatsAlloc, INSTRUMENTED_SYSTEM};
//!
//! #[global_allocator]
//! static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;
//! ```

use stats_alloc::{Region, INSTRUMENTED_SYSTEM};
use std::time::{Duration, Instant};

#[cfg(test)]
#[global_allocator]
static GLOBAL: &stats_alloc::StatsAlloc<std::alloc::System> = &INSTRUMENTED_SYSTEM;


/// Result of a measured call
#[derive(Clone, Debug)]
pub struct Measurement<T> {
    pub label: String,
    pub value: T,
    pub elapsed: Duration,
    /// Number of allocations made during the call
    pub allocations: usize,
    /// Bytes requested from the allocator during the call
    pub allocated_bytes: usize,
    /// Bytes still held once the call returned, negative if it freed more than it took
    pub retained_bytes: isize,
}


/// Run f once and measure it
pub fn measure<T, F>(label: impl Into<String>, f: F) -> Measurement<T>
where
    F: FnOnce() -> T,
{
    let region = Region::new(&INSTRUMENTED_SYSTEM);

    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    let stats = region.change();
    let retained_bytes = stats.bytes_allocated as isize + stats.bytes_reallocated
        - stats.bytes_deallocated as isize;

    Measurement {
        label: label.into(),
        value,
        elapsed,
        allocations: stats.allocations,
        allocated_bytes: stats.bytes_allocated,
        retained_bytes,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value() {
        let m = measure("sum", || (1..=10).sum::<u32>());

        assert_eq!(m.label, "sum");
        assert_eq!(m.value, 55);
        assert!(m.elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_measure_counts_allocations() {
        // other tests allocate concurrently, so only lower bounds hold
        let m = measure("buffer", || vec![0u8; 4096]);

        assert_eq!(m.value.len(), 4096);
        assert!(m.allocations >= 1);
        assert!(m.allocated_bytes >= 4096);
    }
}
