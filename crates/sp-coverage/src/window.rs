//! Circular coverage windows.
//!
//! A shift `L` buckets long that starts at period `j` is on duty during
//! periods `j, j+1, …, j+L-1 (mod P)`.  Turned around, the agents on duty in
//! period `p` are exactly those whose shift started at one of
//! `p, p-1, …, p-L+1 (mod P)`.  Both views are the same set relation, so one
//! function serves for assembling the constraint row of every period.

/// Cyclic window `{anchor, anchor-1, …, anchor-len+1} mod period_count`,
/// in that order.
///
/// For the constraint of period `anchor`, these are the start periods whose
/// shifts of length `len` are still running.
///
/// # Panics
/// Panics in debug mode if `anchor >= period_count` or `len > period_count`.
pub fn coverage_window(anchor: usize, len: usize, period_count: usize) -> Vec<usize> {
    debug_assert!(anchor < period_count, "anchor {anchor} outside grid of {period_count}");
    debug_assert!(len <= period_count, "window {len} longer than grid of {period_count}");
    (0..len)
        .map(|back| (anchor + period_count - back) % period_count)
        .collect()
}
