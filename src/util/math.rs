//! Small integer helpers shared by the estimator and the scorer.

/// Absolute difference of two channel values.
#[inline]
pub(crate) fn channel_diff(a: u8, b: u8) -> u32 {
    u32::from(a.abs_diff(b))
}

/// Integer-truncated average of a channel sum.
///
/// Callers guarantee `count > 0`; the average of `u8` samples always fits in a `u8`.
#[inline]
pub(crate) fn truncated_mean(sum: u64, count: u64) -> u8 {
    debug_assert!(count > 0);
    (sum / count).min(u64::from(u8::MAX)) as u8
}
