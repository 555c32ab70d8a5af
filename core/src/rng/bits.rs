//! Bit-width helpers for range reduction

/// Number of bits needed to represent `value`.
///
/// `1 + floor(log2(value))` for `value > 0`, and `1` for `0`. Computed by
/// bit scanning, so power-of-two boundaries are exact.
///
/// # Example
/// ```
/// use seedstream_core_rs::rng::bits::bit_width;
///
/// assert_eq!(bit_width(4), 3);
/// assert_eq!(bit_width(7), 3);
/// assert_eq!(bit_width(8), 4);
/// ```
#[inline]
pub fn bit_width(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        u64::BITS - value.leading_zeros()
    }
}

/// Smallest all-ones mask `2^b - 1` with `2^b - 1 >= value`.
#[inline]
pub fn mask_for(value: u64) -> u64 {
    match bit_width(value) {
        u64::BITS => u64::MAX,
        width => (1u64 << width) - 1,
    }
}
