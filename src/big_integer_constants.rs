/// Radix of one limb. Every stored limb is in `[0, BASE)`.
pub const BASE: u32 = 10_000;

/// Decimal digits held by one limb.
pub const BASE_DIGITS: usize = 4;

/// Hard ceiling on the decimal digit count of a multiplication result.
/// A normalized product wider than this is reported as an overflow.
pub const MAX_DECIMAL_DIGITS: usize = 30_009;

/// Largest magnitude served from the constant caches.
pub const MAX_CONSTANT: usize = 16;
