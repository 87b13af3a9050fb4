/// Radix of one limb.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one full limb, `BASE == 10^DIGITS_PER_LIMB`.
pub const DIGITS_PER_LIMB: usize = 9;

/// Largest magnitude kept in the small value cache.
pub const MAX_CONSTANT: usize = 16;

// A limb product plus an accumulator limb plus a carry must fit in u64.
const _: () = {
    let max_limb = BASE as u64 - 1;
    assert!(max_limb.checked_mul(max_limb).is_some());
    assert!(max_limb * max_limb <= u64::MAX - 2 * max_limb);
    assert!(10u64.pow(DIGITS_PER_LIMB as u32) == BASE as u64);
};
