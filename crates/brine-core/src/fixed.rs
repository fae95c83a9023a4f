// crates/brine-core/src/fixed.rs
//
// Shared exact-arithmetic primitives.
//
// All monetary math in the workspace runs through checked u128 operations
// in this module. Reward accounting scales intermediate values by
// PRECISION (10^12) so per-share entitlements survive integer division
// without rounding drift. Overflow is an accounting defect, never a wrap.

use crate::error::BrineError;

/// Scaling factor for per-share reward accounting. A staker's entitlement
/// is tracked as `principal * acc_reward_per_share / PRECISION`.
pub const PRECISION: u128 = 1_000_000_000_000;

/// Checked `a * b / denominator`.
///
/// # Errors
/// Returns `BrineError::AccountingInvariant` if the product overflows
/// u128 or the denominator is zero.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, BrineError> {
    if denominator == 0 {
        return Err(BrineError::AccountingInvariant(format!(
            "division by zero in {} * {} / 0",
            a, b
        )));
    }
    let product = a.checked_mul(b).ok_or_else(|| {
        BrineError::AccountingInvariant(format!("overflow in {} * {}", a, b))
    })?;
    Ok(product / denominator)
}

/// Integer square root via Newton's method. Returns floor(sqrt(n)).
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x / 2 + 1;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_exact() {
        assert_eq!(mul_div(6, 7, 2).unwrap(), 21);
    }

    #[test]
    fn test_mul_div_floors() {
        assert_eq!(mul_div(7, 3, 2).unwrap(), 10); // 21 / 2 floors
    }

    #[test]
    fn test_mul_div_by_zero() {
        assert!(matches!(
            mul_div(1, 1, 0),
            Err(BrineError::AccountingInvariant(_))
        ));
    }

    #[test]
    fn test_mul_div_overflow() {
        assert!(matches!(
            mul_div(u128::MAX, 2, 1),
            Err(BrineError::AccountingInvariant(_))
        ));
    }

    #[test]
    fn test_mul_div_precision_round_trip() {
        // principal * (PRECISION) / PRECISION is the identity
        let principal = 123_456_789_000_000_000u128;
        assert_eq!(mul_div(principal, PRECISION, PRECISION).unwrap(), principal);
    }

    #[test]
    fn test_isqrt_small() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
    }

    #[test]
    fn test_isqrt_perfect_square() {
        // 10^20 squared
        let n = 100_000_000_000_000_000_000u128;
        assert_eq!(isqrt(n * n), n);
    }

    #[test]
    fn test_isqrt_floors() {
        let n = 100_000_000_000_000_000_000u128;
        assert_eq!(isqrt(n * n + 1), n);
        assert_eq!(isqrt(n * n - 1), n - 1);
    }
}
