// crates/brine-pool/src/curve.rs
//
// Constant-product pricing math, factored out of the pool state machine
// so it stays pure and directly testable.
//
// Swaps solve x * y = k for the output given a fee-adjusted input:
//   out = reserve_out * in_after_fee / (reserve_in + in_after_fee)
// The fee stays in the pool, which is what makes k strictly increase
// across swaps.

use brine_core::fixed::{isqrt, mul_div};
use brine_core::BrineError;

/// Swap fee numerator: 997/1000 retains a 0.3% fee in the pool.
pub const FEE_NUMERATOR: u128 = 997;

/// Swap fee denominator.
pub const FEE_DENOMINATOR: u128 = 1000;

/// The input amount left after the proportional fee.
pub fn fee_adjusted_input(amount_in: u128) -> Result<u128, BrineError> {
    mul_div(amount_in, FEE_NUMERATOR, FEE_DENOMINATOR)
}

/// Output amount for a swap of `amount_in` against the given reserves,
/// fee applied. Checked throughout; overflow is an accounting defect.
pub fn swap_output(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, BrineError> {
    let in_after_fee = fee_adjusted_input(amount_in)?;
    let denominator = reserve_in.checked_add(in_after_fee).ok_or_else(|| {
        BrineError::AccountingInvariant(format!(
            "reserve overflow adding {} to {}",
            in_after_fee, reserve_in
        ))
    })?;
    mul_div(reserve_out, in_after_fee, denominator)
}

/// Shares minted for the pool-initializing deposit:
/// `isqrt(base * quote)`.
pub fn initial_shares(base_amount: u128, quote_amount: u128) -> Result<u128, BrineError> {
    let product = base_amount.checked_mul(quote_amount).ok_or_else(|| {
        BrineError::AccountingInvariant(format!(
            "overflow in initial deposit product {} * {}",
            base_amount, quote_amount
        ))
    })?;
    Ok(isqrt(product))
}

/// Shares minted for a deposit into an active pool: the smaller of the
/// two effective ratios binds, so an off-ratio deposit cannot mint more
/// than its worse side justifies.
pub fn shares_for_deposit(
    total_shares: u128,
    base_amount: u128,
    quote_amount: u128,
    reserve_base: u128,
    reserve_quote: u128,
) -> Result<u128, BrineError> {
    let by_base = mul_div(total_shares, base_amount, reserve_base)?;
    let by_quote = mul_div(total_shares, quote_amount, reserve_quote)?;
    Ok(by_base.min(by_quote))
}

/// Pro-rata payout for burning `shares`, floored on both sides.
pub fn withdrawal_amounts(
    shares: u128,
    total_shares: u128,
    reserve_base: u128,
    reserve_quote: u128,
) -> Result<(u128, u128), BrineError> {
    let base_out = mul_div(reserve_base, shares, total_shares)?;
    let quote_out = mul_div(reserve_quote, shares, total_shares)?;
    Ok((base_out, quote_out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brine_core::WEI_PER_TOKEN;

    #[test]
    fn test_fee_adjusted_input() {
        assert_eq!(fee_adjusted_input(1000).unwrap(), 997);
        assert_eq!(fee_adjusted_input(WEI_PER_TOKEN / 100).unwrap(), 9_970_000_000_000_000);
    }

    #[test]
    fn test_swap_output_reference_values() {
        // Reserves (1 base, 10000 quote), swap 0.01 base in:
        // out = 10000e18 * 0.00997e18 / (1e18 + 0.00997e18)
        let out = swap_output(WEI_PER_TOKEN / 100, WEI_PER_TOKEN, 10_000 * WEI_PER_TOKEN).unwrap();
        assert_eq!(out, 98_715_803_439_706_129_885);
    }

    #[test]
    fn test_swap_output_less_than_reserve() {
        // The output can never drain the far reserve, even for huge inputs.
        let out = swap_output(u64::MAX as u128, 1_000, 1_000_000).unwrap();
        assert!(out < 1_000_000);
    }

    #[test]
    #[allow(arithmetic_overflow)]
    fn test_swap_preserves_product() {
        let (rb, rq) = (5 * WEI_PER_TOKEN, 50_000 * WEI_PER_TOKEN);
        let amount_in = WEI_PER_TOKEN / 10;
        let out = swap_output(amount_in, rb, rq).unwrap();
        assert!((rb + amount_in) * (rq - out) >= rb * rq);
    }

    #[test]
    fn test_initial_shares_geometric_mean() {
        // 1 base x 10000 quote mints 100 (in token units) worth of shares.
        let shares = initial_shares(WEI_PER_TOKEN, 10_000 * WEI_PER_TOKEN).unwrap();
        assert_eq!(shares, 100 * WEI_PER_TOKEN);
    }

    #[test]
    fn test_shares_for_deposit_binds_on_smaller_ratio() {
        // Pool holds (100, 400) with 1000 shares; a (10, 100) deposit is
        // quote-heavy, so the base side (10%) binds.
        let shares = shares_for_deposit(1000, 10, 100, 100, 400).unwrap();
        assert_eq!(shares, 100);
    }

    #[test]
    fn test_shares_for_balanced_deposit() {
        let shares = shares_for_deposit(1000, 10, 40, 100, 400).unwrap();
        assert_eq!(shares, 100);
    }

    #[test]
    fn test_withdrawal_amounts_pro_rata() {
        let (base_out, quote_out) = withdrawal_amounts(250, 1000, 100, 400).unwrap();
        assert_eq!(base_out, 25);
        assert_eq!(quote_out, 100);
    }

    #[test]
    fn test_withdrawal_of_all_shares_returns_everything() {
        let (base_out, quote_out) = withdrawal_amounts(1000, 1000, 123, 456).unwrap();
        assert_eq!((base_out, quote_out), (123, 456));
    }
}
