// crates/brine-pool/src/pool.rs
//
// The liquidity exchange state machine.
//
// The pool is Empty (both reserves and total shares zero) until the
// first deposit, then Active (both reserves positive). Draining the
// last share resets the reserves to exactly zero so a later first
// deposit cannot inherit a stale price.
//
// Every operation is atomic: preconditions and curve math run before
// any field is written, so an error of any kind leaves the pool exactly
// as it was. The engine assumes a single logical execution context; a
// multithreaded host must wrap it in its own mutex, separate from the
// farm's.

use std::collections::HashMap;

use brine_core::{AccountId, BrineError};

use crate::curve;
use crate::events::{LiquidityAdded, LiquidityRemoved, Swap, SwapDirection};

/// Pooled reserves of the base and quote assets plus liquidity-share
/// accounting.
#[derive(Debug, Clone, Default)]
pub struct LiquidityPool {
    /// Base-asset balance held by the pool, in wei.
    reserve_base: u128,
    /// Quote-asset balance held by the pool, in wei.
    reserve_quote: u128,
    /// Sum of all providers' shares. Equals the map's share sum.
    total_shares: u128,
    positions: HashMap<AccountId, u128>,
}

impl LiquidityPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit a pair of amounts and mint liquidity shares.
    ///
    /// The first deposit sets the price and mints
    /// `isqrt(base * quote)` shares. Later deposits mint by the smaller
    /// effective ratio; both supplied amounts are consumed in full with
    /// no refund, so the off-ratio excess accrues to existing holders.
    ///
    /// # Errors
    /// `BrineError::ZeroAmount` if either amount is zero;
    /// `BrineError::InsufficientLiquidity` if the share math floors to
    /// zero.
    pub fn add_liquidity(
        &mut self,
        account: AccountId,
        base_amount: u128,
        quote_amount: u128,
    ) -> Result<LiquidityAdded, BrineError> {
        if base_amount == 0 || quote_amount == 0 {
            return Err(BrineError::ZeroAmount);
        }
        let shares = if self.total_shares == 0 {
            curve::initial_shares(base_amount, quote_amount)?
        } else {
            curve::shares_for_deposit(
                self.total_shares,
                base_amount,
                quote_amount,
                self.reserve_base,
                self.reserve_quote,
            )?
        };
        if shares == 0 {
            return Err(BrineError::InsufficientLiquidity(
                "deposit too small to mint a share".to_string(),
            ));
        }
        let new_base = self.reserve_base.checked_add(base_amount).ok_or_else(|| {
            BrineError::AccountingInvariant("base reserve overflow".to_string())
        })?;
        let new_quote = self.reserve_quote.checked_add(quote_amount).ok_or_else(|| {
            BrineError::AccountingInvariant("quote reserve overflow".to_string())
        })?;
        let new_total = self.total_shares.checked_add(shares).ok_or_else(|| {
            BrineError::AccountingInvariant("share supply overflow".to_string())
        })?;

        self.reserve_base = new_base;
        self.reserve_quote = new_quote;
        self.total_shares = new_total;
        *self.positions.entry(account).or_insert(0) += shares;
        tracing::debug!(
            account = %account,
            base = %base_amount,
            quote = %quote_amount,
            shares = %shares,
            "liquidity added"
        );
        Ok(LiquidityAdded {
            account,
            base_amount,
            quote_amount,
            shares_minted: shares,
        })
    }

    /// Burn `shares` and pay out the pro-rata reserves.
    ///
    /// # Errors
    /// `BrineError::ZeroAmount` if `shares == 0`;
    /// `BrineError::InsufficientLiquidity` if `shares` exceeds the
    /// caller's position.
    pub fn remove_liquidity(
        &mut self,
        account: AccountId,
        shares: u128,
    ) -> Result<LiquidityRemoved, BrineError> {
        if shares == 0 {
            return Err(BrineError::ZeroAmount);
        }
        let held = self.liquidity(&account);
        if shares > held {
            return Err(BrineError::InsufficientLiquidity(format!(
                "burning {} shares but only {} held",
                shares, held
            )));
        }
        let (base_out, quote_out) =
            curve::withdrawal_amounts(shares, self.total_shares, self.reserve_base, self.reserve_quote)?;
        let new_base = self.reserve_base.checked_sub(base_out).ok_or_else(|| {
            BrineError::AccountingInvariant("base reserve underflow".to_string())
        })?;
        let new_quote = self.reserve_quote.checked_sub(quote_out).ok_or_else(|| {
            BrineError::AccountingInvariant("quote reserve underflow".to_string())
        })?;

        self.total_shares -= shares;
        *self.positions.entry(account).or_insert(0) -= shares;
        if self.total_shares == 0 {
            // Stale-price guard: the next first deposit must set the
            // price from scratch, so no dust may survive the drain.
            self.reserve_base = 0;
            self.reserve_quote = 0;
        } else {
            self.reserve_base = new_base;
            self.reserve_quote = new_quote;
        }
        tracing::debug!(
            account = %account,
            base = %base_out,
            quote = %quote_out,
            shares = %shares,
            "liquidity removed"
        );
        Ok(LiquidityRemoved {
            account,
            base_amount: base_out,
            quote_amount: quote_out,
            shares_burned: shares,
        })
    }

    /// Swap base asset in for quote asset out.
    pub fn swap_base_for_quote(
        &mut self,
        account: AccountId,
        base_in: u128,
    ) -> Result<Swap, BrineError> {
        let quote_out = self.swap_checked(base_in, self.reserve_base, self.reserve_quote)?;
        let new_base = self.reserve_base.checked_add(base_in).ok_or_else(|| {
            BrineError::AccountingInvariant("base reserve overflow".to_string())
        })?;
        self.reserve_base = new_base;
        self.reserve_quote -= quote_out;
        tracing::debug!(account = %account, amount_in = %base_in, amount_out = %quote_out, "swap base for quote");
        Ok(Swap {
            account,
            amount_in: base_in,
            amount_out: quote_out,
            direction: SwapDirection::BaseForQuote,
        })
    }

    /// Swap quote asset in for base asset out.
    pub fn swap_quote_for_base(
        &mut self,
        account: AccountId,
        quote_in: u128,
    ) -> Result<Swap, BrineError> {
        let base_out = self.swap_checked(quote_in, self.reserve_quote, self.reserve_base)?;
        let new_quote = self.reserve_quote.checked_add(quote_in).ok_or_else(|| {
            BrineError::AccountingInvariant("quote reserve overflow".to_string())
        })?;
        self.reserve_quote = new_quote;
        self.reserve_base -= base_out;
        tracing::debug!(account = %account, amount_in = %quote_in, amount_out = %base_out, "swap quote for base");
        Ok(Swap {
            account,
            amount_in: quote_in,
            amount_out: base_out,
            direction: SwapDirection::QuoteForBase,
        })
    }

    /// Shared swap preconditions and pricing. Mutates nothing.
    fn swap_checked(
        &self,
        amount_in: u128,
        reserve_in: u128,
        reserve_out: u128,
    ) -> Result<u128, BrineError> {
        if amount_in == 0 {
            return Err(BrineError::ZeroAmount);
        }
        if reserve_in == 0 || reserve_out == 0 {
            return Err(BrineError::InsufficientLiquidity(
                "pool has no reserves".to_string(),
            ));
        }
        let amount_out = curve::swap_output(amount_in, reserve_in, reserve_out)?;
        if amount_out == 0 {
            return Err(BrineError::InsufficientLiquidity(
                "swap input too small for any output".to_string(),
            ));
        }
        Ok(amount_out)
    }

    /// Liquidity shares held by `account`. Pure read.
    pub fn liquidity(&self, account: &AccountId) -> u128 {
        self.positions.get(account).copied().unwrap_or(0)
    }

    /// Current `(base, quote)` reserves. Pure read.
    pub fn reserves(&self) -> (u128, u128) {
        (self.reserve_base, self.reserve_quote)
    }

    /// Sum of all providers' shares. Pure read.
    pub fn total_shares(&self) -> u128 {
        self.total_shares
    }
}
