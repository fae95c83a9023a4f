// crates/brine-pool/src/events.rs
//
// Typed events returned by the pool operations. Observability and test
// assertions only — never control flow.

use brine_core::AccountId;
use serde::{Deserialize, Serialize};

/// Which asset entered the pool in a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    BaseForQuote,
    QuoteForBase,
}

/// Reserves grew and liquidity shares were minted to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityAdded {
    pub account: AccountId,
    pub base_amount: u128,
    pub quote_amount: u128,
    pub shares_minted: u128,
}

/// Shares were burned and the pro-rata reserves paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityRemoved {
    pub account: AccountId,
    pub base_amount: u128,
    pub quote_amount: u128,
    pub shares_burned: u128,
}

/// A swap executed against the constant-product curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub account: AccountId,
    pub amount_in: u128,
    pub amount_out: u128,
    pub direction: SwapDirection,
}
