// crates/brine-farm/src/events.rs
//
// Typed events returned by the farm operations. Observability and test
// assertions only — never control flow.

use brine_core::AccountId;
use serde::{Deserialize, Serialize};

/// Principal was credited to an account's stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staked {
    pub account: AccountId,
    pub amount: u128,
}

/// Principal was returned to an account after normal settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub account: AccountId,
    pub amount: u128,
}

/// Accrued rewards were minted to an account. A zero amount means the
/// claim found nothing pending; that is a success, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsClaimed {
    pub account: AccountId,
    pub amount: u128,
}

/// Full principal was returned without settlement; any pending reward
/// was forfeited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyWithdraw {
    pub account: AccountId,
    pub amount: u128,
}
