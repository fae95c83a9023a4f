// crates/brine-farm/src/position.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stake accounting record for a single account.
///
/// Created implicitly on the account's first stake and never deleted:
/// a position may return to zero principal and be reused later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// Base-asset principal currently staked, in wei.
    pub principal: u128,

    /// Scaled snapshot of rewards already accounted for at the last
    /// settlement: `principal * acc_reward_per_share / PRECISION` at
    /// that moment. Newly accrued entitlement is everything above it.
    pub reward_debt: u128,

    /// Timestamp of the account's last state-changing action.
    /// Informational only; no accounting depends on it.
    pub last_action_time: DateTime<Utc>,
}

impl StakePosition {
    /// A fresh zero position, stamped with the creation time.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            principal: 0,
            reward_debt: 0,
            last_action_time: now,
        }
    }
}
