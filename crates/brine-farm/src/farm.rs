// crates/brine-farm/src/farm.rs
//
// The stake accounting engine.
//
// One global accumulator (`acc_reward_per_share`, scaled by PRECISION)
// tracks reward earned per unit staked since genesis. An account's
// entitlement at any block is `principal * acc / PRECISION - reward_debt`,
// so settlement never iterates over other stakers.
//
// Every operation is atomic: all arithmetic and the reward mint happen
// before any field is written, so an error of any kind leaves the farm
// exactly as it was. The engine assumes a single logical execution
// context; a multithreaded host must wrap it in its own mutex (the pool
// engine takes a separate one — the two never share a lock).

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use brine_core::fixed::{mul_div, PRECISION};
use brine_core::{AccountId, BrineError, RewardMinter};

use crate::events::{EmergencyWithdraw, RewardsClaimed, Staked, Withdrawn};
use crate::position::StakePosition;

/// Default emission: 1 BRN per block.
pub const DEFAULT_REWARD_PER_BLOCK_WEI: u128 = 1_000_000_000_000_000_000;

/// Read-only snapshot of one account's standing, as reported to
/// operator tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub principal: u128,
    pub pending_reward: u128,
    /// None for accounts that have never staked.
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Per-account stake records plus the global reward accumulator.
#[derive(Debug, Clone)]
pub struct YieldFarm {
    /// Identity this farm mints under; must be granted minting rights
    /// on the reward token at deployment.
    authority: AccountId,
    /// Emission rate in wei per block. Configuration constant.
    reward_per_block: u128,
    /// Reward earned per unit staked since genesis, scaled by PRECISION.
    /// Monotonically non-decreasing; flat while nothing is staked.
    acc_reward_per_share: u128,
    /// Last block at which the accumulator was advanced.
    last_reward_block: u64,
    /// Sum of all principals. Equals the map's principal sum at all times.
    total_staked: u128,
    positions: HashMap<AccountId, StakePosition>,
}

impl YieldFarm {
    /// Create a farm that starts accruing at `start_block`.
    pub fn new(authority: AccountId, reward_per_block: u128, start_block: u64) -> Self {
        Self {
            authority,
            reward_per_block,
            acc_reward_per_share: 0,
            last_reward_block: start_block,
            total_staked: 0,
            positions: HashMap::new(),
        }
    }

    /// The accumulator-advance algorithm, computed without mutating
    /// state. Returns the `(acc_reward_per_share, last_reward_block)`
    /// pair as they would stand at `current_block`.
    ///
    /// While `total_staked == 0` the block pointer advances but the
    /// accumulator stays flat: emission over an empty farm is not
    /// banked for later stakers.
    fn advanced_accumulator(&self, current_block: u64) -> Result<(u128, u64), BrineError> {
        if current_block <= self.last_reward_block {
            return Ok((self.acc_reward_per_share, self.last_reward_block));
        }
        if self.total_staked == 0 {
            return Ok((self.acc_reward_per_share, current_block));
        }
        let elapsed = u128::from(current_block - self.last_reward_block);
        let emission = elapsed.checked_mul(self.reward_per_block).ok_or_else(|| {
            BrineError::AccountingInvariant(format!(
                "emission overflow over {} blocks at {} wei/block",
                elapsed, self.reward_per_block
            ))
        })?;
        let delta = mul_div(emission, PRECISION, self.total_staked)?;
        let acc = self.acc_reward_per_share.checked_add(delta).ok_or_else(|| {
            BrineError::AccountingInvariant("reward accumulator overflow".to_string())
        })?;
        Ok((acc, current_block))
    }

    /// Entitlement accrued to `position` beyond its last settlement,
    /// against an already-advanced accumulator value.
    fn pending_at(position: &StakePosition, acc: u128) -> Result<u128, BrineError> {
        let gross = mul_div(position.principal, acc, PRECISION)?;
        debug_assert!(
            gross >= position.reward_debt,
            "gross entitlement {} below reward debt {}",
            gross,
            position.reward_debt
        );
        gross.checked_sub(position.reward_debt).ok_or_else(|| {
            BrineError::AccountingInvariant(format!(
                "pending reward underflow: gross {} below reward debt {}",
                gross, position.reward_debt
            ))
        })
    }

    /// Stake `amount` wei of the base asset for `account`.
    ///
    /// Settles the account's pending reward first (minted via `ledger`),
    /// then credits the principal. A failed mint aborts the whole call.
    ///
    /// # Errors
    /// `BrineError::ZeroAmount` if `amount == 0`; any mint error is
    /// propagated with no state change.
    pub fn stake(
        &mut self,
        ledger: &mut impl RewardMinter,
        account: AccountId,
        amount: u128,
        current_block: u64,
        now: DateTime<Utc>,
    ) -> Result<Staked, BrineError> {
        if amount == 0 {
            return Err(BrineError::ZeroAmount);
        }
        let (acc, block) = self.advanced_accumulator(current_block)?;
        let position = self
            .positions
            .get(&account)
            .cloned()
            .unwrap_or_else(|| StakePosition::empty(now));
        let pending = Self::pending_at(&position, acc)?;
        let new_principal = position.principal.checked_add(amount).ok_or_else(|| {
            BrineError::AccountingInvariant("principal overflow on stake".to_string())
        })?;
        let new_total = self.total_staked.checked_add(amount).ok_or_else(|| {
            BrineError::AccountingInvariant("total stake overflow".to_string())
        })?;
        let new_debt = mul_div(new_principal, acc, PRECISION)?;

        if pending > 0 {
            ledger.mint(&self.authority, &account, pending)?;
        }

        self.acc_reward_per_share = acc;
        self.last_reward_block = block;
        self.total_staked = new_total;
        self.positions.insert(
            account,
            StakePosition {
                principal: new_principal,
                reward_debt: new_debt,
                last_action_time: now,
            },
        );
        tracing::debug!(account = %account, amount = %amount, settled = %pending, "stake");
        Ok(Staked { account, amount })
    }

    /// Withdraw `amount` wei of staked principal for `account`.
    ///
    /// Settles the pending reward exactly as `stake` does, then debits
    /// the principal. The returned event carries the amount the caller
    /// must hand back in base asset.
    ///
    /// # Errors
    /// `BrineError::InsufficientStake` if `amount` exceeds the staked
    /// principal; any mint error is propagated with no state change.
    pub fn withdraw(
        &mut self,
        ledger: &mut impl RewardMinter,
        account: AccountId,
        amount: u128,
        current_block: u64,
        now: DateTime<Utc>,
    ) -> Result<Withdrawn, BrineError> {
        let position = self
            .positions
            .get(&account)
            .cloned()
            .unwrap_or_else(|| StakePosition::empty(now));
        if amount > position.principal {
            return Err(BrineError::InsufficientStake {
                requested: amount,
                available: position.principal,
            });
        }
        let (acc, block) = self.advanced_accumulator(current_block)?;
        let pending = Self::pending_at(&position, acc)?;
        let new_principal = position.principal - amount;
        let new_total = self.total_staked.checked_sub(amount).ok_or_else(|| {
            BrineError::AccountingInvariant(format!(
                "total stake {} below withdrawal {}",
                self.total_staked, amount
            ))
        })?;
        let new_debt = mul_div(new_principal, acc, PRECISION)?;

        if pending > 0 {
            ledger.mint(&self.authority, &account, pending)?;
        }

        self.acc_reward_per_share = acc;
        self.last_reward_block = block;
        self.total_staked = new_total;
        self.positions.insert(
            account,
            StakePosition {
                principal: new_principal,
                reward_debt: new_debt,
                last_action_time: now,
            },
        );
        tracing::debug!(account = %account, amount = %amount, settled = %pending, "withdraw");
        Ok(Withdrawn { account, amount })
    }

    /// Settle and mint the account's pending reward without touching
    /// the principal. A zero pending reward is a successful no-op.
    pub fn claim_rewards(
        &mut self,
        ledger: &mut impl RewardMinter,
        account: AccountId,
        current_block: u64,
        now: DateTime<Utc>,
    ) -> Result<RewardsClaimed, BrineError> {
        let (acc, block) = self.advanced_accumulator(current_block)?;
        let position = self
            .positions
            .get(&account)
            .cloned()
            .unwrap_or_else(|| StakePosition::empty(now));
        let pending = Self::pending_at(&position, acc)?;
        let new_debt = mul_div(position.principal, acc, PRECISION)?;

        if pending > 0 {
            ledger.mint(&self.authority, &account, pending)?;
        }

        self.acc_reward_per_share = acc;
        self.last_reward_block = block;
        self.positions.insert(
            account,
            StakePosition {
                principal: position.principal,
                reward_debt: new_debt,
                last_action_time: now,
            },
        );
        tracing::debug!(account = %account, amount = %pending, "claim rewards");
        Ok(RewardsClaimed {
            account,
            amount: pending,
        })
    }

    /// Return the account's full principal immediately, forfeiting any
    /// pending reward. Never touches the reward ledger — this is the
    /// escape hatch for when the reward asset is unavailable.
    ///
    /// The accumulator is still advanced before the principal leaves,
    /// so per-block emission accounting for remaining stakers stays
    /// exact block range by block range.
    pub fn emergency_withdraw(
        &mut self,
        account: AccountId,
        current_block: u64,
        now: DateTime<Utc>,
    ) -> Result<EmergencyWithdraw, BrineError> {
        let (acc, block) = self.advanced_accumulator(current_block)?;
        let principal = self
            .positions
            .get(&account)
            .map(|p| p.principal)
            .unwrap_or(0);
        let new_total = self.total_staked.checked_sub(principal).ok_or_else(|| {
            BrineError::AccountingInvariant(format!(
                "total stake {} below principal {}",
                self.total_staked, principal
            ))
        })?;

        self.acc_reward_per_share = acc;
        self.last_reward_block = block;
        self.total_staked = new_total;
        self.positions.insert(
            account,
            StakePosition {
                principal: 0,
                reward_debt: 0,
                last_action_time: now,
            },
        );
        tracing::warn!(account = %account, amount = %principal, "emergency withdraw, pending reward forfeited");
        Ok(EmergencyWithdraw {
            account,
            amount: principal,
        })
    }

    /// Reward that would be realized if settlement ran at
    /// `current_block`. Pure read: the accumulator advance is computed
    /// but never persisted.
    pub fn pending_rewards(
        &self,
        account: &AccountId,
        current_block: u64,
    ) -> Result<u128, BrineError> {
        let (acc, _) = self.advanced_accumulator(current_block)?;
        match self.positions.get(account) {
            Some(position) => Self::pending_at(position, acc),
            None => Ok(0),
        }
    }

    /// Snapshot of an account's standing for the operator query surface.
    pub fn user_info(
        &self,
        account: &AccountId,
        current_block: u64,
    ) -> Result<UserInfo, BrineError> {
        let pending_reward = self.pending_rewards(account, current_block)?;
        let position = self.positions.get(account);
        Ok(UserInfo {
            principal: position.map(|p| p.principal).unwrap_or(0),
            pending_reward,
            last_action_time: position.map(|p| p.last_action_time),
        })
    }

    /// Sum of all staked principal, in wei.
    pub fn total_staked(&self) -> u128 {
        self.total_staked
    }

    /// Emission rate in wei per block.
    pub fn reward_per_block(&self) -> u128 {
        self.reward_per_block
    }

    /// The identity this farm mints under.
    pub fn authority(&self) -> &AccountId {
        &self.authority
    }

    /// The account's stake record, if it has ever staked.
    pub fn position(&self, account: &AccountId) -> Option<&StakePosition> {
        self.positions.get(account)
    }
}
