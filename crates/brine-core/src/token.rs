// crates/brine-core/src/token.rs
//
// $BRN (Brine) reward token: a mintable, capped-supply value token.
//
// The smallest unit is the wei. 1 BRN = 10^18 wei. All internal
// accounting uses wei to avoid floating-point precision issues.
//
// Minting is role-gated: only accounts in the granted-minter set may
// mint, and the total supply can never pass the fixed cap. The stake
// accounting engine is granted minting rights at deployment and is the
// only expected minter in normal operation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::BrineError;
use crate::traits::RewardMinter;

/// Number of wei in one BRN. 1 BRN = 10^18 wei.
pub const WEI_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Maximum supply of $BRN in wei: 100,000,000 BRN.
pub const MAX_SUPPLY_WEI: u128 = 100_000_000 * WEI_PER_TOKEN;

/// Initial supply minted to the deployer at construction: 40,000,000 BRN.
pub const INITIAL_SUPPLY_WEI: u128 = 40_000_000 * WEI_PER_TOKEN;

/// The $BRN reward token ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardToken {
    balances: HashMap<AccountId, u128>,
    total_supply: u128,
    cap: u128,
    minters: HashSet<AccountId>,
}

impl RewardToken {
    /// Create the token ledger, minting the initial supply to `deployer`.
    pub fn new(deployer: AccountId) -> Self {
        let mut balances = HashMap::new();
        balances.insert(deployer, INITIAL_SUPPLY_WEI);
        Self {
            balances,
            total_supply: INITIAL_SUPPLY_WEI,
            cap: MAX_SUPPLY_WEI,
            minters: HashSet::new(),
        }
    }

    /// Grant minting rights to `account`.
    pub fn grant_minter(&mut self, account: AccountId) {
        self.minters.insert(account);
    }

    /// Whether `account` holds minting rights.
    pub fn is_minter(&self, account: &AccountId) -> bool {
        self.minters.contains(account)
    }

    /// Transfer `amount` wei from `from` to `to`.
    ///
    /// # Errors
    /// Returns `BrineError::InsufficientBalance` if `from` holds less
    /// than `amount`. The ledger is unchanged on error.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), BrineError> {
        let available = self.balance_of(from);
        if amount > available {
            return Err(BrineError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        *self.balances.entry(*from).or_insert(0) -= amount;
        *self.balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }

    /// Total supply in circulation, in wei.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// The fixed supply cap, in wei.
    pub fn cap(&self) -> u128 {
        self.cap
    }
}

impl RewardMinter for RewardToken {
    fn mint(
        &mut self,
        minter: &AccountId,
        recipient: &AccountId,
        amount: u128,
    ) -> Result<(), BrineError> {
        if !self.minters.contains(minter) {
            return Err(BrineError::UnauthorizedMint(minter.to_string()));
        }
        let new_supply = self.total_supply.checked_add(amount).ok_or_else(|| {
            BrineError::AccountingInvariant(format!(
                "supply overflow minting {} wei onto {} wei",
                amount, self.total_supply
            ))
        })?;
        if new_supply > self.cap {
            return Err(BrineError::SupplyCapExceeded {
                requested: amount,
                cap: self.cap,
            });
        }
        self.total_supply = new_supply;
        *self.balances.entry(*recipient).or_insert(0) += amount;
        Ok(())
    }

    fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployer() -> AccountId {
        AccountId::new([0u8; 32])
    }

    fn user() -> AccountId {
        AccountId::new([1u8; 32])
    }

    fn farm() -> AccountId {
        AccountId::new([2u8; 32])
    }

    #[test]
    fn test_initial_supply_to_deployer() {
        let token = RewardToken::new(deployer());
        assert_eq!(token.balance_of(&deployer()), INITIAL_SUPPLY_WEI);
        assert_eq!(token.total_supply(), INITIAL_SUPPLY_WEI);
    }

    #[test]
    fn test_mint_requires_grant() {
        let mut token = RewardToken::new(deployer());
        let err = token.mint(&farm(), &user(), WEI_PER_TOKEN).unwrap_err();
        assert!(matches!(err, BrineError::UnauthorizedMint(_)));
        assert_eq!(token.balance_of(&user()), 0);
    }

    #[test]
    fn test_mint_after_grant() {
        let mut token = RewardToken::new(deployer());
        token.grant_minter(farm());
        token.mint(&farm(), &user(), 5 * WEI_PER_TOKEN).unwrap();
        assert_eq!(token.balance_of(&user()), 5 * WEI_PER_TOKEN);
        assert_eq!(token.total_supply(), INITIAL_SUPPLY_WEI + 5 * WEI_PER_TOKEN);
    }

    #[test]
    fn test_mint_cannot_exceed_cap() {
        let mut token = RewardToken::new(deployer());
        token.grant_minter(farm());
        let headroom = MAX_SUPPLY_WEI - INITIAL_SUPPLY_WEI;
        let err = token.mint(&farm(), &user(), headroom + 1).unwrap_err();
        assert!(matches!(err, BrineError::SupplyCapExceeded { .. }));
        // Supply and balances unchanged on failure.
        assert_eq!(token.total_supply(), INITIAL_SUPPLY_WEI);
        assert_eq!(token.balance_of(&user()), 0);
    }

    #[test]
    fn test_mint_exactly_to_cap() {
        let mut token = RewardToken::new(deployer());
        token.grant_minter(farm());
        let headroom = MAX_SUPPLY_WEI - INITIAL_SUPPLY_WEI;
        token.mint(&farm(), &user(), headroom).unwrap();
        assert_eq!(token.total_supply(), MAX_SUPPLY_WEI);
    }

    #[test]
    fn test_transfer() {
        let mut token = RewardToken::new(deployer());
        token
            .transfer(&deployer(), &user(), 100 * WEI_PER_TOKEN)
            .unwrap();
        assert_eq!(token.balance_of(&user()), 100 * WEI_PER_TOKEN);
        assert_eq!(
            token.balance_of(&deployer()),
            INITIAL_SUPPLY_WEI - 100 * WEI_PER_TOKEN
        );
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut token = RewardToken::new(deployer());
        let err = token.transfer(&user(), &deployer(), 1).unwrap_err();
        assert!(matches!(err, BrineError::InsufficientBalance { .. }));
    }
}
