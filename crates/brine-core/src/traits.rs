// crates/brine-core/src/traits.rs

use crate::account::AccountId;
use crate::error::BrineError;

/// The reward-asset surface consumed by the stake accounting engine.
///
/// Implemented by `RewardToken`. The engine treats the asset purely as an
/// external collaborator: it mints settled rewards to stakers through
/// this trait and never inspects the balance map directly.
pub trait RewardMinter {
    /// Mint `amount` wei to `recipient`, invoked by `minter`.
    ///
    /// # Errors
    /// Returns `BrineError::UnauthorizedMint` if `minter` has not been
    /// granted minting rights, or `BrineError::SupplyCapExceeded` if the
    /// mint would push total supply past the fixed cap. Callers must
    /// treat either failure as fatal to the enclosing operation.
    fn mint(
        &mut self,
        minter: &AccountId,
        recipient: &AccountId,
        amount: u128,
    ) -> Result<(), BrineError>;

    /// Current balance of `account` in wei. Pure read.
    fn balance_of(&self, account: &AccountId) -> u128;
}
