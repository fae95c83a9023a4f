// crates/brine-farm/src/lib.rs
//
// brine-farm: stake accounting engine for the Brine Protocol.
//
// Tracks each account's staked base-asset principal and settles $BRN
// reward emission on every state-changing call, using a global
// accumulator so entitlements never require iterating all stakers.
// The reward asset is reached only through the `RewardMinter` trait.

pub mod events;
pub mod farm;
pub mod position;

// Re-export key types for ergonomic access from downstream crates.
pub use events::{EmergencyWithdraw, RewardsClaimed, Staked, Withdrawn};
pub use farm::{UserInfo, YieldFarm, DEFAULT_REWARD_PER_BLOCK_WEI};
pub use position::StakePosition;
