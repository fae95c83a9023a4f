// crates/brine-core/src/lib.rs
//
// brine-core: Core types, errors, fixed-point arithmetic, and the $BRN
// reward token for the Brine Protocol.
//
// This is the leaf crate the farm and pool engines depend on. It defines
// the canonical account identifiers, the protocol-wide error taxonomy,
// the exact-arithmetic primitives shared by reward and swap accounting,
// the capped mintable reward token, protocol configuration, and the
// deployment manifest record.

pub mod account;
pub mod config;
pub mod error;
pub mod fixed;
pub mod manifest;
pub mod token;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
pub use account::AccountId;
pub use config::ProtocolConfig;
pub use error::BrineError;
pub use fixed::{isqrt, mul_div, PRECISION};
pub use manifest::{DeployedContracts, DeploymentManifest};
pub use token::{RewardToken, INITIAL_SUPPLY_WEI, MAX_SUPPLY_WEI, WEI_PER_TOKEN};
pub use traits::RewardMinter;
