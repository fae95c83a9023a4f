// crates/brine-core/src/error.rs

use thiserror::Error;

/// Protocol-wide error types for the Brine Protocol.
///
/// Every public operation in the farm and pool engines is atomic: any of
/// these errors aborts the whole operation with no partial state change.
#[derive(Debug, Error)]
pub enum BrineError {
    /// An amount parameter was zero where a positive value is required.
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    /// A withdrawal exceeds the caller's staked principal.
    #[error("Insufficient stake: requested {requested} wei but only {available} wei staked")]
    InsufficientStake { requested: u128, available: u128 },

    /// A token transfer exceeds the sender's balance.
    #[error("Insufficient balance: requested {requested} wei but only {available} wei held")]
    InsufficientBalance { requested: u128, available: u128 },

    /// A swap or share burn exceeds what the caller or the pool can support.
    #[error("Insufficient liquidity: {0}")]
    InsufficientLiquidity(String),

    /// Minting would push the reward token's total supply past its fixed cap.
    #[error("Supply cap exceeded: minting {requested} wei would push supply past the {cap} wei cap")]
    SupplyCapExceeded { requested: u128, cap: u128 },

    /// The mint caller has not been granted minting rights.
    #[error("Unauthorized mint by {0}")]
    UnauthorizedMint(String),

    /// Internal accounting defect: a computed reward went negative, an
    /// intermediate product overflowed, or reserves mismatched. Aborts the
    /// operation rather than silently clamping.
    #[error("Accounting invariant violated: {0}")]
    AccountingInvariant(String),

    /// Deployment manifest could not be read, written, or parsed.
    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl From<serde_json::Error> for BrineError {
    fn from(e: serde_json::Error) -> Self {
        BrineError::Manifest(e.to_string())
    }
}

impl From<std::io::Error> for BrineError {
    fn from(e: std::io::Error) -> Self {
        BrineError::Manifest(e.to_string())
    }
}
