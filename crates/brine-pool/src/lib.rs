// crates/brine-pool/src/lib.rs
//
// brine-pool: constant-product liquidity exchange for the Brine
// Protocol.
//
// Owns pooled reserves of the base and quote assets, liquidity-share
// accounting, and swap pricing with a 0.3% fee retained in the pool.
// Independent of the stake engine; the two only meet at the reward
// asset they both reference.

pub mod curve;
pub mod events;
pub mod pool;

// Re-export key types for ergonomic access from downstream crates.
pub use curve::{FEE_DENOMINATOR, FEE_NUMERATOR};
pub use events::{LiquidityAdded, LiquidityRemoved, Swap, SwapDirection};
pub use pool::LiquidityPool;
