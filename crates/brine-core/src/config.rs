// crates/brine-core/src/config.rs
//
// Protocol configuration for the Brine core.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

/// Tunable protocol parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolConfig {
    /// Network name; also names the deployment manifest file.
    #[serde(default = "default_network")]
    pub network: String,

    /// Reward emission per block, in wei. Fits u64: the 1 BRN/block
    /// default is 10^18 wei.
    #[serde(default = "default_reward_per_block_wei")]
    pub reward_per_block_wei: u64,
}

fn default_network() -> String {
    "regtest".to_string()
}

fn default_reward_per_block_wei() -> u64 {
    1_000_000_000_000_000_000
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            reward_per_block_wei: default_reward_per_block_wei(),
        }
    }
}

impl ProtocolConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: ProtocolConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}
