// crates/brine-core/src/manifest.rs
//
// Deployment manifest record: one JSON file per network name, produced
// by the deployment tooling and consumed as a lookup table by operator
// tooling. Only the record shape and its round trip live here.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::BrineError;

/// Addresses of the deployed protocol components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContracts {
    pub reward_token: AccountId,
    pub yield_farm: AccountId,
    pub liquidity_pool: AccountId,
}

/// A deployment record for one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    pub network: String,
    pub timestamp: DateTime<Utc>,
    pub contracts: DeployedContracts,
    pub deployer: AccountId,
}

impl DeploymentManifest {
    /// Write this manifest to `<dir>/<network>.json`, creating the
    /// directory if needed. Returns the written path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, BrineError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.network));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    /// Load the manifest for `network` from `<dir>/<network>.json`.
    pub fn load(dir: &Path, network: &str) -> Result<Self, BrineError> {
        let path = dir.join(format!("{}.json", network));
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeploymentManifest {
        DeploymentManifest {
            network: "regtest".to_string(),
            timestamp: Utc::now(),
            contracts: DeployedContracts {
                reward_token: AccountId::new([1u8; 32]),
                yield_farm: AccountId::new([2u8; 32]),
                liquidity_pool: AccountId::new([3u8; 32]),
            },
            deployer: AccountId::new([9u8; 32]),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let manifest = sample();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: DeploymentManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_save_and_load_per_network() {
        let dir = std::env::temp_dir().join(format!("brine-manifest-{}", std::process::id()));
        let mut a = sample();
        a.network = "rsk-testnet".to_string();
        let mut b = sample();
        b.network = "rsk-mainnet".to_string();
        b.deployer = AccountId::new([7u8; 32]);

        let path_a = a.save(&dir).unwrap();
        let path_b = b.save(&dir).unwrap();
        assert_ne!(path_a, path_b);

        let loaded = DeploymentManifest::load(&dir, "rsk-mainnet").unwrap();
        assert_eq!(loaded, b);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_network() {
        let dir = std::env::temp_dir().join("brine-manifest-missing");
        let err = DeploymentManifest::load(&dir, "nowhere").unwrap_err();
        assert!(matches!(err, BrineError::Manifest(_)));
    }
}
