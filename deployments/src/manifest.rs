// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment manifest definitions.
//!
//! The deployment pipeline writes one manifest per environment, associating
//! each contract role with its deployed address. This module only defines the
//! shape and reads it back; producing the addresses is the pipeline's job.

use std::{collections::HashMap, fs, path::Path};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::contract::Contract;

/// Filename for on-disk deployment manifests.
pub const FILENAME: &str = "deployment.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing deployment manifest")]
    Missing,
}

/// A manifest field holding the zero address.
#[derive(Debug, thiserror::Error)]
#[error("manifest field {0} is the zero address")]
pub struct ValidationError(pub Contract);

/// Addresses of one deployed instance of the lending suite.
///
/// All fourteen fields are required; a manifest missing any of them fails to
/// deserialize. The struct is a plain value type with no setters, so a loaded
/// manifest never changes for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentManifest {
    /// Test token contract (TUSDC).
    pub deployed_address: Address,
    /// Owner of the deployed test token contract.
    pub owner_address: Address,
    /// aToken contract implementation.
    pub a_token_address: Address,
    /// Stable debt token contract implementation.
    pub stable_debt_token_address: Address,
    /// Variable debt token contract implementation.
    pub variable_debt_token_address: Address,
    /// Lending pool addresses provider contract.
    pub lending_pool_addresses_provider_address: Address,
    /// Superchain asset contract.
    pub superchain_asset_address: Address,
    /// Lending pool contract.
    pub lending_pool_address: Address,
    /// Proxy admin contract.
    pub proxy_admin_address: Address,
    /// Lending pool configurator contract.
    pub lending_pool_configurator_address: Address,
    /// Default reserve interest rate strategy contract.
    pub default_reserve_interest_rate_strategy_address: Address,
    /// Lending rate oracle contract.
    pub lending_rate_oracle_address: Address,
    /// Router contract (proxy).
    pub router_address: Address,
    /// Router implementation contract.
    pub router_impl_address: Address,
}

impl DeploymentManifest {
    /// Loads a manifest from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::Missing);
        }

        let contents = fs::read_to_string(path)?;
        let manifest = toml::from_str(&contents)?;
        log::debug!("loaded deployment manifest from {}", path.display());
        Ok(manifest)
    }

    /// Loads a manifest from a JSON file, the format the deployment pipeline
    /// historically emitted.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::Missing);
        }

        let contents = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&contents)?;
        log::debug!("loaded deployment manifest from {}", path.display());
        Ok(manifest)
    }

    /// Writes the manifest to a TOML file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ManifestError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Serializes the manifest to the pipeline's JSON form.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The deployed address for a contract role.
    pub fn address_of(&self, contract: Contract) -> Address {
        match contract {
            Contract::TestToken => self.deployed_address,
            Contract::Owner => self.owner_address,
            Contract::AToken => self.a_token_address,
            Contract::StableDebtToken => self.stable_debt_token_address,
            Contract::VariableDebtToken => self.variable_debt_token_address,
            Contract::LendingPoolAddressesProvider => {
                self.lending_pool_addresses_provider_address
            }
            Contract::SuperchainAsset => self.superchain_asset_address,
            Contract::LendingPool => self.lending_pool_address,
            Contract::ProxyAdmin => self.proxy_admin_address,
            Contract::LendingPoolConfigurator => self.lending_pool_configurator_address,
            Contract::DefaultReserveInterestRateStrategy => {
                self.default_reserve_interest_rate_strategy_address
            }
            Contract::LendingRateOracle => self.lending_rate_oracle_address,
            Contract::Router => self.router_address,
            Contract::RouterImpl => self.router_impl_address,
        }
    }

    /// Checks that every role has a usable address.
    ///
    /// Callers binding clients to these addresses should run this first and
    /// refuse to start on error. A role left at the zero address means the
    /// pipeline never deployed that contract. Roles sharing an address are
    /// suspicious but legal (proxy wiring mistakes look like this), so they
    /// are only logged.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for contract in Contract::ALL {
            if self.address_of(contract).is_zero() {
                return Err(ValidationError(contract));
            }
        }

        let mut seen: HashMap<Address, Contract> = HashMap::new();
        for contract in Contract::ALL {
            let address = self.address_of(contract);
            if let Some(prev) = seen.insert(address, contract) {
                log::warn!("{prev} and {contract} share address {address}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;
    use crate::devnet;

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeploymentManifest::load(dir.path().join(FILENAME)).unwrap_err();
        assert!(matches!(err, ManifestError::Missing));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME);
        devnet::DEPLOYMENT.write(&path).unwrap();
        let manifest = DeploymentManifest::load(&path).unwrap();
        assert_eq!(manifest, devnet::DEPLOYMENT);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployment.json");
        fs::write(&path, devnet::DEPLOYMENT.to_json().unwrap()).unwrap();
        let manifest = DeploymentManifest::load_json(&path).unwrap();
        assert_eq!(manifest, devnet::DEPLOYMENT);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(&devnet::DEPLOYMENT.to_json().unwrap()).unwrap();
        json.as_object_mut().unwrap().remove("routerImplAddress");
        let err = serde_json::from_value::<DeploymentManifest>(json).unwrap_err();
        assert!(err.to_string().contains("routerImplAddress"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(&devnet::DEPLOYMENT.to_json().unwrap()).unwrap();
        json.as_object_mut()
            .unwrap()
            .insert("extraAddress".into(), "0x0000000000000000000000000000000000000001".into());
        assert!(serde_json::from_value::<DeploymentManifest>(json).is_err());
    }

    #[test]
    fn test_address_of_returns_field_verbatim() {
        let manifest = DeploymentManifest {
            lending_pool_address: address!("0xAbC1230000000000000000000000000000000001"),
            ..devnet::DEPLOYMENT
        };
        assert_eq!(
            manifest.address_of(Contract::LendingPool),
            address!("0xAbC1230000000000000000000000000000000001"),
        );
        // Repeated reads observe the same value.
        assert_eq!(
            manifest.address_of(Contract::LendingPool),
            manifest.address_of(Contract::LendingPool),
        );
    }

    #[test]
    fn test_validate_rejects_zero_address() {
        let manifest = DeploymentManifest {
            router_impl_address: Address::ZERO,
            ..devnet::DEPLOYMENT
        };
        let err = manifest.validate().unwrap_err();
        assert_eq!(err.0, Contract::RouterImpl);
        assert!(err.to_string().contains("routerImplAddress"));
    }

    #[test]
    fn test_validate_allows_shared_addresses() {
        let manifest = DeploymentManifest {
            router_address: devnet::DEPLOYMENT.router_impl_address,
            ..devnet::DEPLOYMENT
        };
        manifest.validate().unwrap();
    }

    #[test]
    fn test_serialized_keys_match_contract_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&devnet::DEPLOYMENT.to_json().unwrap()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), Contract::ALL.len());
        for contract in Contract::ALL {
            assert!(object.contains_key(contract.key()), "missing {contract}");
        }
    }
}
