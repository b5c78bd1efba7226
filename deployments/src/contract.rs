// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Logical contract roles within one deployment of the lending suite.

use std::fmt;

/// A contract role in the deployed lending suite.
///
/// Each role corresponds to exactly one address field in a
/// [`DeploymentManifest`](crate::manifest::DeploymentManifest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contract {
    /// Test token contract (TUSDC).
    TestToken,
    /// Owner of the deployed test token contract.
    Owner,
    /// aToken contract implementation.
    AToken,
    /// Stable debt token contract implementation.
    StableDebtToken,
    /// Variable debt token contract implementation.
    VariableDebtToken,
    /// Lending pool addresses provider contract.
    LendingPoolAddressesProvider,
    /// Superchain asset contract.
    SuperchainAsset,
    /// Lending pool contract.
    LendingPool,
    /// Proxy admin contract.
    ProxyAdmin,
    /// Lending pool configurator contract.
    LendingPoolConfigurator,
    /// Default reserve interest rate strategy contract.
    DefaultReserveInterestRateStrategy,
    /// Lending rate oracle contract.
    LendingRateOracle,
    /// Router contract (proxy).
    Router,
    /// Router implementation contract.
    RouterImpl,
}

impl Contract {
    /// Every role in the suite, in manifest order.
    pub const ALL: [Contract; 14] = [
        Contract::TestToken,
        Contract::Owner,
        Contract::AToken,
        Contract::StableDebtToken,
        Contract::VariableDebtToken,
        Contract::LendingPoolAddressesProvider,
        Contract::SuperchainAsset,
        Contract::LendingPool,
        Contract::ProxyAdmin,
        Contract::LendingPoolConfigurator,
        Contract::DefaultReserveInterestRateStrategy,
        Contract::LendingRateOracle,
        Contract::Router,
        Contract::RouterImpl,
    ];

    /// The manifest key for this role, as written by the deployment pipeline.
    pub fn key(&self) -> &'static str {
        match self {
            Contract::TestToken => "deployedAddress",
            Contract::Owner => "ownerAddress",
            Contract::AToken => "aTokenAddress",
            Contract::StableDebtToken => "stableDebtTokenAddress",
            Contract::VariableDebtToken => "variableDebtTokenAddress",
            Contract::LendingPoolAddressesProvider => "lendingPoolAddressesProviderAddress",
            Contract::SuperchainAsset => "superchainAssetAddress",
            Contract::LendingPool => "lendingPoolAddress",
            Contract::ProxyAdmin => "proxyAdminAddress",
            Contract::LendingPoolConfigurator => "lendingPoolConfiguratorAddress",
            Contract::DefaultReserveInterestRateStrategy => {
                "defaultReserveInterestRateStrategyAddress"
            }
            Contract::LendingRateOracle => "lendingRateOracleAddress",
            Contract::Router => "routerAddress",
            Contract::RouterImpl => "routerImplAddress",
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in Contract::ALL.iter().enumerate() {
            for b in &Contract::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_key_matches_manifest_field() {
        assert_eq!(Contract::LendingPool.key(), "lendingPoolAddress");
        assert_eq!(Contract::RouterImpl.key(), "routerImplAddress");
        assert_eq!(Contract::TestToken.key(), "deployedAddress");
    }
}
