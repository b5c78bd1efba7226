// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Well-known addresses for the local superchain devnet deployment.
//!
//! These are the addresses the deployment pipeline produces on a fresh local
//! devnet, where contract creation is deterministic. Tests and local tooling
//! link against [`DEPLOYMENT`] instead of loading a manifest from disk.

use crate::manifest::DeploymentManifest;

pub mod addresses {
    pub use alloy_primitives::{address, Address};

    pub const TEST_TOKEN: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    pub const OWNER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    pub const A_TOKEN: Address = address!("0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512");
    pub const STABLE_DEBT_TOKEN: Address = address!("0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0");
    pub const VARIABLE_DEBT_TOKEN: Address =
        address!("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9");
    pub const LENDING_POOL_ADDRESSES_PROVIDER: Address =
        address!("0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9");
    pub const SUPERCHAIN_ASSET: Address = address!("0x5FC8d32690cc91D4c39d9d3abcBD16989F875707");
    pub const LENDING_POOL: Address = address!("0x0165878A594ca255338adfa4d48449f69242Eb8F");
    pub const PROXY_ADMIN: Address = address!("0xa513E6E4b8f2a923D98304ec87F64353C4D5C853");
    pub const LENDING_POOL_CONFIGURATOR: Address =
        address!("0x2279B7A0a67DB372996a5FaB50D91eAA73d2eBe6");
    pub const DEFAULT_RESERVE_INTEREST_RATE_STRATEGY: Address =
        address!("0x8A791620dd6260079BF849Dc5567aDC3F2FdC318");
    pub const LENDING_RATE_ORACLE: Address =
        address!("0x610178dA211FEF7D417bC0e6FeD39F05609AD788");
    pub const ROUTER: Address = address!("0xB7f8BC63BbcaD18155201308C8f3540b07f84F5e");
    pub const ROUTER_IMPL: Address = address!("0x0DCd1Bf9A1b36cE34237eEaFef220932846BCD82");
}

/// The local devnet deployment of the lending suite.
pub const DEPLOYMENT: DeploymentManifest = DeploymentManifest {
    deployed_address: addresses::TEST_TOKEN,
    owner_address: addresses::OWNER,
    a_token_address: addresses::A_TOKEN,
    stable_debt_token_address: addresses::STABLE_DEBT_TOKEN,
    variable_debt_token_address: addresses::VARIABLE_DEBT_TOKEN,
    lending_pool_addresses_provider_address: addresses::LENDING_POOL_ADDRESSES_PROVIDER,
    superchain_asset_address: addresses::SUPERCHAIN_ASSET,
    lending_pool_address: addresses::LENDING_POOL,
    proxy_admin_address: addresses::PROXY_ADMIN,
    lending_pool_configurator_address: addresses::LENDING_POOL_CONFIGURATOR,
    default_reserve_interest_rate_strategy_address:
        addresses::DEFAULT_RESERVE_INTEREST_RATE_STRATEGY,
    lending_rate_oracle_address: addresses::LENDING_RATE_ORACLE,
    router_address: addresses::ROUTER,
    router_impl_address: addresses::ROUTER_IMPL,
};
