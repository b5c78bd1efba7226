// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment manifest for the Superlend lending-protocol test environment.
//!
//! One manifest describes one fully-deployed instance of the lending suite on
//! a single chain. The deployment pipeline produces the manifest; everything
//! here treats it as read-only. Consumers should call
//! [`DeploymentManifest::validate`] before binding clients to any of the
//! addresses, so a missing or misconfigured contract fails fast with the
//! offending field named.

pub mod contract;
pub(crate) mod error;
pub mod devnet;
pub mod manifest;

pub use contract::Contract;
pub use error::{Error, Result};
pub use manifest::{DeploymentManifest, ManifestError, ValidationError};
