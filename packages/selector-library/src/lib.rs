//! Builds the `SelectorLibrary` Solidity helper used by the diamond test suite.
//!
//! The pipeline inspects every configured contract with `forge`, collects its
//! 4-byte function selectors, ABI-encodes them per contract and renders a
//! single library whose `resolveSelectors(facetName)` returns the selectors of
//! the named facet.

#![deny(clippy::nursery, clippy::pedantic, missing_docs)]

pub mod builder;
pub mod config;
pub mod encoder;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod inspector;
pub mod library;
pub mod registry;
pub mod target;

pub use alloy_primitives::Selector;
pub use builder::{build, build_with, collect, BuildReport};
pub use config::BuildConfig;
pub use error::{BuildError, DecodeError, ExtractError, LookupError};
pub use inspector::{ForgeInspector, InspectOutput, MethodInspector};
pub use library::SelectorLibrary;
pub use registry::SelectorRegistry;
pub use target::Target;
