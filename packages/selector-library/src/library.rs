//! In-process model of the generated `resolveSelectors` lookup.

use alloy_primitives::{keccak256, Selector, B256};
use alloy_sol_types::SolValue;

use crate::encoder::dynamic_array_head;
use crate::error::{DecodeError, LookupError};
use crate::registry::SelectorRegistry;

/// Resolves facet selectors the same way the generated Solidity library does:
/// hash comparison in registry order, then `abi.decode(..., (bytes4[]))`.
#[derive(Clone, Debug)]
pub struct SelectorLibrary {
    branches: Vec<(B256, Vec<u8>)>,
}

impl SelectorLibrary {
    /// Builds the lookup for `registry`.
    ///
    /// # Errors
    /// Returns [`DecodeError::Hex`] if a registered blob is not hex.
    pub fn from_registry(registry: &SelectorRegistry) -> Result<Self, DecodeError> {
        let head = dynamic_array_head();
        let branches = registry
            .iter()
            .map(|(name, blob)| -> Result<_, DecodeError> {
                let calldata = hex::decode(format!("{head}{blob}"))?;
                Ok((keccak256(name.as_bytes()), calldata))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { branches })
    }

    /// Returns the selectors registered for `facet_name`.
    ///
    /// # Errors
    /// Returns [`LookupError::SelectorNotFound`] for unknown facets.
    pub fn resolve_selectors(&self, facet_name: &str) -> Result<Vec<Selector>, LookupError> {
        let requested = keccak256(facet_name.as_bytes());
        let (_, calldata) = self
            .branches
            .iter()
            .find(|(hash, _)| *hash == requested)
            .ok_or(LookupError::SelectorNotFound)?;
        Ok(Vec::<Selector>::abi_decode(calldata)?)
    }
}
