//! Extracts the function selectors of a contract from the inspector output.

use alloy_primitives::Selector;
use indexmap::IndexMap;
use tracing::warn;

use crate::encoder::selector_from_bytes;
use crate::error::ExtractError;
use crate::inspector::{InspectOutput, MethodInspector};
use crate::target::Target;

/// Function signature to selector hex, in the order the inspector reported them.
pub type MethodIdentifiers = IndexMap<String, String>;

/// Inspects `target` and returns its selectors in reported order.
///
/// # Errors
/// Returns [`ExtractError::MalformedOutput`] if the inspector output is not a
/// JSON object of strings, including the empty output of a failed run, and a
/// non-fatal [`ExtractError`] for any other failure.
pub fn extract(
    inspector: &impl MethodInspector,
    target: &Target,
) -> Result<Vec<Selector>, ExtractError> {
    let contract = target.contract_id();
    let output = inspector.method_identifiers(&contract)?;
    let identifiers = parse_method_identifiers(&contract, &output)?;
    if !output.success {
        warn!(contract, status = %output.status, "inspector failed but reported method identifiers");
    }

    identifiers
        .iter()
        .map(|(signature, selector)| parse_selector(signature, selector))
        .collect()
}

/// Parses the captured stdout of the inspector run for `contract`.
///
/// # Errors
/// Returns [`ExtractError::MalformedOutput`] carrying the raw output, the
/// captured stderr and the exit status.
pub fn parse_method_identifiers(
    contract: &str,
    output: &InspectOutput,
) -> Result<MethodIdentifiers, ExtractError> {
    serde_json::from_str(&output.stdout).map_err(|source| ExtractError::MalformedOutput {
        contract: contract.to_string(),
        status: output.status.clone(),
        output: output.stdout.clone(),
        stderr: output.stderr.trim().to_string(),
        source,
    })
}

/// Decodes a selector hex string reported for `signature`.
///
/// A `0x` prefix is accepted, an odd number of digits gets a leading zero and
/// values shorter than four bytes are left-padded.
///
/// # Errors
/// Returns [`ExtractError::InvalidSelectorHex`] or
/// [`ExtractError::SelectorTooLong`].
pub fn parse_selector(signature: &str, selector: &str) -> Result<Selector, ExtractError> {
    let digits = selector.trim();
    let digits = digits.strip_prefix("0x").unwrap_or(digits);
    let decoded = if digits.len() % 2 == 0 {
        hex::decode(digits)
    } else {
        hex::decode(format!("0{digits}"))
    }
    .map_err(|source| ExtractError::InvalidSelectorHex {
        signature: signature.to_string(),
        selector: selector.to_string(),
        source,
    })?;

    selector_from_bytes(&decoded).ok_or_else(|| ExtractError::SelectorTooLong {
        signature: signature.to_string(),
        selector: selector.to_string(),
        len: decoded.len(),
    })
}
