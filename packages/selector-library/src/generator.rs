//! Renders the `SelectorLibrary` Solidity source.

use std::fs;
use std::path::Path;

use crate::encoder::dynamic_array_head;
use crate::registry::SelectorRegistry;

/// Name of the generated Solidity library.
pub const LIBRARY_NAME: &str = "SelectorLibrary";
/// Name of the generated lookup function.
pub const RESOLVE_FUNCTION: &str = "resolveSelectors";
/// Revert reason of the generated lookup for unknown facets.
pub const NOT_FOUND_REASON: &str = "Selector not found";

const LICENSE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const PRAGMA: &str = "pragma solidity ^0.8.19;";

/// One branch of the generated lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacetEntry<'a> {
    /// Facet name compared against the requested name.
    pub name: &'a str,
    /// Encoded selectors returned for the facet.
    pub blob: &'a str,
}

/// Branches of the generated lookup, in registry order.
#[must_use]
pub fn facet_entries(registry: &SelectorRegistry) -> Vec<FacetEntry<'_>> {
    registry
        .iter()
        .map(|(name, blob)| FacetEntry { name, blob })
        .collect()
}

/// Renders the library source for `registry`.
#[must_use]
pub fn render(registry: &SelectorRegistry) -> String {
    render_entries(&facet_entries(registry))
}

/// Renders the library source for an explicit list of branches.
#[must_use]
pub fn render_entries(entries: &[FacetEntry<'_>]) -> String {
    let head = dynamic_array_head();
    let mut lines = vec![
        LICENSE.to_string(),
        PRAGMA.to_string(),
        format!("library {LIBRARY_NAME} {{"),
        format!(
            "    function {RESOLVE_FUNCTION}(string memory facetName) public pure returns (bytes4[] memory facetSelectors) {{"
        ),
    ];
    for entry in entries {
        lines.push(format!(
            "        if (keccak256(abi.encodePacked(facetName)) == keccak256(abi.encodePacked(\"{}\"))) {{",
            escape_string_literal(entry.name)
        ));
        lines.push(format!(
            "            return abi.decode(hex\"{head}\" hex\"{}\", (bytes4[]));",
            entry.blob
        ));
        lines.push("        }".to_string());
    }
    lines.push(format!("        revert(\"{NOT_FOUND_REASON}\");"));
    lines.push("    }".to_string());
    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

/// Escapes `value` for use inside a double quoted Solidity string literal.
#[must_use]
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Writes `source` to `path`, replacing any previous content.
///
/// # Errors
/// Returns the underlying I/O error.
pub fn write_library(path: &Path, source: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, source)
}
