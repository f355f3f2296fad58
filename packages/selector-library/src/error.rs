//! Error types for the selector library pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while extracting the selectors of a single contract.
///
/// Only [`ExtractError::MalformedOutput`] is fatal for a build; every other
/// variant skips the contract and the build moves on.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ExtractError {
    /// The inspector output is not a JSON object of signature to selector
    /// strings, whatever its exit status.
    #[error(
        "failed to load JSON for `{contract}` ({status}): {source}; inspector output: {output:?}; inspector stderr: {stderr:?}"
    )]
    MalformedOutput {
        contract: String,
        status: String,
        output: String,
        stderr: String,
        #[source]
        source: serde_json::Error,
    },
    /// The inspector process could not be spawned.
    #[error("failed to run `{tool}` for `{contract}`: {source}")]
    Invocation {
        tool: String,
        contract: String,
        #[source]
        source: std::io::Error,
    },
    /// A reported selector is not hexadecimal.
    #[error("selector {selector:?} of `{signature}` is not valid hex: {source}")]
    InvalidSelectorHex {
        signature: String,
        selector: String,
        #[source]
        source: hex::FromHexError,
    },
    /// A reported selector does not fit in four bytes.
    #[error("selector {selector:?} of `{signature}` is {len} bytes long, expected at most 4")]
    SelectorTooLong {
        signature: String,
        selector: String,
        len: usize,
    },
}

impl ExtractError {
    /// Whether this failure must abort the whole build.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedOutput { .. })
    }
}

/// Failure while decoding an encoded selector blob.
#[derive(Debug, Error, PartialEq)]
#[allow(missing_docs)]
pub enum DecodeError {
    #[error("blob is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("blob is {0} bytes long, too short for a length word")]
    MissingLength(usize),
    #[error("length word does not fit in a usize")]
    LengthOverflow,
    #[error("blob declares {declared} selectors but carries {actual} bytes of elements")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("element {0} has non-zero padding")]
    DirtyPadding(usize),
}

/// Failure of the selector lookup mirrored from the generated library.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No registered facet has the requested name.
    #[error("Selector not found")]
    SelectorNotFound,
    /// The registered blob does not decode as `bytes4[]`.
    #[error("failed to decode selectors: {0}")]
    Abi(#[from] alloy_sol_types::Error),
}

/// Failure that aborts a build.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BuildError {
    /// A fatal extraction failure, see [`ExtractError::is_fatal`].
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// The generated library could not be written.
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
