//! Seam over the external compiler introspection tool.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::ExtractError;

/// The property requested from the inspector for every contract.
pub const METHOD_IDENTIFIERS: &str = "methodIdentifiers";

/// Captured result of one inspector run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectOutput {
    /// Whether the tool reported success.
    pub success: bool,
    /// Human readable exit status.
    pub status: String,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl InspectOutput {
    /// A successful run that printed `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run that printed `stderr`.
    pub fn failed(status: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Reports the method identifiers of a compiled contract.
pub trait MethodInspector {
    /// Runs the inspector for `contract_id` (`path:name`) and captures its output.
    ///
    /// # Errors
    /// Returns [`ExtractError::Invocation`] if the tool cannot be run at all.
    fn method_identifiers(&self, contract_id: &str) -> Result<InspectOutput, ExtractError>;
}

impl<T: MethodInspector + ?Sized> MethodInspector for &T {
    fn method_identifiers(&self, contract_id: &str) -> Result<InspectOutput, ExtractError> {
        (**self).method_identifiers(contract_id)
    }
}

/// Runs `<tool> inspect <contract> methodIdentifiers` inside a foundry project.
#[derive(Clone, Debug)]
pub struct ForgeInspector {
    tool: String,
    root: PathBuf,
}

impl ForgeInspector {
    /// Creates an inspector running `tool` from the project directory `root`.
    pub fn new(tool: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            root: root.into(),
        }
    }

    /// The configured tool binary.
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }
}

impl MethodInspector for ForgeInspector {
    fn method_identifiers(&self, contract_id: &str) -> Result<InspectOutput, ExtractError> {
        debug!(tool = %self.tool, contract = contract_id, "inspecting contract");
        let output = Command::new(&self.tool)
            .arg("inspect")
            .arg(contract_id)
            .arg(METHOD_IDENTIFIERS)
            .current_dir(&self.root)
            .output()
            .map_err(|source| ExtractError::Invocation {
                tool: self.tool.clone(),
                contract: contract_id.to_string(),
                source,
            })?;

        Ok(InspectOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
