//! Drives extraction over every target and writes the generated library.

use tracing::{debug, error, info, warn};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::extractor::extract;
use crate::generator::{render, write_library};
use crate::inspector::MethodInspector;
use crate::registry::SelectorRegistry;
use crate::target::Target;

/// What happened to each target during a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Contracts written to the library, in order.
    pub registered: Vec<String>,
    /// Contracts skipped by naming convention; never inspected.
    pub reserved: Vec<String>,
    /// Contracts that reported no selectors.
    pub empty: Vec<String>,
    /// Contracts whose extraction failed.
    pub failed: Vec<String>,
}

/// Inspects `targets` in order and collects their encoded selectors.
///
/// # Errors
/// Returns [`BuildError::Extract`] on the first fatal extraction failure.
/// Other failures are logged and the target is left out.
pub fn collect(
    inspector: &impl MethodInspector,
    targets: &[Target],
) -> Result<(SelectorRegistry, BuildReport), BuildError> {
    let mut registry = SelectorRegistry::new();
    let mut report = BuildReport::default();

    for target in targets {
        let name = target.contract_name();
        if target.is_reserved() {
            debug!(path = target.path(), contract = name, "skipping reserved contract");
            report.reserved.push(name.to_string());
            continue;
        }

        match extract(inspector, target) {
            Ok(selectors) => {
                if registry.insert(name, &selectors) {
                    debug!(contract = name, selectors = selectors.len(), "registered contract");
                    report.registered.push(name.to_string());
                } else {
                    warn!(path = target.path(), contract = name, "no selectors reported");
                    report.empty.push(name.to_string());
                }
            }
            Err(err) if err.is_fatal() => {
                // Reported by the caller once the error propagates.
                debug!(path = target.path(), contract = name, "aborting build: {err}");
                return Err(err.into());
            }
            Err(err) => {
                error!(path = target.path(), contract = name, "error processing contract: {err}");
                report.failed.push(name.to_string());
            }
        }
    }

    Ok((registry, report))
}

/// Builds the library described by `config` using `forge`.
///
/// # Errors
/// See [`build_with`].
pub fn build(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    build_with(&config.inspector(), config)
}

/// Builds the library described by `config` using `inspector`.
///
/// # Errors
/// Returns [`BuildError::Extract`] on malformed inspector output and
/// [`BuildError::Write`] if the library cannot be written. Nothing is written
/// when extraction aborts.
pub fn build_with(
    inspector: &impl MethodInspector,
    config: &BuildConfig,
) -> Result<BuildReport, BuildError> {
    let (registry, report) = collect(inspector, &config.targets)?;

    let path = config.output_path();
    let source = render(&registry);
    write_library(&path, &source).map_err(|source| BuildError::Write {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        registered = report.registered.len(),
        reserved = report.reserved.len(),
        empty = report.empty.len(),
        failed = report.failed.len(),
        "selector library written"
    );
    Ok(report)
}
