//! Contains the command line interface for the builder.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use selector_library::{
    config::{DEFAULT_OUTPUT, DEFAULT_TOOL},
    BuildConfig,
};
use tracing::Level;

/// The command line interface for the builder.
///
/// Every argument is optional; the defaults regenerate
/// `test/helpers/SelectorLibrary.sol` from the current directory.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "selector-library-builder",
    version,
    about = "Generate the SelectorLibrary Solidity helper from forge method identifiers"
)]
pub struct SelectorBuilderCli {
    /// The foundry project root. Contract paths and the output resolve here.
    #[clap(long, default_value = ".")]
    pub root: PathBuf,

    /// The generated library path, relative to the project root.
    #[clap(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// The inspector binary.
    #[clap(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// The log level. `RUST_LOG` takes precedence when set.
    #[clap(long, default_value = "info")]
    pub log_level: String,
}

impl SelectorBuilderCli {
    /// Returns the log level, falling back to `INFO` when unparsable.
    #[must_use]
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// The build configuration for the fixed target list.
    #[must_use]
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            root: self.root.clone(),
            output: self.output.clone(),
            tool: self.tool.clone(),
            ..BuildConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_build() {
        let cli = SelectorBuilderCli::try_parse_from(["selector-library-builder"]).unwrap();
        assert_eq!(cli.build_config(), BuildConfig::default());
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn overrides_root_output_and_tool() {
        let cli = SelectorBuilderCli::try_parse_from([
            "selector-library-builder",
            "--root",
            "contracts",
            "-o",
            "out/Selectors.sol",
            "--tool",
            "/usr/local/bin/forge",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = cli.build_config();
        assert_eq!(config.output_path(), PathBuf::from("contracts/out/Selectors.sol"));
        assert_eq!(config.tool, "/usr/local/bin/forge");
        assert_eq!(config.targets, BuildConfig::default().targets);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cli =
            SelectorBuilderCli::try_parse_from(["selector-library-builder", "--log-level", "loud"])
                .unwrap();
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(SelectorBuilderCli::try_parse_from(["selector-library-builder", "--watch"]).is_err());
    }
}
