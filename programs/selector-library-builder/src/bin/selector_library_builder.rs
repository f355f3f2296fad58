use anyhow::Context;
use clap::Parser;
use selector_library_builder::{cli::SelectorBuilderCli, observability::init_observability};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = SelectorBuilderCli::parse();
    init_observability(cli.log_level())?;

    let config = cli.build_config();
    info!(
        root = %config.root.display(),
        tool = %config.tool,
        targets = config.targets.len(),
        "building selector library"
    );

    let report = selector_library::build(&config).context("Failed to build selector library")?;
    if !report.failed.is_empty() {
        info!(failed = ?report.failed, "some contracts were left out of the library");
    }

    Ok(())
}
