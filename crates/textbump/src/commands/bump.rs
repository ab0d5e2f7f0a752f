use std::path::Path;

use textbump_config::{DiscoveredConfig, discover_config, load_config, write_current_version};
use textbump_files::{collect_all_planned_changes, perform_changes};
use textbump_format::TextFormatter;
use textbump_version::NewVersion;
use tracing::info;

use super::{BumpArgs, RunContext};
use crate::error::{CliError, Result};
use crate::output::{BumpReport, PlainTextFormatter, ReportFormatter};

pub(crate) fn run(target: &NewVersion, args: &BumpArgs, context: &RunContext) -> Result<()> {
    let discovered = match &context.config_path {
        Some(path) => load_explicit_config(path)?,
        None => discover_config(&context.start_path)?,
    };
    let config = &discovered.config;

    let new_version = target.resolve(&config.current_version);
    info!(
        current = %config.current_version,
        new = %new_version,
        root = %discovered.root.display(),
        "planning version bump"
    );

    let formatter = TextFormatter::new(config.current_version.clone(), new_version.clone(), None);
    let changes = collect_all_planned_changes(&discovered.root, &config.files, &formatter)?;

    let report = BumpReport {
        current_version: &config.current_version,
        new_version: &new_version,
        changes: &changes,
    };
    let output = PlainTextFormatter;

    if args.dry_run {
        print!("{}", output.format_dry_run(&report));
        return Ok(());
    }

    perform_changes(&changes)?;
    if !args.no_config_update {
        write_current_version(&discovered.path, &new_version)?;
    }

    print!(
        "{}",
        output.format_applied(&report, !args.no_config_update)
    );
    Ok(())
}

fn load_explicit_config(path: &Path) -> Result<DiscoveredConfig> {
    let path = path.canonicalize().map_err(|source| CliError::ConfigPath {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_config(&path)?;
    let root = path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::ConfigPath {
            path: path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "config file has no parent directory",
            ),
        })?;

    Ok(DiscoveredConfig { root, path, config })
}
