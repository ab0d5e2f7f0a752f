mod bump;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use semver::Version;
use textbump_version::{BumpType, NewVersion};

use crate::error::Result;

pub(crate) struct RunContext {
    pub start_path: PathBuf,
    pub config_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct BumpArgs {
    /// Show the diffs without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Leave `current_version` in the config file untouched
    #[arg(long)]
    pub no_config_update: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Replace the current version with an explicit version
    To {
        /// The new version, e.g. 1.4.0 or 2.0.0-rc.1
        version: Version,

        #[command(flatten)]
        args: BumpArgs,
    },
    /// Increment one part of the current version
    By {
        #[arg(value_enum)]
        part: BumpType,

        #[command(flatten)]
        args: BumpArgs,
    },
}

impl Commands {
    pub(crate) fn execute(self, context: &RunContext) -> Result<()> {
        match self {
            Self::To { version, args } => bump::run(&NewVersion::To(version), &args, context),
            Self::By { part, args } => bump::run(&NewVersion::By(part), &args, context),
        }
    }
}
