mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a profile and exit
    Check {
        /// Path to the profile
        #[arg(default_value = "hopdelay.hcl")]
        path: PathBuf,

        /// Print errors without diagnostic decoration
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved profile
    Dump {
        #[arg(default_value = "hopdelay.hcl")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a commented template profile
    Init {
        /// Directory to create
        #[arg(default_value = "profiles")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
