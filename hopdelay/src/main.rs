use clap::{Parser, Subcommand};
use hopdelay_core::cli;
use hopdelay_core::cli::analyze::AnalyzeArgs;
use hopdelay_core::cli::batch::BatchArgs;
use hopdelay_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hopdelay",
    version,
    about = "hopdelay: per-event delay between two capture points"
)]
struct Cli {
    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Align two channels and summarize their delays
    Analyze(AnalyzeArgs),

    /// Execute every run listed in a profile
    Batch(BatchArgs),

    /// Profile tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = match init_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("logging error: {e:#}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::analyze(args),
        Command::Batch(args) => cli::batch::batch(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
