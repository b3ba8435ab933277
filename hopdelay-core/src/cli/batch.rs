use crate::conf::{ConfigError, load_config};
use crate::report::{ReportFormat, default_report_format, render_summary};
use crate::run::execute_batch;
use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// HCL profile listing the runs
    #[arg(long, default_value = "hopdelay.hcl")]
    pub config: PathBuf,

    /// Summary format on stdout
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Executes every run of the profile. Successful runs are reported even when others fail.
pub fn batch(args: BatchArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    if config.runs.is_empty() {
        return Err(ConfigError::NoRuns.into());
    }

    let format = args.format.unwrap_or_else(default_report_format);
    let outcomes = execute_batch(&config.runs);

    let mut failed = 0;
    for (outcome, profile) in outcomes.iter().zip(&config.runs) {
        let persisted = outcome
            .result
            .as_ref()
            .map_err(|e| e.to_string())
            .and_then(|report| {
                report
                    .persist(&profile.settings.report)
                    .map(|path| (report, path))
                    .map_err(|e| e.to_string())
            });

        match persisted {
            Ok((report, path)) => {
                if let Some(path) = path {
                    info!(run = %outcome.name, summary = %path.display(), "report written");
                }
                println!("{}", render_summary(&report.summary, format));
            }
            Err(reason) => {
                failed += 1;
                error!(run = %outcome.name, error = %reason, "run failed");
                eprintln!("run '{}' failed: {reason}", outcome.name);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} runs failed", outcomes.len());
    }

    Ok(())
}
