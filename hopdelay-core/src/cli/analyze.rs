use crate::conf::{
    DropSide, ProfileSpec, SecondarySpec, TimeFormatSpec, load_profile_spec, resolve,
};
use crate::event::{Channel, TimeUnit};
use crate::report::{ReportFormat, default_report_format, render_summary};
use crate::run::{RunProfile, execute};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Capture of the before channel, or of both channels when codes are mapped
    pub before: PathBuf,

    /// Capture of the after channel (positional mode)
    pub after: Option<PathBuf>,

    /// HCL profile supplying defaults; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference date for clock timestamps (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Minutes east of UTC for clock timestamps
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    /// Exclusive lower bound of the tolerance window
    #[arg(long, allow_hyphen_values = true)]
    pub low: Option<i64>,

    /// Inclusive upper bound of the tolerance window
    #[arg(long)]
    pub high: Option<i64>,

    /// Unit of --low, --high and --max-gap
    #[arg(long, value_enum)]
    pub unit: Option<TimeUnit>,

    /// Side dropped when a delay exceeds the window
    #[arg(long, value_enum)]
    pub drop: Option<Channel>,

    /// Channel code mapping, e.g. --map 34=before --map 33=after
    #[arg(long = "map", value_parser = parse_mapping)]
    pub map: Vec<(i64, Channel)>,

    /// Zero-based index of the channel code field
    #[arg(long)]
    pub code_field: Option<usize>,

    /// Zero-based index of the time field
    #[arg(long)]
    pub time_field: Option<usize>,

    #[arg(long)]
    pub delimiter: Option<char>,

    /// Treat the first line as data
    #[arg(long)]
    pub no_header: bool,

    #[arg(long, value_enum)]
    pub time_format: Option<TimeFormatSpec>,

    /// Unit of epoch time fields
    #[arg(long, value_enum)]
    pub epoch_unit: Option<TimeUnit>,

    /// Classify matches by cadence
    #[arg(long, value_enum)]
    pub secondary: Option<SecondarySpec>,

    /// Gap bound for --secondary after-gap, in --unit
    #[arg(long)]
    pub max_gap: Option<i64>,

    /// Directory for CSV reports
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Run name used in reports (defaults to the before file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Summary format on stdout
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl AnalyzeArgs {
    /// Layers the flags over a profile loaded from file (or the defaults).
    pub fn apply(&self, spec: &mut ProfileSpec) {
        if let Some(date) = self.date {
            spec.reference_date = Some(date);
        }
        if let Some(minutes) = self.utc_offset {
            spec.utc_offset_minutes = minutes;
        }

        let record = &mut spec.record;
        if let Some(delimiter) = self.delimiter {
            record.delimiter = delimiter.to_string();
        }
        if self.no_header {
            record.skip_header = false;
        }
        if let Some(field) = self.time_field {
            record.time_field = field;
        }
        if let Some(format) = self.time_format {
            record.time_format = format;
        }
        if let Some(unit) = self.epoch_unit {
            record.epoch_unit = unit;
        }

        if !self.map.is_empty() || self.code_field.is_some() {
            let mut channels = spec.channels.take().unwrap_or_default();
            if let Some(field) = self.code_field {
                channels.field = field;
            }
            if !self.map.is_empty() {
                channels.before = codes(&self.map, Channel::Before);
                channels.after = codes(&self.map, Channel::After);
            }
            spec.channels = Some(channels);
        }

        let tolerance = &mut spec.tolerance;
        if self.low.is_some() {
            tolerance.low = self.low;
        }
        if self.high.is_some() {
            tolerance.high = self.high;
        }
        if let Some(unit) = self.unit {
            tolerance.unit = unit;
        }
        if let Some(drop) = self.drop {
            tolerance.drop = DropSide(drop);
        }
        if let Some(secondary) = self.secondary {
            tolerance.secondary = secondary;
        }
        if self.max_gap.is_some() {
            tolerance.max_gap = self.max_gap;
        }
    }

    fn run_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.before
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "run".to_string())
        })
    }
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let (mut spec, base_dir) = match &args.config {
        Some(path) => (
            load_profile_spec(path)?,
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
        ),
        None => (ProfileSpec::default(), PathBuf::new()),
    };

    args.apply(&mut spec);
    // Inputs come from the command line, not the profile's run list.
    spec.runs.clear();

    let mut settings = resolve(spec, &base_dir)?.settings;
    if let Some(out) = &args.out {
        settings.report.dir = Some(out.clone());
    }

    let profile = RunProfile {
        name: args.run_name(),
        before: args.before.clone(),
        after: args.after.clone(),
        settings,
    };

    let report = execute(&profile)?;

    if let Some(path) = report.persist(&profile.settings.report)? {
        info!(summary = %path.display(), "report written");
    }

    let format = args.format.unwrap_or_else(default_report_format);
    println!("{}", render_summary(&report.summary, format));

    Ok(())
}

fn codes(map: &[(i64, Channel)], channel: Channel) -> Vec<i64> {
    map.iter()
        .filter(|(_, c)| *c == channel)
        .map(|(code, _)| *code)
        .collect()
}

/// Parses `CODE=before|after`.
pub fn parse_mapping(value: &str) -> Result<(i64, Channel)> {
    let (code, channel) = value
        .split_once('=')
        .with_context(|| format!("expected CODE=before|after, got '{value}'"))?;

    let code = code
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid channel code '{code}'"))?;

    let channel = match channel.trim().to_ascii_lowercase().as_str() {
        "before" | "a" => Channel::Before,
        "after" | "b" => Channel::After,
        other => anyhow::bail!("unknown channel '{other}', expected before or after"),
    };

    Ok((code, channel))
}
