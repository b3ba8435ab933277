use crate::event::TimeUnit;
use crate::report::types::RunSummary;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

pub fn default_report_format() -> ReportFormat {
    if io::stdout().is_terminal() {
        ReportFormat::Pretty
    } else {
        ReportFormat::Plain
    }
}

/// Formats a nanosecond quantity in `unit` with the shortest exact representation.
pub(crate) fn format_scaled(nanos: f64, unit: TimeUnit) -> String {
    format!("{}", unit.from_nanos(nanos))
}

pub fn render_summary(summary: &RunSummary, format: ReportFormat) -> String {
    match format {
        ReportFormat::Pretty => render_pretty(summary),
        ReportFormat::Plain => render_plain(summary),
        ReportFormat::Json => render_json(summary),
    }
}

fn render_plain(summary: &RunSummary) -> String {
    let unit = summary.unit;
    let s = &summary.stats;
    let a = &summary.alignment;

    let mut out = String::new();
    out.push_str(&format!("run: {}\n", summary.name));
    out.push_str(&format!("count: {}\n", s.count));
    out.push_str(&format!("avg: {}{unit}\n", format_scaled(s.mean, unit)));
    out.push_str(&format!("max: {}{unit}\n", format_scaled(s.max as f64, unit)));
    out.push_str(&format!("min: {}{unit}\n", format_scaled(s.min as f64, unit)));
    if let Some(median) = s.median {
        out.push_str(&format!("median: {}{unit}\n", format_scaled(median, unit)));
    }
    out.push_str(&format!(
        "dropped: before={} after={}\n",
        a.dropped_before, a.dropped_after
    ));
    out.push_str(&format!(
        "trailing: before={} after={}\n",
        a.trailing_before, a.trailing_after
    ));
    out.push_str(&format!("unmapped: {}\n", summary.unmapped_records));

    if let Some(c) = &summary.cadence {
        out.push_str(&format!(
            "fast: {} (avg delay {})\n",
            c.fast_count,
            optional(c.fast_mean_delay, unit)
        ));
        out.push_str(&format!(
            "interval: {} (avg step {})\n",
            c.interval_count,
            optional(c.interval_mean_step, unit)
        ));
    }

    out
}

fn render_pretty(summary: &RunSummary) -> String {
    let unit = summary.unit;
    let s = &summary.stats;
    let a = &summary.alignment;

    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "Delay summary".bold(),
        format!("({})", summary.name).dimmed()
    ));
    out.push_str("==========================\n");
    out.push_str(&format!(
        "matched {} of {} before / {} after events\n\n",
        s.count.green(),
        a.before_events,
        a.after_events
    ));

    let rows = [
        ("avg", Some(s.mean)),
        ("median", s.median),
        ("min", Some(s.min as f64)),
        ("max", Some(s.max as f64)),
    ];
    for (label, value) in rows {
        out.push_str(&format!(
            "  {:<8} {:>16}\n",
            label,
            optional(value, unit).cyan().to_string()
        ));
    }
    out.push('\n');

    let dropped = format!(
        "dropped: before={} after={} | trailing: before={} after={} | unmapped={}",
        a.dropped_before,
        a.dropped_after,
        a.trailing_before,
        a.trailing_after,
        summary.unmapped_records
    );
    if a.dropped_before + a.dropped_after > 0 {
        out.push_str(&format!("{}\n", dropped.yellow()));
    } else {
        out.push_str(&format!("{dropped}\n"));
    }

    if let Some(c) = &summary.cadence {
        out.push_str(&format!(
            "cadence: fast={} (avg delay {}) interval={} (avg step {})\n",
            c.fast_count,
            optional(c.fast_mean_delay, unit),
            c.interval_count,
            optional(c.interval_mean_step, unit)
        ));
    }

    out
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    name: &'a str,
    unit: TimeUnit,
    count: usize,
    sum: f64,
    avg: f64,
    max: f64,
    min: f64,
    median: Option<f64>,
    alignment: &'a crate::align::AlignmentCounts,
    unmapped_records: usize,
    cadence: Option<CadenceJson>,
}

#[derive(Serialize)]
struct CadenceJson {
    fast_count: usize,
    fast_avg_delay: Option<f64>,
    interval_count: usize,
    interval_avg_step: Option<f64>,
}

fn render_json(summary: &RunSummary) -> String {
    let unit = summary.unit;
    let s = &summary.stats;

    let json = SummaryJson {
        name: &summary.name,
        unit,
        count: s.count,
        sum: unit.from_nanos(s.sum as f64),
        avg: unit.from_nanos(s.mean),
        max: unit.from_nanos(s.max as f64),
        min: unit.from_nanos(s.min as f64),
        median: s.median.map(|m| unit.from_nanos(m)),
        alignment: &summary.alignment,
        unmapped_records: summary.unmapped_records,
        cadence: summary.cadence.map(|c| CadenceJson {
            fast_count: c.fast_count,
            fast_avg_delay: c.fast_mean_delay.map(|v| unit.from_nanos(v)),
            interval_count: c.interval_count,
            interval_avg_step: c.interval_mean_step.map(|v| unit.from_nanos(v)),
        }),
    };

    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string_pretty(&json).unwrap_or_default()
}

fn optional(value: Option<f64>, unit: TimeUnit) -> String {
    match value {
        Some(v) => format!("{}{unit}", format_scaled(v, unit)),
        None => "-".to_string(),
    }
}
