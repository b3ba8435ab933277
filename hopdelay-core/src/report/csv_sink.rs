use crate::align::MatchedPair;
use crate::error::DelayError;
use crate::event::TimeUnit;
use crate::report::render::format_scaled;
use crate::report::sink::ReportSink;
use crate::report::types::RunSummary;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

const PAIRS_HEADER: &str = "before_timestamp,after_timestamp,delay";
const SUMMARY_HEADER: &str = "name,count,sum,avg,max,min,median,unit,\
                              dropped_before,dropped_after,trailing_before,trailing_after,unmapped";
const CADENCE_HEADER: &str = "fast_count,fast_avg_delay,interval_count,interval_avg_step";

/// Writes `<name>.pairs.csv` and `<name>.summary.csv` into a directory.
///
/// Both files are staged as temporary files next to their destination and only renamed into
/// place by [`ReportSink::finish`]. Dropping the sink earlier leaves nothing behind.
pub struct CsvReportSink {
    dir: PathBuf,
    pairs_path: PathBuf,
    summary_path: PathBuf,
    unit: TimeUnit,
    pairs: Option<BufWriter<NamedTempFile>>,
    summary: Option<NamedTempFile>,
}

impl CsvReportSink {
    pub fn create(dir: &Path, name: &str, unit: TimeUnit) -> Result<Self, DelayError> {
        if !is_valid_report_name(name) {
            return Err(DelayError::configuration(format!(
                "run name '{name}' cannot be used as a report file name"
            )));
        }

        fs::create_dir_all(dir).map_err(|e| DelayError::write_report(dir, e))?;

        let pairs_path = dir.join(format!("{name}.pairs.csv"));
        let summary_path = dir.join(format!("{name}.summary.csv"));

        let staged = NamedTempFile::new_in(dir).map_err(|e| DelayError::write_report(dir, e))?;
        let mut pairs = BufWriter::new(staged);
        writeln!(pairs, "{PAIRS_HEADER}").map_err(|e| DelayError::write_report(&pairs_path, e))?;

        Ok(Self {
            dir: dir.to_path_buf(),
            pairs_path,
            summary_path,
            unit,
            pairs: Some(pairs),
            summary: None,
        })
    }

    pub fn pairs_path(&self) -> &Path {
        &self.pairs_path
    }

    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }

    fn commit(&mut self) -> Result<(), DelayError> {
        let pairs = self.pairs.take().ok_or_else(|| closed(&self.pairs_path))?;
        let summary = self.summary.take().ok_or_else(|| {
            DelayError::write_report(&self.summary_path, io::Error::other("summary was never written"))
        })?;

        let staged = pairs
            .into_inner()
            .map_err(|e| DelayError::write_report(&self.pairs_path, e.into_error()))?;
        staged
            .persist(&self.pairs_path)
            .map_err(|e| DelayError::write_report(&self.pairs_path, e.error))?;

        if let Err(e) = summary.persist(&self.summary_path) {
            let _ = fs::remove_file(&self.pairs_path);
            return Err(DelayError::write_report(&self.summary_path, e.error));
        }

        Ok(())
    }
}

impl ReportSink for CsvReportSink {
    fn write_pair(&mut self, pair: &MatchedPair) -> Result<(), DelayError> {
        let path = &self.pairs_path;
        let writer = self.pairs.as_mut().ok_or_else(|| closed(path))?;

        writeln!(
            writer,
            "{},{},{}",
            pair.before(),
            pair.after(),
            format_scaled(pair.delay() as f64, self.unit)
        )
        .map_err(|e| DelayError::write_report(path, e))
    }

    fn write_summary(&mut self, summary: &RunSummary) -> Result<(), DelayError> {
        let path = &self.summary_path;
        let mut staged =
            NamedTempFile::new_in(&self.dir).map_err(|e| DelayError::write_report(path, e))?;

        write_summary_csv(&mut staged, summary, self.unit)
            .map_err(|e| DelayError::write_report(path, e))?;

        self.summary = Some(staged);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DelayError> {
        self.commit()?;

        info!(
            pairs = %self.pairs_path.display(),
            summary = %self.summary_path.display(),
            "report written"
        );
        Ok(())
    }
}

/// Header and one row. The run name is quoted when it needs to be.
fn write_summary_csv(out: &mut impl Write, summary: &RunSummary, unit: TimeUnit) -> io::Result<()> {
    let stats = &summary.stats;
    let a = &summary.alignment;
    let scaled = |v: Option<f64>| v.map(|v| format_scaled(v, unit)).unwrap_or_default();

    let mut header: Vec<&str> = SUMMARY_HEADER.split(',').collect();
    let mut row = vec![
        summary.name.clone(),
        stats.count.to_string(),
        format_scaled(stats.sum as f64, unit),
        format_scaled(stats.mean, unit),
        format_scaled(stats.max as f64, unit),
        format_scaled(stats.min as f64, unit),
        scaled(stats.median),
        unit.to_string(),
        a.dropped_before.to_string(),
        a.dropped_after.to_string(),
        a.trailing_before.to_string(),
        a.trailing_after.to_string(),
        summary.unmapped_records.to_string(),
    ];

    if let Some(c) = &summary.cadence {
        header.extend(CADENCE_HEADER.split(','));
        row.extend([
            c.fast_count.to_string(),
            scaled(c.fast_mean_delay),
            c.interval_count.to_string(),
            scaled(c.interval_mean_step),
        ]);
    }

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&header)?;
    writer.write_record(&row)?;
    writer.flush()
}

/// Run names become file stems, so they must stay inside the report directory.
pub(crate) fn is_valid_report_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

fn closed(path: &Path) -> DelayError {
    DelayError::write_report(path, io::Error::other("report sink already finished"))
}
