use hopdelay_core::conf::{ProfileSpec, resolve};
use hopdelay_core::event::TimeUnit;
use hopdelay_core::run::RunProfile;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Scratch directory holding capture files and reports for one test.
pub struct CaptureDir {
    dir: TempDir,
}

impl CaptureDir {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    /// One channel per file: `seq,time` rows with clock timestamps.
    pub fn clock_capture(&self, name: &str, times: &[&str]) -> PathBuf {
        let mut body = String::from("seq,time\n");
        for (i, t) in times.iter().enumerate() {
            body.push_str(&format!("{i},{t}\n"));
        }
        self.write(name, &body)
    }

    /// Both channels in one file: `seq,time,code` rows.
    pub fn coded_capture(&self, name: &str, rows: &[(&str, i64)]) -> PathBuf {
        let mut body = String::from("seq,time,code\n");
        for (i, (t, code)) in rows.iter().enumerate() {
            body.push_str(&format!("{i},{t},{code}\n"));
        }
        self.write(name, &body)
    }

    pub fn files(&self, sub: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.dir.path().join(sub)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for CaptureDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock-format profile on 2021-08-24 UTC with a `(low, high]` window in microseconds.
pub fn clock_profile(
    name: &str,
    before: PathBuf,
    after: Option<PathBuf>,
    low_us: i64,
    high_us: i64,
    tweak: impl FnOnce(&mut ProfileSpec),
) -> RunProfile {
    let mut spec = ProfileSpec {
        reference_date: chrono::NaiveDate::from_ymd_opt(2021, 8, 24),
        ..ProfileSpec::default()
    };
    spec.tolerance.low = Some(low_us);
    spec.tolerance.high = Some(high_us);
    spec.tolerance.unit = TimeUnit::Us;
    tweak(&mut spec);

    let settings = resolve(spec, Path::new(""))
        .expect("fixture profile is valid")
        .settings;

    RunProfile {
        name: name.to_string(),
        before,
        after,
        settings,
    }
}
