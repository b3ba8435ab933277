use crate::conf::error::ConfigError;
use crate::conf::lower::{lower_runs, lower_settings};
use crate::conf::types::ProfileSpec;
use crate::conf::validate::validate_spec;
use crate::run::{AnalysisSettings, RunProfile};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A validated profile together with its runtime form.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub spec: ProfileSpec,
    pub settings: AnalysisSettings,
    pub runs: Vec<RunProfile>,
}

pub fn parse_profile_spec(source: &str, path: &Path) -> Result<ProfileSpec, ConfigError> {
    hcl::from_str(source).map_err(|e| ConfigError::parse(path, e))
}

pub fn load_profile_spec(path: &Path) -> Result<ProfileSpec, ConfigError> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_profile_spec(&source, path)
}

/// Validates `spec` and lowers it. Relative paths resolve against `base_dir`.
pub fn resolve(spec: ProfileSpec, base_dir: &Path) -> Result<ResolvedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    validate_spec(&spec)?;

    //--------------------------------------------------------------------------
    // Lower to runtime types
    //--------------------------------------------------------------------------
    let settings = lower_settings(&spec, base_dir)?;
    let runs = lower_runs(&spec, &settings, base_dir);

    debug!(runs = runs.len(), "resolved profile");

    Ok(ResolvedConfig {
        spec,
        settings,
        runs,
    })
}

/// Loads, validates and lowers a profile file. Paths inside it are relative to the file.
pub fn load_config(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    let spec = load_profile_spec(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    resolve(spec, base_dir)
}
