use crate::cli::conf::{ConfigCmd, PROFILE_FILE, config_error_hint, init, template};
use crate::conf::{ConfigError, parse_profile_spec, validate_spec};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn embedded_template_is_a_valid_profile() {
    // Arrange
    let source = template(PROFILE_FILE).unwrap();

    // Act
    let spec = parse_profile_spec(&source, Path::new(PROFILE_FILE)).unwrap();

    // Assert
    assert!(validate_spec(&spec).is_ok());
    assert_eq!(spec.runs.len(), 1);
}

#[test]
fn init_writes_template_into_new_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let target = dir.path().join("profiles");

    // Act
    init(target.clone()).unwrap();

    // Assert
    let written = fs::read_to_string(target.join(PROFILE_FILE)).unwrap();
    assert!(written.starts_with("# hopdelay analysis profile"));
}

#[test]
fn init_refuses_non_empty_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "x").unwrap();

    // Act
    let result = init(dir.path().to_path_buf());

    // Assert
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(dir.path().join("keep.txt")).unwrap(), "x");
}

#[test]
fn validation_hint_comes_from_first_hinted_violation() {
    // Arrange
    let err = ConfigError::Validation {
        validation_errors: vec![
            ConfigError::DuplicateRun {
                name: "a".to_string(),
            },
            ConfigError::InvertedThresholds { low: 5, high: 1 },
        ],
    };

    // Act
    let hint = config_error_hint(&err);

    // Assert
    assert!(hint.unwrap().contains("low < delay <= high"));
}

#[test]
fn config_subcommand_parses_defaults() {
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        cmd: ConfigCmd,
    }

    let parsed = Harness::parse_from(["hopdelay", "check"]);
    assert!(matches!(
        parsed.cmd,
        ConfigCmd::Check { ref path, plain: false } if path == Path::new("hopdelay.hcl")
    ));
}
