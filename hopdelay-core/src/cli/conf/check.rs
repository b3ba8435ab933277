use crate::conf::{ConfigError, ResolvedConfig, load_config};
use crate::event::{Channel, ChannelSource};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            print_summary(&cfg);
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_summary(cfg: &ResolvedConfig) {
    let settings = &cfg.settings;
    let window = settings.window;

    println!("✔ Config loaded successfully");
    println!("✔ {} runs", cfg.runs.len());
    match &settings.layout.channels {
        ChannelSource::Positional => println!("✔ channels: positional"),
        ChannelSource::Field { index, mapping } => println!(
            "✔ channels: field {index} (before: {:?}, after: {:?})",
            mapping.codes_for(Channel::Before),
            mapping.codes_for(Channel::After)
        ),
    }
    println!(
        "✔ tolerance: ({}ns, {}ns], drop {}",
        window.too_small_low(),
        window.too_large_high(),
        window.ahead()
    );
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
        if let ConfigError::Validation { validation_errors } = &err {
            for e in validation_errors {
                eprintln!("  - {e}");
            }
        }
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Validation { validation_errors } => {
            validation_errors.iter().find_map(config_error_hint)
        }

        ConfigError::MissingReferenceDate => Some(
            "Clock timestamps carry no date. Anchor them to a calendar day, or switch to epoch \
             timestamps.\n\
             \n\
             Example:\n\
             \n\
             reference_date = \"2021-08-24\"",
        ),

        ConfigError::InvertedThresholds { .. } => Some(
            "A delay is accepted when low < delay <= high, so low must be strictly below high.\n\
             \n\
             Example:\n\
             \n\
             tolerance = { low = 80, high = 8354, unit = \"us\" }",
        ),

        ConfigError::AmbiguousChannelCode { .. } | ConfigError::EmptyChannel { .. } => Some(
            "Each channel needs at least one code and no code may appear on both sides.\n\
             \n\
             Example:\n\
             \n\
             channels = { field = 7, before = [34], after = [33] }",
        ),

        ConfigError::MissingAfterInput { .. } => Some(
            "Without a channels section the first file is 'before' and the second is 'after'.\n\
             Either add an after file to the run or map channel codes.",
        ),

        ConfigError::MissingMaxGap => Some(
            "The after_gap check compares consecutive after timestamps against max_gap.\n\
             \n\
             Example:\n\
             \n\
             tolerance = { secondary = \"after_gap\", max_gap = 300, unit = \"us\" }",
        ),

        ConfigError::Parse { .. } => Some(
            "Sections are HCL attributes holding objects, e.g. `record = { time_field = 6 }`.\n\
             Run `hopdelay config init` for an annotated template.",
        ),

        _ => None,
    }
}
