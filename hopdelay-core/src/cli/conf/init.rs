use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub const PROFILE_FILE: &str = "hopdelay.hcl";

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing non-empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(&path)?.next().is_none();
        if !is_empty {
            bail!(
                "profile directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(&path)?;
    write_file(&path.join(PROFILE_FILE), &template(PROFILE_FILE)?)?;

    println!("✔ Initialized hopdelay profile in {}", path.display());
    println!("✔ Created:");
    println!("  - {PROFILE_FILE}");
    println!();
    println!("Next steps:");
    println!("  hopdelay config check {}", path.join(PROFILE_FILE).display());
    println!("  hopdelay batch --config {}", path.join(PROFILE_FILE).display());

    Ok(())
}

/// Fetch an embedded template as UTF-8 text
pub fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}
