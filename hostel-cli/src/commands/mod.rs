//! Subcommand handlers and the state they share: config resolution and
//! roster load/save.

pub mod book;
pub mod menu;
pub mod rooms;
pub mod search;
pub mod students;
pub mod vacate;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use hostel_core::{config, Hostel, HostelConfig, LoadReport};

/// Options accepted by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file to read instead of ~/.hostel/config.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of rooms in the hostel (overrides the config file). Roster lines
    /// for rooms above this count are not loaded; `book` and `vacate` then
    /// refuse to rewrite the file, while the menu drops them on save.
    #[arg(long, global = true, value_name = "N")]
    pub rooms: Option<u32>,

    /// Roster file to load and save (overrides the config file).
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// Config file values with command-line overrides applied.
    pub fn resolve(&self) -> Result<HostelConfig> {
        let mut resolved = match &self.config {
            Some(path) => config::load_from(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => config::load().context("failed to load ~/.hostel/config.yaml")?,
        };
        if let Some(rooms) = self.rooms {
            resolved.rooms = rooms;
        }
        if let Some(data_file) = &self.data_file {
            resolved.data_file = data_file.clone();
        }
        resolved.validate()?;
        Ok(resolved)
    }
}

/// A fresh hostel with the configured roster loaded into it.
pub fn open(config: &HostelConfig) -> Result<(Hostel, LoadReport)> {
    let mut hostel = Hostel::from_config(config);
    let report = hostel
        .load_from(&config.data_file)
        .with_context(|| format!("failed to load roster '{}'", config.data_file.display()))?;
    Ok((hostel, report))
}

/// Refuse a rewrite that would silently drop roster lines the load skipped.
pub fn ensure_nothing_skipped(report: LoadReport, config: &HostelConfig) -> Result<()> {
    if let LoadReport::Loaded { skipped, .. } = report {
        if skipped > 0 {
            bail!(
                "{skipped} line(s) in '{}' could not be loaded; refusing to rewrite it \
                 (check --rooms or fix the file)",
                config.data_file.display()
            );
        }
    }
    Ok(())
}

pub fn save(hostel: &Hostel, config: &HostelConfig) -> Result<()> {
    hostel
        .save_to(&config.data_file)
        .with_context(|| format!("failed to save roster '{}'", config.data_file.display()))?;
    Ok(())
}
