//! Hostel configuration.
//!
//! Read from `<home>/.hostel/config.yaml` when present:
//!
//! ```yaml
//! rooms: 50
//! data_file: hostel_data.txt
//! ```
//!
//! Every key is optional; an absent file means all defaults. As in the
//! registry module, `_at` variants take an explicit home for tests and the
//! plain variants resolve it with `dirs::home_dir()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, HostelError};

pub const DEFAULT_ROOMS: u32 = 50;
pub const DEFAULT_DATA_FILE: &str = "hostel_data.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostelConfig {
    /// Size of the room inventory, fixed for the life of the process.
    pub rooms: u32,
    /// Roster file; relative paths resolve against the working directory.
    pub data_file: PathBuf,
}

impl Default for HostelConfig {
    fn default() -> Self {
        Self {
            rooms: DEFAULT_ROOMS,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl HostelConfig {
    /// Reject values that cannot describe a hostel.
    pub fn validate(&self) -> Result<(), HostelError> {
        if self.rooms == 0 {
            return Err(HostelError::InvalidConfig(
                "rooms must be at least 1".to_string(),
            ));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(HostelError::InvalidConfig(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// `<home>/.hostel/config.yaml`: pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".hostel").join("config.yaml")
}

/// Load and validate the config file at `path`; defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<HostelConfig, HostelError> {
    let config = match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => HostelConfig::default(),
        Ok(contents) => serde_yaml::from_str(&contents).map_err(|e| HostelError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => HostelConfig::default(),
        Err(e) => return Err(io_err(path, e)),
    };
    config.validate()?;
    Ok(config)
}

/// Load `<home>/.hostel/config.yaml`.
pub fn load_at(home: &Path) -> Result<HostelConfig, HostelError> {
    load_from(&config_path_at(home))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<HostelConfig, HostelError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, HostelError> {
    dirs::home_dir().ok_or(HostelError::HomeNotFound)
}
