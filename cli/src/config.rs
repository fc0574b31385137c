use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use kibble_core::data::ReferenceData;

/// Where the reference tables come from: an explicit `--data-dir`, the
/// per-user data directory when it holds table files, or the tables
/// embedded in the binary.
pub struct Config {
    pub data_dir: PathBuf,
    explicit: bool,
}

impl Config {
    pub fn load(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Config {
                data_dir: dir,
                explicit: true,
            });
        }

        let proj_dirs =
            ProjectDirs::from("", "", "kibble").context("Could not determine home directory")?;

        Ok(Config {
            data_dir: proj_dirs.data_dir().to_path_buf(),
            explicit: false,
        })
    }

    /// Load and validate the reference tables.
    ///
    /// An explicit directory must hold all three table files. The per-user
    /// directory is only consulted when populated, so a fresh install runs
    /// against the embedded tables without any setup.
    pub fn reference_data(&self) -> Result<ReferenceData> {
        if self.explicit || ReferenceData::dir_is_populated(&self.data_dir) {
            ReferenceData::from_dir(&self.data_dir)
        } else {
            ReferenceData::builtin()
        }
    }
}
