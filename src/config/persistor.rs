//! Session persistence backends.

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::error::{CumulusError, Result};

use super::Configuration;

/// Environment variable that relocates the session directory.
pub const HOME_ENV: &str = "CUMULUS_HOME";

/// Loads and flushes the session record.
pub trait Persistor {
    /// Load the stored record, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<Configuration>>;

    /// Replace the stored record.
    fn save(&self, config: &Configuration) -> Result<()>;
}

/// Default session file: `$CUMULUS_HOME/.cumulus/config.yml`, falling back
/// to the user's home directory.
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .or_else(dirs::home_dir);
    config_path_in(home)
}

fn config_path_in(home: Option<PathBuf>) -> Result<PathBuf> {
    let base = home.ok_or(CumulusError::NoHomeDirectory)?;
    Ok(base.join(".cumulus").join("config.yml"))
}

/// YAML file on disk.
#[derive(Debug, Clone)]
pub struct FilePersistor {
    path: PathBuf,
}

impl FilePersistor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistor for FilePersistor {
    fn load(&self) -> Result<Option<Configuration>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: Configuration =
            serde_yaml::from_str(&content).map_err(|e| CumulusError::ConfigParse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(Some(config))
    }

    /// Write-to-temp-then-rename so a crash never leaves a half-written file.
    fn save(&self, config: &Configuration) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_yaml::to_string(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session: {}", e))?;

        let temp_path = self.path.with_extension("yml.tmp");
        write_private(&temp_path, content.as_bytes())?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "session flushed");
        Ok(())
    }
}

/// Write a file only the owner can read; it holds access tokens.
fn write_private(path: &Path, content: &[u8]) -> Result<()> {
    // A stale temp file would keep its old mode.
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.sync_all()?;
    Ok(())
}

/// Keeps the record in memory. Used by tests and dry setups.
#[derive(Debug, Default)]
pub struct MemoryPersistor {
    stored: RefCell<Option<Configuration>>,
}

impl MemoryPersistor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Configuration) -> Self {
        Self {
            stored: RefCell::new(Some(config)),
        }
    }
}

impl Persistor for MemoryPersistor {
    fn load(&self) -> Result<Option<Configuration>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, config: &Configuration) -> Result<()> {
        *self.stored.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
