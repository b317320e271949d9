//! # Filesystem-backed preference store
//!
//! [`FileStore`] keeps preferences in a TOML file so the desktop app remembers
//! the theme across restarts.
//!
//! ## Platform config directories
//!
//! [`FileStore::in_config_dir`] uses [`dirs::config_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ghosttrack/preferences.toml` |
//! | Linux | `~/.config/ghosttrack/preferences.toml` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ghosttrack\preferences.toml` |

use std::path::{Path, PathBuf};

use crate::preferences::{PreferenceStore, Preferences};
use crate::StoreError;

const APP_DIR: &str = "ghosttrack";

/// Filesystem-backed PreferenceStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store under the platform config directory, if the platform has one.
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR)))
    }

    pub fn path(&self) -> PathBuf {
        self.base.join(Preferences::filename())
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Preferences, StoreError> {
        let path = self.path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(e) => return Err(Self::io_error(&path, e)),
        };
        Ok(Preferences::from_toml(&content)?)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let path = self.path();
        std::fs::create_dir_all(&self.base).map_err(|e| Self::io_error(&self.base, e))?;
        let content = preferences.to_toml()?;
        std::fs::write(&path, content).map_err(|e| Self::io_error(&path, e))?;
        tracing::debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}
