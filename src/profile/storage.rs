//! Profile persistence (avatar preference only)

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::AvatarPreference;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Stores the avatar preference as `profile.json` under the data directory.
/// This is the local-storage analog of the original app; nothing else is
/// persisted.
pub struct ProfileStorage {
    base_path: PathBuf,
}

impl ProfileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("innerbloom"))
            .ok_or(StorageError::DataDirNotFound)
    }

    fn profile_path(&self) -> PathBuf {
        self.base_path.join("profile.json")
    }

    /// Load the saved preference, or the default when none was saved yet
    pub fn load(&self) -> Result<AvatarPreference> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(AvatarPreference::default());
        }
        let content = fs::read_to_string(path)?;
        let pref: AvatarPreference = serde_json::from_str(&content)?;
        Ok(pref)
    }

    /// Save using atomic write (write to .tmp then rename)
    pub fn save(&self, pref: &AvatarPreference) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let path = self.profile_path();
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(pref)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        log::info!("Saved avatar preference {}", pref.selected);
        Ok(())
    }
}
