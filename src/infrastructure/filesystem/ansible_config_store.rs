use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

const DEFAULTS_SECTION: &str = "defaults";
const ROLES_PATH_KEY: &str = "roles_path";

/// ansible.cfg related errors
#[derive(Debug, Error)]
pub enum AnsibleConfigError {
    #[error("ansible.cfg not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    ParseFailed { path: PathBuf, message: String },
}

/// Reads settings from an INI-style `ansible.cfg`
#[derive(Debug, Clone, Default)]
pub struct AnsibleConfigStore;

impl AnsibleConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// `[defaults] roles_path` of the config file, if set
    pub async fn read_roles_path(
        &self,
        config_path: &Path,
    ) -> Result<Option<String>, AnsibleConfigError> {
        if !config_path.exists() {
            return Err(AnsibleConfigError::ConfigNotFound(config_path.to_path_buf()));
        }

        let content = async_fs::read_to_string(config_path)
            .await
            .map_err(|source| AnsibleConfigError::ReadFailed {
                path: config_path.to_path_buf(),
                source,
            })?;

        self.parse_roles_path(config_path, &content)
    }

    fn parse_roles_path(
        &self,
        config_path: &Path,
        content: &str,
    ) -> Result<Option<String>, AnsibleConfigError> {
        let config = Ini::load_from_str(content).map_err(|e| AnsibleConfigError::ParseFailed {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config
            .section(Some(DEFAULTS_SECTION))
            .and_then(|section| section.get(ROLES_PATH_KEY))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()))
    }
}
