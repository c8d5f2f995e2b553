use std::path::PathBuf;
use thiserror::Error;

use crate::application::services::manifest_service::ManifestServiceError;
use crate::infrastructure::filesystem::ansible_config_store::AnsibleConfigError;
use crate::infrastructure::filesystem::manifest_store::ManifestStoreError;
use crate::infrastructure::git::GitCommandError;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Git operation failed: {0}")]
    GitError(#[from] GitCommandError),

    #[error("Could not find the roles config file: {message}")]
    ManifestNotFound {
        message: String,
        search_root: Option<PathBuf>,
    },

    #[error("Invalid roles config: {message}")]
    ManifestParseError {
        message: String,
        file_path: Option<PathBuf>,
        #[source]
        source: Option<ManifestServiceError>,
    },

    #[error("Could not find the ansible.cfg file at {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration error: {message}{}", source_detail(.source))]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File system operation failed: {message}{}", io_detail(.source))]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Refusing to replace {} with a symlink: it is a directory", .path.display())]
    SymlinkConflict { path: PathBuf },

    #[error("Serialization error: {message}{}", source_detail(.source))]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl WorkspaceError {
    pub fn manifest_not_found(message: impl Into<String>, search_root: Option<PathBuf>) -> Self {
        Self::ManifestNotFound {
            message: message.into(),
            search_root,
        }
    }

    pub fn manifest_parse_error(
        message: impl Into<String>,
        file_path: Option<PathBuf>,
        source: Option<ManifestServiceError>,
    ) -> Self {
        Self::ManifestParseError {
            message: message.into(),
            file_path,
            source,
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn symlink_conflict(path: impl Into<PathBuf>) -> Self {
        Self::SymlinkConflict { path: path.into() }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

fn source_detail(source: &Option<Box<dyn std::error::Error + Send + Sync>>) -> String {
    source
        .as_ref()
        .map(|e| format!(": {}", e))
        .unwrap_or_default()
}

fn io_detail(source: &Option<std::io::Error>) -> String {
    source
        .as_ref()
        .map(|e| format!(": {}", e))
        .unwrap_or_default()
}

impl From<std::io::Error> for WorkspaceError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<serde_yaml::Error> for WorkspaceError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

impl From<serde_json::Error> for WorkspaceError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}

impl From<ManifestStoreError> for WorkspaceError {
    fn from(error: ManifestStoreError) -> Self {
        match error {
            ManifestStoreError::ManifestFileNotFound(root) => Self::manifest_not_found(
                format!(
                    "no requirements.y*ml outside of collections below {}",
                    root.display()
                ),
                Some(root),
            ),
            ManifestStoreError::ReadFailed { path, source } => Self::filesystem_error_with_source(
                format!("Failed to read {}", path.display()),
                Some(path),
                source,
            ),
            ManifestStoreError::ParseFailed { path, source } => Self::manifest_parse_error(
                format!("{}: {}", path.display(), source),
                Some(path),
                Some(source),
            ),
        }
    }
}

impl From<AnsibleConfigError> for WorkspaceError {
    fn from(error: AnsibleConfigError) -> Self {
        match error {
            AnsibleConfigError::ConfigNotFound(path) => Self::config_not_found(path),
            other => Self::config_error_with_source("Failed to read ansible.cfg", other),
        }
    }
}
