use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::application::services::manifest_service::{ManifestService, ManifestServiceError};
use crate::domain::entities::role::AnsibleRole;

const MANIFEST_PREFIX: &str = "requirements.y";
const MANIFEST_SUFFIX: &str = "ml";
const EXCLUDED_PATH_PART: &str = "collections";

/// Manifest store related errors
#[derive(Debug, Error)]
pub enum ManifestStoreError {
    #[error("No roles requirements file found below {}", .0.display())]
    ManifestFileNotFound(PathBuf),

    #[error("Manifest file read failed: {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Manifest parsing failed for {}: {source}", .path.display())]
    ParseFailed {
        path: PathBuf,
        source: ManifestServiceError,
    },
}

/// A roles manifest located on disk together with its git roles
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// File the roles were read from
    pub path: PathBuf,

    /// Git roles in manifest order
    pub roles: Vec<AnsibleRole>,
}

/// Locates and reads roles requirements files
#[derive(Debug, Clone, Default)]
pub struct ManifestStore {
    manifest_service: ManifestService,
}

impl ManifestStore {
    /// Create a new manifest store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file name matches `requirements.y*ml`
    pub fn is_manifest_file_name(file_name: &str) -> bool {
        file_name.len() >= MANIFEST_PREFIX.len() + MANIFEST_SUFFIX.len()
            && file_name.starts_with(MANIFEST_PREFIX)
            && file_name.ends_with(MANIFEST_SUFFIX)
    }

    /// Find the requirements file below `search_root`
    ///
    /// Paths containing `collections` are ignored. The shallowest match wins,
    /// ties are broken by path so the result does not depend on directory
    /// iteration order.
    pub fn find_manifest(&self, search_root: &Path) -> Result<PathBuf, ManifestStoreError> {
        let walker = WalkDir::new(search_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");

        let mut best: Option<(usize, PathBuf)> = None;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable path while searching for requirements: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || !Self::is_manifest_file_name(&entry.file_name().to_string_lossy())
            {
                continue;
            }

            let relative = entry.path().strip_prefix(search_root).unwrap_or(entry.path());
            if relative.to_string_lossy().contains(EXCLUDED_PATH_PART) {
                debug!(path = %entry.path().display(), "ignoring collections requirements");
                continue;
            }

            let candidate = (entry.depth(), entry.path().to_path_buf());
            if best.as_ref().map_or(true, |current| candidate < *current) {
                best = Some(candidate);
            }
        }

        best.map(|(_, path)| path)
            .ok_or_else(|| ManifestStoreError::ManifestFileNotFound(search_root.to_path_buf()))
    }

    /// Read and parse the git roles of a requirements file
    pub async fn read_roles(&self, path: &Path) -> Result<Vec<AnsibleRole>, ManifestStoreError> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|source| ManifestStoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        self.manifest_service
            .parse_roles(&content)
            .map_err(|source| ManifestStoreError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Read the explicit manifest, or search for one below `search_root`
    pub async fn load(
        &self,
        explicit_path: Option<&Path>,
        search_root: &Path,
    ) -> Result<LoadedManifest, ManifestStoreError> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => self.find_manifest(search_root)?,
        };
        debug!(path = %path.display(), "loading roles manifest");

        let roles = self.read_roles(&path).await?;
        Ok(LoadedManifest { path, roles })
    }
}
