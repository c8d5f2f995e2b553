pub mod ansible_config_store;
pub mod gitignore_store;
pub mod manifest_store;
pub mod role_symlink;
pub mod workspace_store;

pub use ansible_config_store::{AnsibleConfigError, AnsibleConfigStore};
pub use gitignore_store::{GitignoreStore, IgnoreEntry};
pub use manifest_store::{LoadedManifest, ManifestStore, ManifestStoreError};
pub use role_symlink::replace_with_symlink;
pub use workspace_store::WorkspaceStore;
