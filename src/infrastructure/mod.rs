/// Infrastructure layer modules
///
/// Concrete implementations for external system interactions:
/// - Git operations through the `git` executable
/// - File system operations (manifests, ansible.cfg, .gitignore, symlinks, workspace files)
pub mod filesystem;
pub mod git;

pub use filesystem::{AnsibleConfigStore, GitignoreStore, ManifestStore, WorkspaceStore};
pub use git::{CliGitFactory, GitOperations, GitRepo, GitRepoFactory};
