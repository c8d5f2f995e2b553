pub mod git_interface;
pub mod git_repo;

// Re-export main types for convenience
pub use git_interface::{GitCommandError, GitOperations, GitRepoFactory};
pub use git_repo::{CliGitFactory, GitRepo};
