use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Operations on a single role working copy bound to one remote source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GitOperations: Send + Sync {
    /// Whether the working copy already has a `.git` entry
    fn is_cloned(&self) -> bool;

    /// Create the directory if needed and clone the source into it
    async fn clone_repository(&self) -> Result<String, GitCommandError>;

    /// Fetch every configured remote
    async fn fetch_all(&self) -> Result<String, GitCommandError>;

    /// Check out a tag, branch or other ref
    async fn checkout(&self, reference: &str) -> Result<String, GitCommandError>;

    /// Create a local branch tracking `origin/<branch>` and check it out
    async fn checkout_remote_branch(&self, branch: &str) -> Result<String, GitCommandError>;

    /// Remote branches in the order git reports them, e.g. `origin/main`
    async fn list_remote_branches(&self) -> Result<Vec<String>, GitCommandError>;

    /// Local branches in the order git reports them
    async fn list_local_branches(&self) -> Result<Vec<String>, GitCommandError>;

    /// Tags in the order git reports them
    async fn list_tags(&self) -> Result<Vec<String>, GitCommandError>;
}

/// Creates [`GitOperations`] handles for role working copies
#[async_trait]
pub trait GitRepoFactory: Send + Sync {
    /// Fail early when git cannot be run at all
    async fn check_availability(&self) -> Result<(), GitCommandError>;

    /// Bind a handle to `path` with `source` as its clone URL
    fn open(&self, source: &str, path: &Path) -> Box<dyn GitOperations>;
}

/// Errors raised while running git
#[derive(Debug, thiserror::Error)]
pub enum GitCommandError {
    #[error("`{command}` exited with code {exit_code}{}", captured_output(.stdout, .stderr))]
    CommandFailed {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("Git executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl GitCommandError {
    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }
}

fn captured_output(stdout: &str, stderr: &str) -> String {
    let mut rendered = String::new();
    for (label, text) in [("stdout", stdout.trim()), ("stderr", stderr.trim())] {
        if !text.is_empty() {
            rendered.push_str(&format!("\n{}: {}", label, text));
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let error = GitCommandError::command_failed(
            "git -C /roles/a checkout nope",
            1,
            "",
            "error: pathspec 'nope' did not match",
        );
        assert_eq!(
            error.to_string(),
            "`git -C /roles/a checkout nope` exited with code 1\nstderr: error: pathspec 'nope' did not match"
        );
    }

    #[test]
    fn test_command_failed_display_with_both_streams() {
        let error = GitCommandError::command_failed("git fetch --all", 128, "Fetching origin\n", "fatal: boom\n");
        let message = error.to_string();
        assert!(message.contains("stdout: Fetching origin"));
        assert!(message.contains("stderr: fatal: boom"));
    }
}
