use super::git_interface::{GitCommandError, GitOperations, GitRepoFactory};
use crate::domain::value_objects::scm_type::ScmType;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Git working copy driven through the `git` executable
#[derive(Debug, Clone)]
pub struct GitRepo {
    source: String,
    path: PathBuf,
    git_executable: String,
}

impl GitRepo {
    /// Bind a working copy at `path` to the `source` remote
    pub fn new(source: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            path: path.into(),
            git_executable: ScmType::Git.executable_name().to_string(),
        }
    }

    /// Use a custom git executable
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.git_executable = executable.into();
        self
    }

    /// Run `git -C <path> <args>` and return stdout
    async fn run(&self, args: &[&str]) -> Result<String, GitCommandError> {
        run_git(&self.git_executable, Some(&self.path), args).await
    }
}

/// Execute git and check for success
///
/// The working directory is handed to git as an `OsStr`; only the command
/// text used for logs and errors is lossy.
async fn run_git(
    executable: &str,
    working_dir: Option<&Path>,
    args: &[&str],
) -> Result<String, GitCommandError> {
    let command = match working_dir {
        Some(dir) => format!("{} -C {} {}", executable, dir.display(), args.join(" ")),
        None => format!("{} {}", executable, args.join(" ")),
    };
    debug!(command = %command, "running git");

    let mut cmd = Command::new(executable);
    if let Some(dir) = working_dir {
        cmd.arg("-C").arg(dir);
    }
    let output = cmd
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GitCommandError::executable_not_found(executable),
            _ => GitCommandError::from(e),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if !output.status.success() {
        return Err(GitCommandError::command_failed(
            command,
            output.status.code().unwrap_or(-1),
            stdout,
            String::from_utf8_lossy(&output.stderr),
        ));
    }

    Ok(stdout)
}

/// Split a `git branch` / `git tag` listing into names, keeping git's order
pub fn parse_ref_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl GitOperations for GitRepo {
    fn is_cloned(&self) -> bool {
        self.path.join(ScmType::Git.metadata_dir()).exists()
    }

    async fn clone_repository(&self) -> Result<String, GitCommandError> {
        tokio::fs::create_dir_all(&self.path).await?;
        debug!(source = %self.source, path = %self.path.display(), "cloning");
        self.run(&["clone", &self.source, "."]).await
    }

    async fn fetch_all(&self) -> Result<String, GitCommandError> {
        self.run(&["fetch", "--all"]).await
    }

    async fn checkout(&self, reference: &str) -> Result<String, GitCommandError> {
        self.run(&["checkout", reference]).await
    }

    async fn checkout_remote_branch(&self, branch: &str) -> Result<String, GitCommandError> {
        let upstream = format!("origin/{}", branch);
        self.run(&["checkout", "-b", branch, &upstream]).await
    }

    async fn list_remote_branches(&self) -> Result<Vec<String>, GitCommandError> {
        Ok(parse_ref_listing(&self.run(&["branch", "-r"]).await?))
    }

    async fn list_local_branches(&self) -> Result<Vec<String>, GitCommandError> {
        Ok(parse_ref_listing(&self.run(&["branch"]).await?))
    }

    async fn list_tags(&self) -> Result<Vec<String>, GitCommandError> {
        Ok(parse_ref_listing(&self.run(&["tag"]).await?))
    }
}

/// Factory producing [`GitRepo`] handles that shell out to git
#[derive(Debug, Clone)]
pub struct CliGitFactory {
    git_executable: String,
}

impl Default for CliGitFactory {
    fn default() -> Self {
        Self {
            git_executable: ScmType::Git.executable_name().to_string(),
        }
    }
}

impl CliGitFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GitRepoFactory for CliGitFactory {
    async fn check_availability(&self) -> Result<(), GitCommandError> {
        run_git(&self.git_executable, None, &["--version"]).await.map(|_| ())
    }

    fn open(&self, source: &str, path: &Path) -> Box<dyn GitOperations> {
        Box::new(GitRepo::new(source, path).with_executable(self.git_executable.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_local_branch_listing() {
        let output = "  develop\n* main\n  feature/x\n";
        assert_eq!(parse_ref_listing(output), vec!["develop", "main", "feature/x"]);
    }

    #[test]
    fn test_parse_remote_branch_listing_keeps_order() {
        let output = "  origin/HEAD -> origin/main\n  origin/main\n  origin/2.x\n";
        assert_eq!(
            parse_ref_listing(output),
            vec!["origin/HEAD -> origin/main", "origin/main", "origin/2.x"]
        );
    }

    #[test]
    fn test_parse_empty_listing() {
        assert!(parse_ref_listing("").is_empty());
        assert!(parse_ref_listing("\n\n").is_empty());
    }

    #[test]
    fn test_is_cloned() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GitRepo::new("https://example.com/common.git", temp_dir.path().join("common"));
        assert!(!repo.is_cloned());

        std::fs::create_dir_all(temp_dir.path().join("common").join(".git")).unwrap();
        assert!(repo.is_cloned());
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GitRepo::new("https://example.com/common.git", temp_dir.path())
            .with_executable("definitely-not-a-git-binary");

        let result = repo.fetch_all().await;
        assert!(matches!(
            result,
            Err(GitCommandError::ExecutableNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_factory_reports_git_available() {
        let factory = CliGitFactory::new();
        assert!(factory.check_availability().await.is_ok());

        let repo = factory.open("https://example.com/common.git", Path::new("/nonexistent/common"));
        assert!(!repo.is_cloned());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_typed_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GitRepo::new("https://example.com/common.git", temp_dir.path());

        // not a repository, so listing tags fails
        match repo.list_tags().await {
            Err(GitCommandError::CommandFailed {
                command,
                exit_code,
                stderr,
                ..
            }) => {
                assert!(command.ends_with("tag"));
                assert_ne!(exit_code, 0);
                assert!(!stderr.is_empty());
            }
            Err(GitCommandError::ExecutableNotFound { .. }) => {}
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_working_copy_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let role_dir = temp_dir.path().join(OsStr::from_bytes(b"role-\xff"));
        if std::fs::create_dir_all(&role_dir).is_err() {
            // filesystem rejects non-UTF-8 names
            return;
        }
        let repo = GitRepo::new("https://example.com/common.git", &role_dir);

        repo.run(&["init", "-q"]).await.unwrap();
        assert!(repo.is_cloned());
        assert!(repo.list_tags().await.unwrap().is_empty());
    }
}
