//! Common test utilities and helpers
//!
//! Fixtures here create real git repositories with the `git` binary so that
//! role syncing can be exercised end to end without network access.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git with a fixed identity and without signing
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=ansible-workspace tests",
            "-c",
            "user.email=tests@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Read the output of a git command
pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A bare-bones origin repository for a role
pub struct OriginRepo {
    pub path: PathBuf,
}

impl OriginRepo {
    /// Create a repository on `main` with one commit
    pub fn create(root: &Path, name: &str) -> Self {
        let path = root.join("origins").join(name);
        std::fs::create_dir_all(path.join("tasks")).unwrap();
        git(&path, &["init", "-q"]);
        git(&path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        std::fs::write(path.join("tasks/main.yml"), "---\n- debug: msg=main\n").unwrap();
        git(&path, &["add", "."]);
        git(&path, &["commit", "-q", "-m", "initial"]);
        Self { path }
    }

    /// Commit a change and tag it
    pub fn tag(&self, tag: &str) -> &Self {
        self.commit(&format!("tagged {}", tag));
        git(&self.path, &["tag", tag]);
        self
    }

    /// Create a branch with its own commit and return to `main`
    pub fn branch(&self, branch: &str) -> &Self {
        git(&self.path, &["checkout", "-q", "-b", branch]);
        self.commit(&format!("on {}", branch));
        git(&self.path, &["checkout", "-q", "main"]);
        self
    }

    pub fn commit(&self, message: &str) -> &Self {
        std::fs::write(self.path.join("tasks/main.yml"), format!("---\n# {}\n", message)).unwrap();
        git(&self.path, &["commit", "-q", "-am", message]);
        self
    }

    pub fn head_of(&self, reference: &str) -> String {
        git_output(&self.path, &["rev-parse", reference])
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }
}

/// A project directory named `infra` with its own home directory
pub struct ProjectFixture {
    pub root: TempDir,
    pub project: PathBuf,
    pub home: PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let project = root.path().join("infra");
        let home = root.path().join("home");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::create_dir_all(&home).unwrap();
        Self {
            root,
            project,
            home,
        }
    }

    /// Make the project a git repository root
    pub fn init_git(&self) -> &Self {
        git(&self.project, &["init", "-q"]);
        self
    }

    pub fn origin(&self, name: &str) -> OriginRepo {
        OriginRepo::create(self.root.path(), name)
    }

    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.project.join("requirements.yml");
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn workspaces(&self) -> PathBuf {
        self.home.join("workspaces")
    }
}

/// Manifest entry for a git role
pub fn role_entry(name: &str, src: &str, version: Option<&str>) -> String {
    let mut entry = format!("  - name: {}\n    src: {}\n    scm: git\n", name, src);
    if let Some(version) = version {
        entry.push_str(&format!("    version: \"{}\"\n", version));
    }
    entry
}
