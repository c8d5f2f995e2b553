//! Append-only edits of a project's `.gitignore`.

use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::common::result::{ResultExt, WorkspaceResult};

/// An entry to ignore, guarded by a marker that suppresses it when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreEntry {
    /// Substring that, when already in the file, means the entry is covered
    pub marker: String,

    /// Line written to the file, without trailing newline
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct GitignoreStore {
    path: PathBuf,
}

impl GitignoreStore {
    /// `.gitignore` at the root of `project_dir`
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(".gitignore"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every entry whose marker is not yet in the file
    ///
    /// The check is a plain substring search over the whole file, re-evaluated
    /// after each append. Returns the lines that were written.
    pub async fn append_missing(&self, entries: &[IgnoreEntry]) -> WorkspaceResult<Vec<String>> {
        let mut contents = match async_fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e)
                    .with_filesystem_error("Failed to read .gitignore", Some(self.path.clone()));
            }
        };

        let mut pending = String::new();
        let mut appended = Vec::new();
        for entry in entries {
            if contents.contains(&entry.marker) {
                continue;
            }
            if !contents.is_empty() && !contents.ends_with('\n') {
                contents.push('\n');
                pending.push('\n');
            }
            let line = format!("{}\n", entry.line);
            contents.push_str(&line);
            pending.push_str(&line);
            debug!(entry = %entry.line, "adding to .gitignore");
            appended.push(entry.line.clone());
        }

        let mut file = async_fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_filesystem_error("Failed to open .gitignore", Some(self.path.clone()))?;
        if !pending.is_empty() {
            file.write_all(pending.as_bytes())
                .await
                .with_filesystem_error("Failed to write .gitignore", Some(self.path.clone()))?;
            file.flush()
                .await
                .with_filesystem_error("Failed to write .gitignore", Some(self.path.clone()))?;
        }

        Ok(appended)
    }
}
