use crate::common::paths::stays_within;
use crate::common::result::WorkspaceResult;
use crate::domain::entities::role::AnsibleRole;
use crate::infrastructure::filesystem::gitignore_store::{GitignoreStore, IgnoreEntry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// プロジェクト内にクローンしたロールを.gitignoreに追加するユースケース
///
/// プロジェクトがgitリポジトリのルートで、かつ対象ディレクトリが
/// プロジェクト配下にある場合のみ動作する。
pub struct UpdateGitignoreUseCase {
    project_dir: PathBuf,
    store: GitignoreStore,
}

impl UpdateGitignoreUseCase {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let store = GitignoreStore::for_project(&project_dir);
        Self { project_dir, store }
    }

    /// `base_dir`配下のロールを無視対象にすべきか
    ///
    /// `<project>/../x`のようにプロジェクトの外へ出るパスは対象外。
    pub fn applies_to(&self, base_dir: &Path) -> bool {
        let beneath = base_dir.starts_with(&self.project_dir)
            && pathdiff::diff_paths(base_dir, &self.project_dir)
                .is_some_and(|relative| stays_within(&relative));
        beneath && self.project_dir.join(".git").exists()
    }

    /// `base_dir/<role>`を.gitignoreに追記し、追記した行を返す
    pub async fn execute(
        &self,
        roles: &[AnsibleRole],
        base_dir: &Path,
    ) -> WorkspaceResult<Vec<String>> {
        if roles.is_empty() || !self.applies_to(base_dir) {
            debug!(path = %base_dir.display(), "not updating .gitignore");
            return Ok(Vec::new());
        }

        let entries: Vec<IgnoreEntry> = roles
            .iter()
            .map(|role| {
                let role_path = role.path_in(base_dir);
                let relative =
                    pathdiff::diff_paths(&role_path, &self.project_dir).unwrap_or(role_path);
                IgnoreEntry {
                    marker: role.name.clone(),
                    line: format!("{}/", relative.display()),
                }
            })
            .collect();

        self.store.append_missing(&entries).await
    }
}
