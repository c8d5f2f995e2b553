use crate::common::error::WorkspaceError;
use crate::common::paths::normalize_lexically;
use crate::common::result::{OptionExt, WorkspaceResult};
use crate::infrastructure::filesystem::ansible_config_store::AnsibleConfigStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// プロジェクト直下のロールディレクトリ名
const PROJECT_ROLES_DIR: &str = "roles";

/// ロールの解決要求
#[derive(Debug, Clone)]
pub struct RolesPathRequest<'a> {
    /// `--roles-path`または`ANSIBLE_ROLES_PATH`で指定されたパス
    pub explicit: Option<&'a Path>,

    /// ansible.cfgのパス
    pub ansible_config: &'a Path,

    /// ansible.cfgがユーザーにより明示的に指定されたか
    pub ansible_config_required: bool,

    /// プロジェクトディレクトリ
    pub project_dir: &'a Path,
}

/// ロールのクローン先ディレクトリを決定するサービス
///
/// 優先順位:
/// 1. 明示的な指定
/// 2. `<project>/roles`が存在すればそれ
/// 3. ansible.cfgの`[defaults] roles_path`
/// 4. `~/.ansible/roles`
#[derive(Debug, Clone)]
pub struct RolesPathResolver {
    config_store: AnsibleConfigStore,
    home_dir: Option<PathBuf>,
}

impl Default for RolesPathResolver {
    fn default() -> Self {
        Self {
            config_store: AnsibleConfigStore::new(),
            home_dir: dirs::home_dir(),
        }
    }
}

impl RolesPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// ホームディレクトリを差し替える
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// ロールディレクトリを絶対パスで解決
    pub async fn resolve(&self, request: &RolesPathRequest<'_>) -> WorkspaceResult<PathBuf> {
        // 1. 明示的な指定（ANSIBLE_ROLES_PATHと同じく`:`区切りを許す）
        if let Some(explicit) = request.explicit {
            let explicit = explicit
                .to_str()
                .and_then(first_search_path_entry)
                .map(Path::new)
                .unwrap_or(explicit);
            let path = self.absolutize(explicit, request.project_dir);
            debug!(path = %path.display(), "using explicit roles path");
            return Ok(path);
        }

        // 2. プロジェクト直下のrolesディレクトリ
        let project_roles = request.project_dir.join(PROJECT_ROLES_DIR);
        if project_roles.is_dir() {
            debug!(path = %project_roles.display(), "using project roles directory");
            return Ok(project_roles);
        }

        // 3. ansible.cfg
        if request.ansible_config.exists() {
            let configured = self
                .config_store
                .read_roles_path(request.ansible_config)
                .await?;
            if let Some(path) = configured.as_deref().and_then(first_search_path_entry) {
                let path = self.absolutize(Path::new(path), request.project_dir);
                debug!(path = %path.display(), "using roles_path from ansible.cfg");
                return Ok(path);
            }
        } else if request.ansible_config_required {
            return Err(WorkspaceError::config_not_found(request.ansible_config));
        }

        // 4. ユーザーのデフォルト
        let home_dir = self
            .home_dir
            .as_ref()
            .ok_or_config_error("Could not determine the home directory for ~/.ansible/roles")?;
        let path = home_dir.join(".ansible").join("roles");
        debug!(path = %path.display(), "using default roles path");
        Ok(path)
    }

    /// `~`を展開し、相対パスをプロジェクトディレクトリ基準にして正規化する
    fn absolutize(&self, path: &Path, project_dir: &Path) -> PathBuf {
        let expanded = match (path.strip_prefix("~"), &self.home_dir) {
            (Ok(rest), Some(home_dir)) => home_dir.join(rest),
            _ => path.to_path_buf(),
        };
        normalize_lexically(&project_dir.join(expanded))
    }
}

/// `a:b:c`形式の検索パスから最初の要素を取り出す
fn first_search_path_entry(value: &str) -> Option<&str> {
    value
        .split(':')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        project: TempDir,
        home: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                project: TempDir::new().unwrap(),
                home: TempDir::new().unwrap(),
            }
        }

        fn resolver(&self) -> RolesPathResolver {
            RolesPathResolver::new().with_home_dir(self.home.path())
        }

        fn config_path(&self) -> PathBuf {
            self.project.path().join("ansible.cfg")
        }

        fn request<'a>(
            &'a self,
            config: &'a Path,
            explicit: Option<&'a Path>,
        ) -> RolesPathRequest<'a> {
            RolesPathRequest {
                explicit,
                ansible_config: config,
                ansible_config_required: false,
                project_dir: self.project.path(),
            }
        }
    }

    #[tokio::test]
    async fn test_explicit_path_wins() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.project.path().join("roles")).unwrap();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, Some(Path::new("vendor/roles"))))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.project.path().join("vendor/roles"));
    }

    #[tokio::test]
    async fn test_explicit_parent_dir_is_folded() {
        let fixture = Fixture::new();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, Some(Path::new("../shared-roles"))))
            .await
            .unwrap();

        let parent = fixture.project.path().parent().unwrap();
        assert_eq!(resolved, parent.join("shared-roles"));
    }

    #[tokio::test]
    async fn test_explicit_search_path_uses_first_entry() {
        let fixture = Fixture::new();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, Some(Path::new("/opt/roles:/usr/share/roles"))))
            .await
            .unwrap();

        assert_eq!(resolved, PathBuf::from("/opt/roles"));
    }

    #[tokio::test]
    async fn test_project_roles_directory() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.project.path().join("roles")).unwrap();
        std::fs::write(fixture.config_path(), "[defaults]\nroles_path = /elsewhere\n").unwrap();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, None))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.project.path().join("roles"));
    }

    #[tokio::test]
    async fn test_ansible_cfg_first_entry() {
        let fixture = Fixture::new();
        std::fs::write(
            fixture.config_path(),
            "[defaults]\nroles_path = ~/galaxy:/etc/ansible/roles\n",
        )
        .unwrap();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, None))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.home.path().join("galaxy"));
    }

    #[tokio::test]
    async fn test_ansible_cfg_relative_entry() {
        let fixture = Fixture::new();
        std::fs::write(fixture.config_path(), "[defaults]\nroles_path = galaxy_roles\n").unwrap();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, None))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.project.path().join("galaxy_roles"));
    }

    #[tokio::test]
    async fn test_home_fallback() {
        let fixture = Fixture::new();
        std::fs::write(fixture.config_path(), "[defaults]\ninventory = hosts\n").unwrap();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, None))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.home.path().join(".ansible/roles"));
    }

    #[tokio::test]
    async fn test_missing_required_config() {
        let fixture = Fixture::new();
        let config = fixture.config_path();
        let mut request = fixture.request(&config, None);
        request.ansible_config_required = true;

        let result = fixture.resolver().resolve(&request).await;

        assert!(matches!(result, Err(WorkspaceError::ConfigNotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_default_config_falls_through() {
        let fixture = Fixture::new();
        let config = fixture.config_path();

        let resolved = fixture
            .resolver()
            .resolve(&fixture.request(&config, None))
            .await
            .unwrap();

        assert_eq!(resolved, fixture.home.path().join(".ansible/roles"));
    }

    #[test]
    fn test_first_search_path_entry() {
        assert_eq!(first_search_path_entry("a:b"), Some("a"));
        assert_eq!(first_search_path_entry(" :b"), Some("b"));
        assert_eq!(first_search_path_entry(":"), None);
    }
}
