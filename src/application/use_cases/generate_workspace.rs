use crate::application::services::roles_path_resolver::{RolesPathRequest, RolesPathResolver};
use crate::application::use_cases::sync_roles::{SyncReport, SyncRolesConfig, SyncRolesUseCase};
use crate::application::use_cases::update_gitignore::UpdateGitignoreUseCase;
use crate::common::paths::normalize_lexically;
use crate::common::result::{OptionExt, ResultExt, WorkspaceResult};
use crate::domain::entities::workspace_descriptor::WorkspaceDescriptor;
use crate::domain::value_objects::workspace_kind::WorkspaceKind;
use crate::infrastructure::filesystem::manifest_store::ManifestStore;
use crate::infrastructure::filesystem::workspace_store::WorkspaceStore;
use crate::infrastructure::git::GitRepoFactory;
use std::path::{Path, PathBuf};
use tracing::info;

/// デフォルトのansible.cfgファイル名
const ANSIBLE_CONFIG_FILE: &str = "ansible.cfg";

/// ワークスペース生成の設定
#[derive(Debug, Clone)]
pub struct GenerateWorkspaceConfig {
    /// プロジェクトディレクトリ（ワークスペース名の由来）
    pub project_dir: PathBuf,

    /// 生成するワークスペースの種別
    pub kind: WorkspaceKind,

    /// ワークスペースファイルの出力先
    pub workspaces_path: PathBuf,

    /// requirementsファイル（Noneの場合は検索する）
    pub roles_config: Option<PathBuf>,

    /// 明示的に指定されたansible.cfg（Noneの場合は`<project>/ansible.cfg`を任意で読む）
    pub ansible_config: Option<PathBuf>,

    /// ロールディレクトリの明示的な指定
    pub roles_path: Option<PathBuf>,

    /// シンボリックリンクの作成先
    pub symlink_path: Option<PathBuf>,

    /// VS Codeの推奨拡張機能（Noneの場合はデフォルト）
    pub recommendations: Option<Vec<String>>,
}

impl GenerateWorkspaceConfig {
    pub fn new(
        project_dir: impl Into<PathBuf>,
        kind: WorkspaceKind,
        workspaces_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            kind,
            workspaces_path: workspaces_path.into(),
            roles_config: None,
            ansible_config: None,
            roles_path: None,
            symlink_path: None,
            recommendations: None,
        }
    }

    pub fn with_roles_config(mut self, roles_config: Option<PathBuf>) -> Self {
        self.roles_config = roles_config;
        self
    }

    pub fn with_ansible_config(mut self, ansible_config: Option<PathBuf>) -> Self {
        self.ansible_config = ansible_config;
        self
    }

    pub fn with_roles_path(mut self, roles_path: Option<PathBuf>) -> Self {
        self.roles_path = roles_path;
        self
    }

    pub fn with_symlink_path(mut self, symlink_path: Option<PathBuf>) -> Self {
        self.symlink_path = symlink_path;
        self
    }

    pub fn with_recommendations(mut self, recommendations: Option<Vec<String>>) -> Self {
        self.recommendations = recommendations;
        self
    }
}

/// ワークスペース生成の結果
#[derive(Debug, Clone)]
pub struct GenerateWorkspaceResult {
    /// プロジェクト名
    pub project_name: String,

    /// 読み込んだrequirementsファイル
    pub manifest_path: PathBuf,

    /// 使用したロールディレクトリ
    pub roles_path: PathBuf,

    /// ロール同期の結果
    pub sync: SyncReport,

    /// .gitignoreに追記した行
    pub gitignore_entries: Vec<String>,

    /// 書き出したワークスペースファイル
    pub workspace_file: PathBuf,
}

/// ワークスペース生成のユースケース
///
/// マニフェスト読み込み、ロール同期、.gitignore更新、ワークスペース書き出しを順に行う。
pub struct GenerateWorkspaceUseCase {
    config: GenerateWorkspaceConfig,
    manifest_store: ManifestStore,
    resolver: RolesPathResolver,
    factory: Option<Box<dyn GitRepoFactory>>,
}

impl GenerateWorkspaceUseCase {
    pub fn new(config: GenerateWorkspaceConfig) -> Self {
        Self {
            config,
            manifest_store: ManifestStore::new(),
            resolver: RolesPathResolver::new(),
            factory: None,
        }
    }

    /// ロールディレクトリの解決方法を差し替える
    pub fn with_resolver(mut self, resolver: RolesPathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// リポジトリハンドルの生成方法を差し替える
    pub fn with_factory(mut self, factory: Box<dyn GitRepoFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// ワークスペース生成を実行
    pub async fn execute(self) -> WorkspaceResult<GenerateWorkspaceResult> {
        let Self {
            config,
            manifest_store,
            resolver,
            factory,
        } = self;

        // 1. プロジェクトの特定
        let project_dir = absolute_project_dir(&config.project_dir)?;
        let project_name = project_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_config_error(format!(
                "Cannot derive a project name from {}",
                project_dir.display()
            ))?;

        // 2. マニフェストの読み込み
        let roles_config = config
            .roles_config
            .as_deref()
            .map(|path| normalize_lexically(&project_dir.join(path)));
        let manifest = manifest_store
            .load(roles_config.as_deref(), &project_dir)
            .await?;
        info!(
            path = %manifest.path.display(),
            roles = manifest.roles.len(),
            "loaded roles manifest"
        );

        // 3. ロールディレクトリの解決
        let default_config = project_dir.join(ANSIBLE_CONFIG_FILE);
        let ansible_config = config
            .ansible_config
            .as_deref()
            .map(|path| normalize_lexically(&project_dir.join(path)))
            .unwrap_or(default_config);
        let roles_path = resolver
            .resolve(&RolesPathRequest {
                explicit: config.roles_path.as_deref(),
                ansible_config: &ansible_config,
                ansible_config_required: config.ansible_config.is_some(),
                project_dir: &project_dir,
            })
            .await?;

        // 4. ロール同期
        let symlink_path = config
            .symlink_path
            .as_deref()
            .map(|path| normalize_lexically(&project_dir.join(path)));
        let mut sync_use_case = SyncRolesUseCase::new(
            SyncRolesConfig::new(&roles_path).with_symlink_path(symlink_path.clone()),
        );
        if let Some(factory) = factory {
            sync_use_case = sync_use_case.with_factory(factory);
        }
        let sync = sync_use_case.execute(&manifest.roles).await?;

        // 5. .gitignoreの更新
        let gitignore = UpdateGitignoreUseCase::new(&project_dir);
        let mut gitignore_entries = gitignore.execute(&manifest.roles, &roles_path).await?;
        if let Some(symlink_path) = &symlink_path {
            gitignore_entries.extend(gitignore.execute(&manifest.roles, symlink_path).await?);
        }

        // 6. ワークスペースの書き出し
        let descriptor = WorkspaceDescriptor::build(
            config.kind,
            &project_name,
            &project_dir,
            &roles_path,
            &manifest.roles,
            config.recommendations.clone(),
        );
        let store = WorkspaceStore::new(normalize_lexically(
            &project_dir.join(&config.workspaces_path),
        ));
        let workspace_file = store.write(&project_name, &descriptor).await?;

        Ok(GenerateWorkspaceResult {
            project_name,
            manifest_path: manifest.path,
            roles_path,
            sync,
            gitignore_entries,
            workspace_file,
        })
    }
}

/// 相対パスをカレントディレクトリ基準の絶対パスにする
fn absolute_project_dir(project_dir: &Path) -> WorkspaceResult<PathBuf> {
    if project_dir.is_absolute() {
        return Ok(project_dir.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .with_filesystem_error("Failed to determine the current directory", None)?;
    let joined = cwd.join(project_dir);
    // `-C .`などでも名前が取れるように正規化する
    Ok(joined.canonicalize().unwrap_or(joined))
}
