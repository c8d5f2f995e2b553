use crate::common::result::{ResultExt, WorkspaceResult};
use crate::domain::entities::role::AnsibleRole;
use crate::infrastructure::filesystem::role_symlink::replace_with_symlink;
use crate::infrastructure::git::{CliGitFactory, GitCommandError, GitOperations, GitRepoFactory};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// バージョン指定がない場合に優先するローカルブランチ
const DEFAULT_BRANCHES: &[&str] = &["master", "main"];

/// ロール同期の設定
#[derive(Debug, Clone)]
pub struct SyncRolesConfig {
    /// ロールをクローンするディレクトリ
    pub roles_path: PathBuf,

    /// 各ロールへのシンボリックリンクを作成するディレクトリ
    pub symlink_path: Option<PathBuf>,
}

impl SyncRolesConfig {
    pub fn new(roles_path: impl Into<PathBuf>) -> Self {
        Self {
            roles_path: roles_path.into(),
            symlink_path: None,
        }
    }

    pub fn with_symlink_path(mut self, symlink_path: Option<PathBuf>) -> Self {
        self.symlink_path = symlink_path;
        self
    }
}

/// チェックアウトの判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// タグをチェックアウトした
    Tag(String),

    /// ローカルブランチをチェックアウトした
    LocalBranch(String),

    /// `origin/<branch>`を追跡するブランチを作成した
    RemoteBranch(String),

    /// バージョン指定なしで`master`または`main`をチェックアウトした
    DefaultBranch(String),

    /// 指定バージョンがどこにも見つからず、作業ツリーはそのまま
    Unresolved { version: String },

    /// バージョン指定なしで`master`も`main`も存在しない
    NoDefaultBranch,
}

/// 単一ロールの同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSyncOutcome {
    /// ロール名
    pub name: String,

    /// 作業ツリーのパス
    pub path: PathBuf,

    /// 今回新たにクローンしたか
    pub cloned: bool,

    /// チェックアウトの結果
    pub checkout: CheckoutOutcome,

    /// 作成したシンボリックリンク
    pub symlink: Option<PathBuf>,
}

/// ロール同期の結果（マニフェスト順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub roles: Vec<RoleSyncOutcome>,
}

impl SyncReport {
    pub fn cloned_count(&self) -> usize {
        self.roles.iter().filter(|role| role.cloned).count()
    }

    /// バージョンを解決できなかったロール
    pub fn unresolved(&self) -> impl Iterator<Item = &RoleSyncOutcome> {
        self.roles
            .iter()
            .filter(|role| matches!(role.checkout, CheckoutOutcome::Unresolved { .. }))
    }
}

/// ロール同期のユースケース
///
/// ロールはマニフェスト順に1つずつ処理し、最初のgitエラーで中断する。
pub struct SyncRolesUseCase {
    config: SyncRolesConfig,
    factory: Box<dyn GitRepoFactory>,
}

impl SyncRolesUseCase {
    /// `git`コマンドを使うSyncRolesUseCaseを作成
    pub fn new(config: SyncRolesConfig) -> Self {
        Self {
            config,
            factory: Box::new(CliGitFactory::new()),
        }
    }

    /// リポジトリハンドルの生成方法を差し替える
    pub fn with_factory(mut self, factory: Box<dyn GitRepoFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// ロール同期を実行
    pub async fn execute(&self, roles: &[AnsibleRole]) -> WorkspaceResult<SyncReport> {
        let mut report = SyncReport::default();
        if roles.is_empty() {
            return Ok(report);
        }

        // 1. gitが使えるか確認
        self.factory.check_availability().await?;

        for role in roles {
            // 2. ロールディレクトリの作成
            tokio::fs::create_dir_all(&self.config.roles_path)
                .await
                .with_filesystem_error(
                    "Failed to create roles directory",
                    Some(self.config.roles_path.clone()),
                )?;

            // 3. クローン、フェッチ、チェックアウト
            let path = role.path_in(&self.config.roles_path);
            let repo = self.factory.open(&role.src, &path);
            let mut outcome = Self::sync_role(role, &path, repo.as_ref()).await?;

            // 4. シンボリックリンク
            if let Some(symlink_path) = &self.config.symlink_path {
                let link = symlink_path.join(&role.name);
                replace_with_symlink(&link, &path)?;
                info!(role = %role.name, link = %link.display(), "symlinked role");
                outcome.symlink = Some(link);
            }

            report.roles.push(outcome);
        }

        Ok(report)
    }

    /// 単一ロールのクローン、フェッチ、チェックアウト
    pub async fn sync_role(
        role: &AnsibleRole,
        path: &Path,
        repo: &dyn GitOperations,
    ) -> WorkspaceResult<RoleSyncOutcome> {
        let cloned = !repo.is_cloned();
        if cloned {
            info!(role = %role.name, source = %role.src, "cloning role");
            repo.clone_repository().await?;
        }
        repo.fetch_all().await?;

        let checkout = match role.version.as_deref() {
            Some(version) => Self::checkout_version(version, repo).await?,
            None => Self::checkout_default_branch(repo).await?,
        };
        if let CheckoutOutcome::Unresolved { version } = &checkout {
            warn!(role = %role.name, version = %version, "version not found in tags or branches");
        }

        Ok(RoleSyncOutcome {
            name: role.name.clone(),
            path: path.to_path_buf(),
            cloned,
            checkout,
            symlink: None,
        })
    }

    /// タグ、ローカルブランチ、リモートブランチの順で探す
    ///
    /// 一覧は必要になった時点で取得する。
    async fn checkout_version(
        version: &str,
        repo: &dyn GitOperations,
    ) -> Result<CheckoutOutcome, GitCommandError> {
        if repo.list_tags().await?.iter().any(|tag| tag == version) {
            debug!(version, "checking out tag");
            repo.checkout(version).await?;
            return Ok(CheckoutOutcome::Tag(version.to_string()));
        }

        if repo
            .list_local_branches()
            .await?
            .iter()
            .any(|branch| branch == version)
        {
            debug!(version, "checking out local branch");
            repo.checkout(version).await?;
            return Ok(CheckoutOutcome::LocalBranch(version.to_string()));
        }

        let remote = format!("origin/{}", version);
        if repo
            .list_remote_branches()
            .await?
            .iter()
            .any(|branch| *branch == remote)
        {
            debug!(version, "checking out remote branch");
            repo.checkout_remote_branch(version).await?;
            return Ok(CheckoutOutcome::RemoteBranch(version.to_string()));
        }

        Ok(CheckoutOutcome::Unresolved {
            version: version.to_string(),
        })
    }

    async fn checkout_default_branch(
        repo: &dyn GitOperations,
    ) -> Result<CheckoutOutcome, GitCommandError> {
        let local = repo.list_local_branches().await?;
        match DEFAULT_BRANCHES
            .iter()
            .find(|candidate| local.iter().any(|branch| branch.as_str() == **candidate))
        {
            Some(branch) => {
                debug!(branch, "checking out default branch");
                repo.checkout(branch).await?;
                Ok(CheckoutOutcome::DefaultBranch(branch.to_string()))
            }
            None => Ok(CheckoutOutcome::NoDefaultBranch),
        }
    }
}
