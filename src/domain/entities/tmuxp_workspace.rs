use super::role::AnsibleRole;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 全ロールのディレクトリを開くウィンドウ名
pub const ROLES_ROOT_WINDOW: &str = "ansible";

fn default_layout() -> String {
    "tiled".to_string()
}

/// tmuxpセッションのウィンドウ定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxpWindow {
    /// ウィンドウ名
    pub window_name: String,

    /// ウィンドウの作業ディレクトリ
    pub start_directory: String,

    /// ペインのレイアウト
    #[serde(default = "default_layout")]
    pub layout: String,

    /// ペイン起動前に実行するコマンド
    #[serde(default)]
    pub shell_command_before: String,
}

impl TmuxpWindow {
    /// 新しいウィンドウを作成
    pub fn new(window_name: impl Into<String>, start_directory: &Path) -> Self {
        Self {
            window_name: window_name.into(),
            start_directory: start_directory.display().to_string(),
            layout: default_layout(),
            shell_command_before: String::new(),
        }
    }
}

/// tmuxpのワークスペース定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmuxpWorkspace {
    /// セッション名
    pub session_name: String,

    /// セッションの作業ディレクトリ
    pub start_directory: String,

    /// ウィンドウのリスト（表示順）
    pub windows: Vec<TmuxpWindow>,
}

impl TmuxpWorkspace {
    /// プロジェクトとロールからワークスペースを構築
    ///
    /// ウィンドウの順序: プロジェクトルート、ロールディレクトリ、各ロール
    pub fn for_project(
        project_name: &str,
        project_dir: &Path,
        roles_path: &Path,
        roles: &[AnsibleRole],
    ) -> Self {
        let mut windows = vec![
            TmuxpWindow::new(project_name, project_dir),
            TmuxpWindow::new(ROLES_ROOT_WINDOW, roles_path),
        ];
        windows.extend(
            roles
                .iter()
                .map(|role| TmuxpWindow::new(role.name.clone(), &role.path_in(roles_path))),
        );

        Self {
            session_name: project_name.to_string(),
            start_directory: project_dir.display().to_string(),
            windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults() {
        let window = TmuxpWindow::new("common", Path::new("/roles/common"));
        assert_eq!(window.layout, "tiled");
        assert_eq!(window.shell_command_before, "");
        assert_eq!(window.start_directory, "/roles/common");
    }

    #[test]
    fn test_workspace_window_order() {
        let roles = vec![
            AnsibleRole::new("common", "https://example.com/common.git"),
            AnsibleRole::new("nginx", "https://example.com/nginx.git"),
        ];
        let workspace = TmuxpWorkspace::for_project(
            "infra",
            Path::new("/work/infra"),
            Path::new("/work/infra/roles"),
            &roles,
        );

        let names: Vec<&str> = workspace
            .windows
            .iter()
            .map(|w| w.window_name.as_str())
            .collect();
        assert_eq!(names, vec!["infra", "ansible", "common", "nginx"]);
        assert_eq!(workspace.session_name, "infra");
        assert_eq!(workspace.windows[1].start_directory, "/work/infra/roles");
        assert_eq!(workspace.windows[3].start_directory, "/work/infra/roles/nginx");
    }
}
