use super::role::AnsibleRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// デフォルトで推奨する拡張機能
pub const DEFAULT_RECOMMENDATIONS: &[&str] = &["redhat.ansible"];

/// VS Codeワークスペースのフォルダ定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSCodeFolder {
    /// エクスプローラーに表示される名前
    pub name: String,

    /// フォルダのパス
    pub path: String,
}

impl VSCodeFolder {
    /// 新しいフォルダを作成
    pub fn new(name: impl Into<String>, path: &Path) -> Self {
        Self {
            name: name.into(),
            path: path.display().to_string(),
        }
    }
}

/// 拡張機能の推奨設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSCodeExtensions {
    /// 推奨する拡張機能のID
    pub recommendations: Vec<String>,
}

impl Default for VSCodeExtensions {
    fn default() -> Self {
        Self {
            recommendations: DEFAULT_RECOMMENDATIONS
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

/// VS Codeのマルチルートワークスペース定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSCodeWorkspace {
    /// フォルダのリスト（表示順）
    pub folders: Vec<VSCodeFolder>,

    /// ワークスペース設定
    #[serde(default)]
    pub settings: BTreeMap<String, String>,

    /// 拡張機能の推奨
    #[serde(default)]
    pub extensions: VSCodeExtensions,
}

impl VSCodeWorkspace {
    /// プロジェクトとロールからワークスペースを構築
    pub fn for_project(
        project_name: &str,
        project_dir: &Path,
        roles_path: &Path,
        roles: &[AnsibleRole],
    ) -> Self {
        let mut folders = vec![VSCodeFolder::new(project_name, project_dir)];
        folders.extend(
            roles
                .iter()
                .map(|role| VSCodeFolder::new(role.name.clone(), &role.path_in(roles_path))),
        );

        Self {
            folders,
            settings: BTreeMap::new(),
            extensions: VSCodeExtensions::default(),
        }
    }

    /// 推奨拡張機能を置き換える
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.extensions.recommendations = recommendations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_folders() {
        let roles = vec![AnsibleRole::new("common", "https://example.com/common.git")];
        let workspace = VSCodeWorkspace::for_project(
            "infra",
            Path::new("/work/infra"),
            Path::new("/home/user/.ansible/roles"),
            &roles,
        );

        assert_eq!(workspace.folders.len(), 2);
        assert_eq!(workspace.folders[0].name, "infra");
        assert_eq!(workspace.folders[1].path, "/home/user/.ansible/roles/common");
        assert!(workspace.settings.is_empty());
        assert_eq!(workspace.extensions.recommendations, vec!["redhat.ansible"]);
    }

    #[test]
    fn test_recommendations_override() {
        let workspace =
            VSCodeWorkspace::for_project("infra", Path::new("/work/infra"), Path::new("/r"), &[])
                .with_recommendations(vec!["ms-python.python".to_string()]);
        assert_eq!(workspace.extensions.recommendations, vec!["ms-python.python"]);
    }

    #[test]
    fn test_json_shape() {
        let workspace =
            VSCodeWorkspace::for_project("infra", Path::new("/work/infra"), Path::new("/r"), &[]);
        let value = serde_json::to_value(&workspace).unwrap();
        assert_eq!(value["folders"][0]["path"], "/work/infra");
        assert_eq!(value["settings"], serde_json::json!({}));
        assert_eq!(
            value["extensions"]["recommendations"],
            serde_json::json!(["redhat.ansible"])
        );
    }
}
