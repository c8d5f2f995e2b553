use crate::domain::value_objects::scm_type::ScmType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// requirementsファイルに記述されたAnsibleロール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsibleRole {
    /// ロール名（ロールディレクトリ名としても使用）
    pub name: String,

    /// リポジトリのURL
    pub src: String,

    /// SCMの種別
    #[serde(default)]
    pub scm: ScmType,

    /// タグ、ブランチ名またはref（オプション）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AnsibleRole {
    /// 新しいgitロールを作成
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
            scm: ScmType::Git,
            version: None,
        }
    }

    /// バージョンを設定
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// ロールディレクトリ配下でのこのロールのパス
    pub fn path_in(&self, roles_path: &Path) -> PathBuf {
        roles_path.join(&self.name)
    }
}
