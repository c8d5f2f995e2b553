use super::role::AnsibleRole;
use super::tmuxp_workspace::TmuxpWorkspace;
use super::vscode_workspace::VSCodeWorkspace;
use crate::domain::value_objects::workspace_kind::WorkspaceKind;
use std::path::Path;

/// 生成対象のワークスペース定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceDescriptor {
    Tmuxp(TmuxpWorkspace),
    VsCode(VSCodeWorkspace),
}

impl WorkspaceDescriptor {
    /// 種別に応じたワークスペースを構築
    ///
    /// `recommendations`はVS Codeの場合のみ使用し、`None`ならデフォルトの推奨を残す
    pub fn build(
        kind: WorkspaceKind,
        project_name: &str,
        project_dir: &Path,
        roles_path: &Path,
        roles: &[AnsibleRole],
        recommendations: Option<Vec<String>>,
    ) -> Self {
        match kind {
            WorkspaceKind::Tmuxp => Self::Tmuxp(TmuxpWorkspace::for_project(
                project_name,
                project_dir,
                roles_path,
                roles,
            )),
            WorkspaceKind::VsCode => {
                let workspace =
                    VSCodeWorkspace::for_project(project_name, project_dir, roles_path, roles);
                Self::VsCode(match recommendations {
                    Some(recommendations) => workspace.with_recommendations(recommendations),
                    None => workspace,
                })
            }
        }
    }

    pub fn kind(&self) -> WorkspaceKind {
        match self {
            Self::Tmuxp(_) => WorkspaceKind::Tmuxp,
            Self::VsCode(_) => WorkspaceKind::VsCode,
        }
    }
}
