use std::path::PathBuf;
use tokio::fs as async_fs;
use tracing::info;

use crate::common::result::{ResultExt, WorkspaceResult};
use crate::domain::entities::workspace_descriptor::WorkspaceDescriptor;

/// Writes workspace descriptors into the workspaces directory
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    workspaces_path: PathBuf,
}

impl WorkspaceStore {
    pub fn new(workspaces_path: impl Into<PathBuf>) -> Self {
        Self {
            workspaces_path: workspaces_path.into(),
        }
    }

    /// Serialize a descriptor to text: YAML for tmuxp, pretty JSON for VS Code
    pub fn render(descriptor: &WorkspaceDescriptor) -> WorkspaceResult<String> {
        match descriptor {
            WorkspaceDescriptor::Tmuxp(workspace) => Ok(serde_yaml::to_string(workspace)?),
            WorkspaceDescriptor::VsCode(workspace) => {
                let mut json = serde_json::to_string_pretty(workspace)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Write `<workspaces_path>/<project_name>.<ext>`, replacing any previous file
    pub async fn write(
        &self,
        project_name: &str,
        descriptor: &WorkspaceDescriptor,
    ) -> WorkspaceResult<PathBuf> {
        let content = Self::render(descriptor)?;

        async_fs::create_dir_all(&self.workspaces_path)
            .await
            .with_filesystem_error(
                "Failed to create workspaces directory",
                Some(self.workspaces_path.clone()),
            )?;

        let path = self
            .workspaces_path
            .join(descriptor.kind().file_name(project_name));
        async_fs::write(&path, content)
            .await
            .with_filesystem_error("Failed to write workspace config", Some(path.clone()))?;

        info!(path = %path.display(), kind = %descriptor.kind(), "wrote workspace config");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::role::AnsibleRole;
    use crate::domain::entities::{TmuxpWorkspace, VSCodeWorkspace};
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    fn roles() -> Vec<AnsibleRole> {
        vec![
            AnsibleRole::new("common", "https://example.com/common.git"),
            AnsibleRole::new("nginx", "https://example.com/nginx.git"),
        ]
    }

    #[tokio::test]
    async fn test_write_tmuxp_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path().join("workspaces/nested"));
        let descriptor = WorkspaceDescriptor::Tmuxp(TmuxpWorkspace::for_project(
            "infra",
            Path::new("/work/infra"),
            Path::new("/work/infra/roles"),
            &roles(),
        ));

        let path = store.write("infra", &descriptor).await.unwrap();

        assert_eq!(
            path,
            temp_dir.path().join("workspaces/nested/infra.tmuxp-workspace.yml")
        );
        let parsed: TmuxpWorkspace =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let names: Vec<_> = parsed.windows.iter().map(|w| w.window_name.as_str()).collect();
        assert_eq!(names, vec!["infra", "ansible", "common", "nginx"]);
    }

    #[tokio::test]
    async fn test_write_vscode_as_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = WorkspaceStore::new(temp_dir.path());
        let descriptor = WorkspaceDescriptor::VsCode(VSCodeWorkspace::for_project(
            "infra",
            Path::new("/work/infra"),
            Path::new("/work/infra/roles"),
            &roles(),
        ));

        let path = store.write("infra", &descriptor).await.unwrap();

        assert_eq!(path, temp_dir.path().join("infra.code-workspace"));
        let parsed: VSCodeWorkspace =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.folders.len(), 3);
        assert_eq!(parsed.folders[2].path, "/work/infra/roles/nginx");
    }

    #[test]
    fn test_render_tmuxp_fields() {
        let descriptor = WorkspaceDescriptor::Tmuxp(TmuxpWorkspace::for_project(
            "infra",
            Path::new("/work/infra"),
            Path::new("/work/infra/roles"),
            &[],
        ));
        let rendered = WorkspaceStore::render(&descriptor).unwrap();
        assert!(rendered.contains("session_name: infra"));
        assert!(rendered.contains("layout: tiled"));
        assert!(rendered.contains("shell_command_before:"));
    }
}
