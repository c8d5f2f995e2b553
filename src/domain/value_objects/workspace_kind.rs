use std::fmt;

/// Kind of workspace descriptor to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceKind {
    /// tmuxp session file, one window per role
    Tmuxp,
    /// VS Code multi-root workspace, one folder per role
    VsCode,
}

impl WorkspaceKind {
    /// File name suffix appended to the project name
    pub fn file_extension(&self) -> &'static str {
        match self {
            WorkspaceKind::Tmuxp => "tmuxp-workspace.yml",
            WorkspaceKind::VsCode => "code-workspace",
        }
    }

    /// Descriptor file name for a project
    pub fn file_name(&self, project_name: &str) -> String {
        format!("{}.{}", project_name, self.file_extension())
    }
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceKind::Tmuxp => write!(f, "tmuxp"),
            WorkspaceKind::VsCode => write!(f, "vscode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(
            WorkspaceKind::Tmuxp.file_name("infra"),
            "infra.tmuxp-workspace.yml"
        );
        assert_eq!(WorkspaceKind::VsCode.file_name("infra"), "infra.code-workspace");
    }
}
