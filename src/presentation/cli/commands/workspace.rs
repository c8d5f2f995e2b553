use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::PathBuf;

use crate::application::use_cases::generate_workspace::{
    GenerateWorkspaceConfig, GenerateWorkspaceResult, GenerateWorkspaceUseCase,
};
use crate::application::use_cases::sync_roles::{CheckoutOutcome, RoleSyncOutcome};
use crate::domain::value_objects::workspace_kind::WorkspaceKind;

/// Default directory for generated workspace files, below the home directory
const DEFAULT_WORKSPACES_DIR: &str = "workspaces";

/// Handler for the tmuxp and vscode commands
pub struct WorkspaceCommand {
    pub kind: WorkspaceKind,
    pub roles_config: Option<PathBuf>,
    pub ansible_config: Option<PathBuf>,
    pub roles_path: Option<PathBuf>,
    pub symlink_path: Option<PathBuf>,
    pub workspaces_path: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub verbose: bool,
}

impl WorkspaceCommand {
    pub fn new(kind: WorkspaceKind, verbose: bool) -> Self {
        Self {
            kind,
            roles_config: None,
            ansible_config: None,
            roles_path: None,
            symlink_path: None,
            workspaces_path: None,
            extensions: Vec::new(),
            verbose,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let project_dir = env::current_dir().context("Failed to read the current directory")?;
        let workspaces_path = match &self.workspaces_path {
            Some(path) => path.clone(),
            None => dirs::home_dir()
                .context("Could not determine the home directory; pass --workspaces-path")?
                .join(DEFAULT_WORKSPACES_DIR),
        };
        let recommendations = if self.extensions.is_empty() {
            None
        } else {
            Some(self.extensions.clone())
        };

        let config = GenerateWorkspaceConfig::new(project_dir, self.kind, workspaces_path)
            .with_roles_config(self.roles_config.clone())
            .with_ansible_config(self.ansible_config.clone())
            .with_roles_path(self.roles_path.clone())
            .with_symlink_path(self.symlink_path.clone())
            .with_recommendations(recommendations);

        println!("{} Syncing roles for {} workspace...", "::".blue().bold(), self.kind);

        let result = GenerateWorkspaceUseCase::new(config).execute().await?;
        self.print_result(&result);
        Ok(())
    }

    fn print_result(&self, result: &GenerateWorkspaceResult) {
        if self.verbose {
            println!("  Manifest: {}", result.manifest_path.display());
            println!("  Roles path: {}", result.roles_path.display());
        }

        for role in &result.sync.roles {
            println!("{}", describe_role(role));
            if let Some(link) = &role.symlink {
                println!("  Symlinked \"{}\" to \"{}\"", role.name, link.display());
            }
        }

        for role in result.sync.unresolved() {
            if let CheckoutOutcome::Unresolved { version } = &role.checkout {
                println!(
                    "{} Version \"{}\" of role \"{}\" matches no tag or branch, left as is",
                    "⚠".yellow().bold(),
                    version,
                    role.name
                );
            }
        }

        for entry in &result.gitignore_entries {
            println!("Adding \"{}\" to .gitignore", entry);
        }

        if self.verbose {
            println!(
                "  Roles synced: {} ({} cloned)",
                result.sync.roles.len(),
                result.sync.cloned_count()
            );
        }

        println!(
            "{} Created workspace config at \"{}\"",
            "✓".green().bold(),
            result.workspace_file.display()
        );
    }
}

fn describe_role(role: &RoleSyncOutcome) -> String {
    let action = if role.cloned { "Cloned" } else { "Updated" };
    let checkout = match &role.checkout {
        CheckoutOutcome::Tag(tag) => format!("tag {}", tag),
        CheckoutOutcome::LocalBranch(branch) | CheckoutOutcome::DefaultBranch(branch) => {
            format!("branch {}", branch)
        }
        CheckoutOutcome::RemoteBranch(branch) => format!("branch {} from origin", branch),
        CheckoutOutcome::Unresolved { version } => format!("{} not found", version),
        CheckoutOutcome::NoDefaultBranch => "current branch".to_string(),
    };
    format!(
        "{} {} {} ({})",
        "✓".green(),
        action,
        role.name.bold(),
        checkout
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(cloned: bool, checkout: CheckoutOutcome) -> RoleSyncOutcome {
        RoleSyncOutcome {
            name: "common".to_string(),
            path: PathBuf::from("/roles/common"),
            cloned,
            checkout,
            symlink: None,
        }
    }

    #[test]
    fn test_describe_role() {
        colored::control::set_override(false);

        assert_eq!(
            describe_role(&outcome(true, CheckoutOutcome::Tag("v1.0".to_string()))),
            "✓ Cloned common (tag v1.0)"
        );
        assert_eq!(
            describe_role(&outcome(
                false,
                CheckoutOutcome::RemoteBranch("2.x".to_string())
            )),
            "✓ Updated common (branch 2.x from origin)"
        );
        assert_eq!(
            describe_role(&outcome(false, CheckoutOutcome::NoDefaultBranch)),
            "✓ Updated common (current branch)"
        );
    }
}
