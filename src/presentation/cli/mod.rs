pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;

use crate::domain::value_objects::workspace_kind::WorkspaceKind;
use commands::{VersionCommand, WorkspaceCommand};

/// ansible-workspace - Create a workspace for developing ansible playbooks with roles
#[derive(Parser)]
#[command(name = "ansible-workspace")]
#[command(about = "Create a workspace for multiple tools to easier develop ansible playbooks with roles")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the workspace generating commands
#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    /// Path to roles config file (searched for as requirements.y*ml if not given)
    #[arg(short = 'r', long)]
    pub roles_config: Option<PathBuf>,

    /// Path to ansible.cfg file [default: ./ansible.cfg]
    #[arg(long)]
    pub ansible_config: Option<PathBuf>,

    /// Path to the roles directory
    #[arg(long, env = "ANSIBLE_ROLES_PATH")]
    pub roles_path: Option<PathBuf>,

    /// Directory in which a symlink to every role is created
    #[arg(long)]
    pub symlink_path: Option<PathBuf>,

    /// Directory for the workspace file [default: ~/workspaces]
    #[arg(long, env = "WORKSPACES_PATH")]
    pub workspaces_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync roles and create a tmuxp workspace
    Tmuxp {
        #[command(flatten)]
        args: WorkspaceArgs,
    },

    /// Sync roles and create a VS Code workspace
    Vscode {
        #[command(flatten)]
        args: WorkspaceArgs,

        /// Recommended extension, replaces the defaults (repeatable)
        #[arg(long = "extension", value_name = "ID")]
        extensions: Vec<String>,
    },

    /// Show the installed version
    Version,
}

pub struct CliApp {
    cli: Cli,
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> Result<()> {
        // Set up colored output
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        // Change directory if specified
        if let Some(ref dir) = self.cli.directory {
            if let Err(e) = env::set_current_dir(dir) {
                eprintln!(
                    "{} Cannot change to {}: {}",
                    "Error:".red().bold(),
                    dir.display(),
                    e
                );
                exit(1);
            }
        }

        // Handle the command
        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Tmuxp { args } => {
                self.workspace_command(WorkspaceKind::Tmuxp, args, Vec::new())
                    .execute()
                    .await
            }
            Commands::Vscode { args, extensions } => {
                self.workspace_command(WorkspaceKind::VsCode, args, extensions.clone())
                    .execute()
                    .await
            }
            Commands::Version => VersionCommand::new(self.cli.verbose).execute(),
        }
    }

    fn workspace_command(
        &self,
        kind: WorkspaceKind,
        args: &WorkspaceArgs,
        extensions: Vec<String>,
    ) -> WorkspaceCommand {
        WorkspaceCommand {
            roles_config: args.roles_config.clone(),
            ansible_config: args.ansible_config.clone(),
            roles_path: args.roles_path.clone(),
            symlink_path: args.symlink_path.clone(),
            workspaces_path: args.workspaces_path.clone(),
            extensions,
            ..WorkspaceCommand::new(kind, self.cli.verbose)
        }
    }
}
