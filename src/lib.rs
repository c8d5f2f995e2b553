//! # ansible-workspace
//!
//! `ansible-workspace` prepares a workspace for developing Ansible playbooks together
//! with the git-hosted roles they depend on.
//!
//! ## Features
//!
//! - **Role Sync**: Clone or update every git role of a `requirements.yml` and check out
//!   the requested tag or branch
//! - **Symlinks**: Optionally link every role into a directory of your choice
//! - **Gitignore**: Keep roles cloned into the project out of version control
//! - **Workspaces**: Generate a tmuxp session or a VS Code multi-root workspace
//!
//! ## Quick Start
//!
//! 1. Describe your roles (`requirements.yml`):
//!
//! ```yaml
//! roles:
//!   - name: common
//!     src: https://github.com/example/ansible-role-common.git
//!     scm: git
//!     version: v1.0
//! ```
//!
//! 2. Sync the roles and create a workspace:
//!
//! ```bash
//! ansible-workspace tmuxp
//! ansible-workspace vscode --extension redhat.ansible
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Roles and workspace descriptors
//! - [`application`]: Use cases and services
//! - [`infrastructure`]: Git and file system access
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: Shared error handling and path helpers
//!
//! ## Roles Path
//!
//! Roles are cloned into the first of:
//!
//! 1. `--roles-path` / `ANSIBLE_ROLES_PATH`
//! 2. `<project>/roles` if it exists
//! 3. `[defaults] roles_path` of `ansible.cfg`
//! 4. `~/.ansible/roles`
//!
//! ## Error Handling
//!
//! - [`common::error::WorkspaceError`]: Main error type with detailed context
//! - [`common::result::WorkspaceResult`]: Type alias for `Result<T, WorkspaceError>`
//!
//! ## Examples
//!
//! ```rust,no_run
//! use ansible_workspace::application::use_cases::generate_workspace::{
//!     GenerateWorkspaceConfig, GenerateWorkspaceUseCase,
//! };
//! use ansible_workspace::domain::value_objects::WorkspaceKind;
//!
//! # async fn example() -> ansible_workspace::Result<()> {
//! let config = GenerateWorkspaceConfig::new("/work/infra", WorkspaceKind::Tmuxp, "/home/me/workspaces")
//!     .with_symlink_path(Some("/work/infra/links".into()));
//!
//! let result = GenerateWorkspaceUseCase::new(config).execute().await?;
//! println!("Created workspace config at {:?}", result.workspace_file);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::WorkspaceError;
pub use crate::common::result::WorkspaceResult as Result;
