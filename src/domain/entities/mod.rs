pub mod role;
pub mod tmuxp_workspace;
pub mod vscode_workspace;
pub mod workspace_descriptor;

pub use role::AnsibleRole;
pub use tmuxp_workspace::{TmuxpWindow, TmuxpWorkspace};
pub use vscode_workspace::{VSCodeExtensions, VSCodeFolder, VSCodeWorkspace};
pub use workspace_descriptor::WorkspaceDescriptor;
