pub mod generate_workspace;
pub mod sync_roles;
pub mod update_gitignore;

pub use generate_workspace::{
    GenerateWorkspaceConfig, GenerateWorkspaceResult, GenerateWorkspaceUseCase,
};
pub use sync_roles::{
    CheckoutOutcome, RoleSyncOutcome, SyncReport, SyncRolesConfig, SyncRolesUseCase,
};
pub use update_gitignore::UpdateGitignoreUseCase;
