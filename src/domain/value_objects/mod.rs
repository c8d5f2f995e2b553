pub mod scm_type;
pub mod workspace_kind;

pub use scm_type::ScmType;
pub use workspace_kind::WorkspaceKind;
