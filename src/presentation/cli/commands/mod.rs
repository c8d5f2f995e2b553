pub mod version;
pub mod workspace;

pub use version::*;
pub use workspace::*;
