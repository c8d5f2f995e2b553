pub mod manifest_service;
pub mod roles_path_resolver;

pub use manifest_service::{ManifestService, ManifestServiceError};
pub use roles_path_resolver::{RolesPathRequest, RolesPathResolver};
