//! Domain layer: roles and the workspace descriptors built from them

pub mod entities;
pub mod value_objects;
