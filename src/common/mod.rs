//! Shared error handling utilities

pub mod error;
pub mod paths;
pub mod result;
