//! Shared utilities

pub mod path_resolver;

pub use path_resolver::{canonical_basename, resolve_relative};
