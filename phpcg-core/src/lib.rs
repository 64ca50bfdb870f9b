//! Core utilities and types for the phpcg code generator.
//!
//! This crate provides the pieces shared by the structural model and the
//! renderer: the error taxonomy, built-in type classification, literal
//! values with their PHP export rule, and rendering configuration.

mod builtin;
mod config;
mod error;
mod indent;
mod literal;

// Errors
pub use error::{Error, Result};
// Type classification
pub use builtin::{BUILTIN_TYPES, is_builtin};
// Configuration
pub use config::RenderConfig;
pub use indent::Indent;
// Literal values
pub use literal::{ArrayKey, Literal, export};
