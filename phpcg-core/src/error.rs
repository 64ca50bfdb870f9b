use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for model and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported synchronously by model mutators and configuration loading.
///
/// Rendering itself never fails; every variant here is raised at the call
/// that introduced the problem.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("the constant \"{name}\" does not exist")]
    #[diagnostic(code(phpcg::unknown_constant))]
    UnknownConstant { name: String },

    #[error("the property \"{name}\" does not exist")]
    #[diagnostic(code(phpcg::unknown_property))]
    UnknownProperty { name: String },

    #[error("the method \"{name}\" does not exist")]
    #[diagnostic(code(phpcg::unknown_method))]
    UnknownMethod { name: String },

    #[error("there is no parameter at position {position}")]
    #[diagnostic(
        code(phpcg::parameter_out_of_range),
        help("the position must be in the range [0, {len}]")
    )]
    ParameterOutOfRange { position: usize, len: usize },

    #[error("invalid visibility '{value}'")]
    #[diagnostic(
        code(phpcg::invalid_visibility),
        help("valid visibilities are: public, protected, private")
    )]
    InvalidVisibility { value: String },

    #[error("empty type name given to {context}")]
    #[diagnostic(code(phpcg::empty_type_name))]
    EmptyTypeName { context: &'static str },

    #[error("failed to parse render configuration")]
    #[diagnostic(code(phpcg::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(phpcg::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn unknown_constant(name: impl Into<String>) -> Self {
        Self::UnknownConstant { name: name.into() }
    }

    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }
}
