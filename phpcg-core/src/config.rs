//! Rendering configuration.

use std::path::Path;

use eyre::{Result as EyreResult, WrapErr};
use serde::Deserialize;

use crate::{Error, Indent, Result};

/// Knobs that change how the default visitor renders a model.
///
/// ```
/// use phpcg_core::{Indent, RenderConfig};
///
/// let config = RenderConfig::from_toml_str(
///     r#"
///     [render]
///     nullable_types = false
///     indent = "tab"
///     "#,
/// )
/// .unwrap();
///
/// assert!(!config.nullable_types);
/// assert_eq!(config.indent, Indent::Tab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit `?Type` on method return types. Parameter markers are always
    /// written.
    pub nullable_types: bool,
    /// Indentation unit for nested lines.
    pub indent: Indent,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            nullable_types: true,
            indent: Indent::PHP,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

impl RenderConfig {
    /// Config without nullable method return types.
    pub fn legacy() -> Self {
        Self {
            nullable_types: false,
            ..Self::default()
        }
    }

    /// Parse the `[render]` table of a TOML document. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|source| Error::Config { source })?;
        Ok(file.render)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> EyreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
            .wrap_err_with(|| format!("invalid configuration in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert!(config.nullable_types);
        assert_eq!(config.indent, Indent::PHP);
        assert!(!RenderConfig::legacy().nullable_types);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(
            RenderConfig::from_toml_str("").unwrap(),
            RenderConfig::default()
        );
    }

    #[test]
    fn test_partial_table() {
        let config = RenderConfig::from_toml_str("[render]\nindent = 2\n").unwrap();
        assert!(config.nullable_types);
        assert_eq!(config.indent, Indent::Spaces(2));
    }

    #[test]
    fn test_invalid_document() {
        let err = RenderConfig::from_toml_str("[render]\nnullable_types = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = RenderConfig::from_toml_str("[render]\nindent = \"wide\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nnullable_types = false").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert!(!config.nullable_types);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/nonexistent/phpcg.toml").unwrap_err();
        assert!(err.downcast_ref::<Error>().is_some());
    }
}
