//! Visibility and type references.

use std::{fmt, str::FromStr};

use phpcg_core::{Error, Result, is_builtin};

/// Visibility/access level of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The PHP keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            other => Err(Error::InvalidVisibility {
                value: other.to_string(),
            }),
        }
    }
}

/// A type declaration on a parameter or a return value.
///
/// Whether the name is built-in is decided once, when the hint is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    name: String,
    builtin: bool,
    nullable: bool,
}

impl TypeHint {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let builtin = is_builtin(&name);
        Self {
            name,
            builtin,
            nullable: false,
        }
    }

    /// A hint that also accepts `null` (`?Type`).
    pub fn nullable(name: impl Into<String>) -> Self {
        Self::new(name).with_nullable(true)
    }

    /// Like [`TypeHint::new`] but rejects an empty name.
    pub fn parse(name: &str) -> Result<Self> {
        Self::new(name).checked("TypeHint::parse")
    }

    /// Reject a hint with an empty name, reporting `context`.
    pub fn checked(self, context: &'static str) -> Result<Self> {
        if self.name.is_empty() {
            return Err(Error::EmptyTypeName { context });
        }
        Ok(self)
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// True when the name already starts with the root marker `\`.
    pub fn is_root_qualified(&self) -> bool {
        self.name.starts_with('\\')
    }
}

impl From<&str> for TypeHint {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeHint {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
