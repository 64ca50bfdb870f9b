use phpcg_core::Literal;

use crate::{Member, Visibility};

/// A class property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Property {
    name: String,
    visibility: Visibility,
    is_static: bool,
    docblock: Option<String>,
    default_value: Option<Literal>,
}

impl Property {
    /// Create a public, non-static property without a default value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_docblock(mut self, docblock: impl Into<String>) -> Self {
        self.docblock = Some(docblock.into());
        self
    }

    /// Set a default value. `Literal::Null` is a default, not its absence.
    pub fn with_default_value(mut self, value: impl Into<Literal>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn set_default_value(&mut self, value: impl Into<Literal>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn unset_default_value(&mut self) -> &mut Self {
        self.default_value = None;
        self
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn default_value(&self) -> Option<&Literal> {
        self.default_value.as_ref()
    }
}

impl Member for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn docblock(&self) -> Option<&str> {
        self.docblock.as_deref()
    }
}
