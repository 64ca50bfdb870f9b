use phpcg_core::Literal;

/// A class constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    name: String,
    value: Literal,
}

impl Constant {
    /// Create a constant whose value is `NULL`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Literal::Null,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<Literal>) -> Self {
        self.value = value.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }
}

/// `(name, value)` pairs are the shorthand for building a constant.
impl<N: Into<String>, V: Into<Literal>> From<(N, V)> for Constant {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name).with_value(value)
    }
}
