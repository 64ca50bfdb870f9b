use phpcg_core::Result;

use crate::{Parameter, ParameterList, TypeHint};

/// A free (namespace-level) function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    name: String,
    namespace: Option<String>,
    parameters: ParameterList,
    body: String,
    reference_returned: bool,
    docblock: Option<String>,
    return_type: Option<TypeHint>,
}

impl Function {
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

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Split `Foo\Bar\baz` into namespace `Foo\Bar` and name `baz`.
    pub fn with_qualified_name(mut self, name: &str) -> Self {
        self.set_qualified_name(name);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.set(parameters);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_reference_returned(mut self, by_ref: bool) -> Self {
        self.reference_returned = by_ref;
        self
    }

    pub fn with_docblock(mut self, docblock: impl Into<String>) -> Self {
        self.docblock = Some(docblock.into());
        self
    }

    /// An empty name leaves the return type undeclared;
    /// [`Function::set_return_type`] reports it instead.
    pub fn with_return_type(mut self, ty: impl Into<TypeHint>) -> Self {
        self.return_type = ty.into().checked("Function::with_return_type").ok();
        self
    }

    pub fn set_qualified_name(&mut self, name: &str) -> &mut Self {
        match name.rsplit_once('\\') {
            Some((namespace, short)) => {
                self.namespace = Some(namespace.to_string());
                self.name = short.to_string();
            }
            None => {
                self.namespace = None;
                self.name = name.to_string();
            }
        }
        self
    }

    pub fn set_return_type(&mut self, ty: impl Into<TypeHint>) -> Result<&mut Self> {
        self.return_type = Some(ty.into().checked("Function::set_return_type")?);
        Ok(self)
    }

    pub fn unset_return_type(&mut self) -> &mut Self {
        self.return_type = None;
        self
    }

    pub fn add_parameter(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn set_parameters(&mut self, parameters: impl IntoIterator<Item = Parameter>) -> &mut Self {
        self.parameters.set(parameters);
        self
    }

    pub fn replace_parameter(&mut self, position: usize, parameter: Parameter) -> Result<&mut Self> {
        self.parameters.replace(position, parameter)?;
        Ok(self)
    }

    pub fn remove_parameter(&mut self, position: usize) -> Result<&mut Self> {
        self.parameters.remove(position)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) if !namespace.is_empty() => format!("{namespace}\\{}", self.name),
            _ => self.name.clone(),
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_slice()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_reference_returned(&self) -> bool {
        self.reference_returned
    }

    pub fn docblock(&self) -> Option<&str> {
        self.docblock.as_deref()
    }

    pub fn return_type(&self) -> Option<&TypeHint> {
        self.return_type.as_ref()
    }

    pub fn has_return_type(&self) -> bool {
        self.return_type.is_some()
    }
}
