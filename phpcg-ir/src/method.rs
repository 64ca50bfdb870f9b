use phpcg_core::Result;

use crate::{Member, Parameter, ParameterList, TypeHint, Visibility};

/// A class method.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Method {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
    reference_returned: bool,
    docblock: Option<String>,
    parameters: ParameterList,
    return_type: Option<TypeHint>,
    body: String,
}

impl Method {
    /// Create a public, non-static, concrete method with an empty body.
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

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
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

    /// Raw, already formatted statement text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// An empty name leaves the return type undeclared;
    /// [`Method::set_return_type`] reports it instead.
    pub fn with_return_type(mut self, ty: impl Into<TypeHint>) -> Self {
        self.return_type = ty.into().checked("Method::with_return_type").ok();
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

    pub fn set_return_type(&mut self, ty: impl Into<TypeHint>) -> Result<&mut Self> {
        self.return_type = Some(ty.into().checked("Method::set_return_type")?);
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

    /// Replace the parameter at `position` (`position == len` appends).
    pub fn replace_parameter(&mut self, position: usize, parameter: Parameter) -> Result<&mut Self> {
        self.parameters.replace(position, parameter)?;
        Ok(self)
    }

    pub fn remove_parameter(&mut self, position: usize) -> Result<&mut Self> {
        self.parameters.remove(position)?;
        Ok(self)
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = body.into();
        self
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_reference_returned(&self) -> bool {
        self.reference_returned
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_slice()
    }

    pub fn return_type(&self) -> Option<&TypeHint> {
        self.return_type.as_ref()
    }

    pub fn has_return_type(&self) -> bool {
        self.return_type.is_some()
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Member for Method {
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
