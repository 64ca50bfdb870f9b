use phpcg_core::{Error, Literal, Result};

use crate::TypeHint;

/// A parameter of a method or function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameter {
    name: String,
    ty: Option<TypeHint>,
    passed_by_reference: bool,
    default_value: Option<Literal>,
}

impl Parameter {
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

    /// Declare the parameter type. Plain strings become non-nullable hints.
    /// An empty name leaves the parameter untyped; [`Parameter::set_type`]
    /// reports it instead.
    pub fn with_type(mut self, ty: impl Into<TypeHint>) -> Self {
        self.ty = ty.into().checked("Parameter::with_type").ok();
        self
    }

    /// Mark the declared type as nullable. No effect without a type.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.ty = self.ty.map(|ty| ty.with_nullable(nullable));
        self
    }

    pub fn with_passed_by_reference(mut self, by_ref: bool) -> Self {
        self.passed_by_reference = by_ref;
        self
    }

    /// Set a default value. `Literal::Null` is a default, not its absence.
    pub fn with_default_value(mut self, value: impl Into<Literal>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn set_type(&mut self, ty: impl Into<TypeHint>) -> Result<&mut Self> {
        self.ty = Some(ty.into().checked("Parameter::set_type")?);
        Ok(self)
    }

    pub fn unset_type(&mut self) -> &mut Self {
        self.ty = None;
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&TypeHint> {
        self.ty.as_ref()
    }

    pub fn has_type(&self) -> bool {
        self.ty.is_some()
    }

    pub fn is_passed_by_reference(&self) -> bool {
        self.passed_by_reference
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn default_value(&self) -> Option<&Literal> {
        self.default_value.as_ref()
    }
}

/// Ordered parameter list with positional editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
    pub fn as_slice(&self) -> &[Parameter] {
        &self.0
    }

    pub fn push(&mut self, parameter: Parameter) {
        self.0.push(parameter);
    }

    pub fn set(&mut self, parameters: impl IntoIterator<Item = Parameter>) {
        self.0 = parameters.into_iter().collect();
    }

    /// Replace the parameter at `position`. A position equal to the length
    /// appends.
    pub fn replace(&mut self, position: usize, parameter: Parameter) -> Result<()> {
        let len = self.0.len();
        match position.cmp(&len) {
            std::cmp::Ordering::Less => self.0[position] = parameter,
            std::cmp::Ordering::Equal => self.0.push(parameter),
            std::cmp::Ordering::Greater => {
                return Err(Error::ParameterOutOfRange { position, len });
            }
        }
        Ok(())
    }

    /// Remove the parameter at `position`; later parameters shift down.
    pub fn remove(&mut self, position: usize) -> Result<Parameter> {
        let len = self.0.len();
        if position >= len {
            return Err(Error::ParameterOutOfRange { position, len });
        }
        Ok(self.0.remove(position))
    }
}
