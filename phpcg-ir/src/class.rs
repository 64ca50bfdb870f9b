//! The class model.

use indexmap::IndexMap;
use phpcg_core::{Error, Literal, Result};

use crate::{Constant, Member, Method, Property};

/// A file pulled in with `require_once` before the class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredFile {
    /// Literal path, emitted as given.
    Path(String),
    /// Path relative to the directory of the generated file.
    Relative(String),
}

impl From<&str> for RequiredFile {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for RequiredFile {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// A PHP class.
///
/// Constants, properties and methods are keyed by name; inserting a member
/// whose name already exists replaces it in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Class {
    name: String,
    parent_class_name: Option<String>,
    interface_names: Vec<String>,
    use_statements: IndexMap<String, String>,
    constants: IndexMap<String, Constant>,
    properties: IndexMap<String, Property>,
    required_files: Vec<RequiredFile>,
    methods: IndexMap<String, Method>,
    is_abstract: bool,
    is_final: bool,
    docblock: Option<String>,
}

impl Class {
    /// Create a class from its fully qualified name (`Foo\Bar\Baz`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn with_parent_class_name(mut self, name: impl Into<String>) -> Self {
        self.parent_class_name = Some(name.into());
        self
    }

    pub fn with_interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_names.push(name.into());
        self
    }

    /// Import `namespace`; the alias defaults to its last segment.
    pub fn with_use_statement(mut self, namespace: impl Into<String>) -> Self {
        self.add_use_statement(namespace, None::<String>);
        self
    }

    pub fn with_use_statement_as(
        mut self,
        namespace: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.add_use_statement(namespace, Some(alias));
        self
    }

    pub fn with_constant(mut self, constant: impl Into<Constant>) -> Self {
        self.set_constant(constant);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.set_property(property);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.set_method(method);
        self
    }

    pub fn with_required_file(mut self, file: impl Into<RequiredFile>) -> Self {
        self.required_files.push(file.into());
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn with_docblock(mut self, docblock: impl Into<String>) -> Self {
        self.docblock = Some(docblock.into());
        self
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_parent_class_name(&mut self, name: Option<impl Into<String>>) -> &mut Self {
        self.parent_class_name = name.map(Into::into);
        self
    }

    pub fn set_interface_names(
        &mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.interface_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_interface_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.interface_names.push(name.into());
        self
    }

    /// Import `namespace` under `alias`, or under its last segment when no
    /// alias is given. An existing alias is rebound.
    pub fn add_use_statement(
        &mut self,
        namespace: impl Into<String>,
        alias: Option<impl Into<String>>,
    ) -> &mut Self {
        let namespace = namespace.into();
        let alias = match alias {
            Some(alias) => alias.into(),
            None => last_segment(&namespace).to_string(),
        };
        self.use_statements.insert(alias, namespace);
        self
    }

    /// Add several imports at once. Entries without an alias use the
    /// namespace's last segment.
    pub fn set_use_statements<N, A>(
        &mut self,
        statements: impl IntoIterator<Item = (Option<A>, N)>,
    ) -> &mut Self
    where
        N: Into<String>,
        A: Into<String>,
    {
        for (alias, namespace) in statements {
            self.add_use_statement(namespace, alias);
        }
        self
    }

    /// Insert a constant, from a built [`Constant`] or a `(name, value)` pair.
    pub fn set_constant(&mut self, constant: impl Into<Constant>) -> &mut Self {
        let constant = constant.into();
        self.constants.insert(constant.name().to_string(), constant);
        self
    }

    /// Replace all constants.
    pub fn set_constants<C: Into<Constant>>(
        &mut self,
        constants: impl IntoIterator<Item = C>,
    ) -> &mut Self {
        self.constants.clear();
        for constant in constants {
            self.set_constant(constant);
        }
        self
    }

    pub fn remove_constant(&mut self, name: &str) -> Result<&mut Self> {
        self.constants
            .shift_remove(name)
            .ok_or_else(|| Error::unknown_constant(name))?;
        Ok(self)
    }

    pub fn set_property(&mut self, property: Property) -> &mut Self {
        self.properties
            .insert(property.name().to_string(), property);
        self
    }

    /// Replace all properties.
    pub fn set_properties(&mut self, properties: impl IntoIterator<Item = Property>) -> &mut Self {
        self.properties.clear();
        for property in properties {
            self.set_property(property);
        }
        self
    }

    pub fn remove_property(&mut self, name: &str) -> Result<&mut Self> {
        self.properties
            .shift_remove(name)
            .ok_or_else(|| Error::unknown_property(name))?;
        Ok(self)
    }

    pub fn set_method(&mut self, method: Method) -> &mut Self {
        self.methods.insert(method.name().to_string(), method);
        self
    }

    /// Replace all methods.
    pub fn set_methods(&mut self, methods: impl IntoIterator<Item = Method>) -> &mut Self {
        self.methods.clear();
        for method in methods {
            self.set_method(method);
        }
        self
    }

    pub fn remove_method(&mut self, name: &str) -> Result<&mut Self> {
        self.methods
            .shift_remove(name)
            .ok_or_else(|| Error::unknown_method(name))?;
        Ok(self)
    }

    pub fn add_required_file(&mut self, file: impl Into<RequiredFile>) -> &mut Self {
        self.required_files.push(file.into());
        self
    }

    pub fn set_required_files(
        &mut self,
        files: impl IntoIterator<Item = impl Into<RequiredFile>>,
    ) -> &mut Self {
        self.required_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_abstract(&mut self, is_abstract: bool) -> &mut Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn set_final(&mut self, is_final: bool) -> &mut Self {
        self.is_final = is_final;
        self
    }

    pub fn set_docblock(&mut self, docblock: Option<impl Into<String>>) -> &mut Self {
        self.docblock = docblock.map(Into::into);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything before the last `\`, or `None` for a global class.
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('\\').map(|(namespace, _)| namespace)
    }

    pub fn short_name(&self) -> &str {
        last_segment(&self.name)
    }

    pub fn parent_class_name(&self) -> Option<&str> {
        self.parent_class_name.as_deref()
    }

    pub fn interface_names(&self) -> &[String] {
        &self.interface_names
    }

    /// Alias to namespace, in declaration order.
    pub fn use_statements(&self) -> &IndexMap<String, String> {
        &self.use_statements
    }

    pub fn has_use_statements(&self) -> bool {
        !self.use_statements.is_empty()
    }

    pub fn constants(&self) -> &IndexMap<String, Constant> {
        &self.constants
    }

    /// Constant values by name, in insertion order.
    pub fn constant_values(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.constants
            .iter()
            .map(|(name, constant)| (name.as_str(), constant.value()))
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn get_constant(&self, name: &str) -> Result<&Constant> {
        self.constants
            .get(name)
            .ok_or_else(|| Error::unknown_constant(name))
    }

    pub fn properties(&self) -> &IndexMap<String, Property> {
        &self.properties
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn get_property(&self, name: &str) -> Result<&Property> {
        self.properties
            .get(name)
            .ok_or_else(|| Error::unknown_property(name))
    }

    pub fn methods(&self) -> &IndexMap<String, Method> {
        &self.methods
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn get_method(&self, name: &str) -> Result<&Method> {
        self.methods
            .get(name)
            .ok_or_else(|| Error::unknown_method(name))
    }

    pub fn required_files(&self) -> &[RequiredFile] {
        &self.required_files
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn docblock(&self) -> Option<&str> {
        self.docblock.as_deref()
    }

    /// Whether `type_name` resolves through one of this class's imports.
    ///
    /// Root-qualified names (`\Foo`) never do. Otherwise the first segment of
    /// the name is looked up among the import aliases.
    pub fn uses(&self, type_name: &str) -> Result<bool> {
        if type_name.is_empty() {
            return Err(Error::EmptyTypeName {
                context: "Class::uses",
            });
        }
        Ok(is_imported(type_name, |alias| {
            self.use_statements.contains_key(alias)
        }))
    }
}

/// Whether `type_name` resolves through an import, given a lookup over the
/// declared aliases.
///
/// Root-qualified names (`\Foo`) never resolve. Otherwise only the first
/// `\`-separated segment is looked up, so `Bar\Baz` resolves through `Bar`.
pub fn is_imported(type_name: &str, is_alias: impl Fn(&str) -> bool) -> bool {
    if type_name.is_empty() || type_name.starts_with('\\') {
        return false;
    }
    let head = type_name.split('\\').next().unwrap_or(type_name);
    is_alias(head)
}

fn last_segment(name: &str) -> &str {
    name.rsplit_once('\\').map_or(name, |(_, last)| last)
}
