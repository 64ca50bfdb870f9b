//! The stock PHP renderer.

use phpcg_core::{Literal, RenderConfig, export};
use phpcg_ir::{
    Class, Constant, Function, Member, Method, Parameter, Property, RequiredFile, TypeHint,
    is_imported,
};
use tracing::trace;

use crate::{Visitor, Writer};

/// Renders classes and functions as PSR-style PHP source.
///
/// Type names are written with a leading `\` unless they are built-in,
/// already root-qualified, or resolve through one of the current class's
/// imports.
#[derive(Debug, Clone)]
pub struct DefaultVisitor {
    writer: Writer,
    config: RenderConfig,
    /// Import aliases of the class being rendered.
    imports: Vec<String>,
}

impl DefaultVisitor {
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            writer: Writer::new(config.indent),
            config,
            imports: Vec::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Source text produced since the last reset.
    pub fn content(&self) -> &str {
        self.writer.content()
    }

    fn needs_root_marker(&self, name: &str, builtin: bool) -> bool {
        let imported = is_imported(name, |alias| self.imports.iter().any(|a| a == alias));
        !(builtin || name.starts_with('\\') || imported)
    }

    fn qualified(&self, name: &str) -> String {
        if self.needs_root_marker(name, false) {
            format!("\\{name}")
        } else {
            name.to_string()
        }
    }

    fn write_docblock(&mut self, docblock: Option<&str>) {
        if let Some(docblock) = docblock {
            self.writer.writeln(docblock).rtrim();
        }
    }

    /// Type name with its root marker, preceded by `?` when `nullable_marker`.
    fn write_type(&mut self, ty: &TypeHint, nullable_marker: bool) {
        if nullable_marker {
            self.writer.write("?");
        }
        if self.needs_root_marker(ty.name(), ty.is_builtin()) {
            self.writer.write("\\");
        }
        self.writer.write(ty.name());
    }

    fn write_return_type(&mut self, ty: Option<&TypeHint>, nullable_marker: bool) {
        if let Some(ty) = ty {
            self.writer.write(": ");
            self.write_type(ty, nullable_marker && ty.is_nullable());
        }
    }

    fn write_parameters(&mut self, parameters: &[Parameter]) {
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.writer.write(", ");
            }
            if let Some(ty) = parameter.ty() {
                self.write_type(ty, ty.is_nullable());
                self.writer.write(" ");
            }
            if parameter.is_passed_by_reference() {
                self.writer.write("&");
            }
            self.writer.write(&format!("${}", parameter.name()));
            if let Some(value) = parameter.default_value() {
                self.writer.write(&format!(" = {}", export(value)));
            }
        }
    }

    fn write_body(&mut self, body: &str) {
        self.writer
            .indent()
            .writeln(body)
            .outdent()
            .rtrim();
    }
}

impl Default for DefaultVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for DefaultVisitor {
    fn reset(&mut self) {
        self.writer.reset();
        self.imports.clear();
    }

    fn start_visiting_class(&mut self, class: &Class) {
        trace!(class = class.name(), "rendering class header");
        self.imports = class.use_statements().keys().cloned().collect();

        if let Some(namespace) = class.namespace().filter(|ns| !ns.is_empty()) {
            self.writer.write(&format!("namespace {namespace};\n\n"));
        }

        if !class.required_files().is_empty() {
            for file in class.required_files() {
                let line = match file {
                    RequiredFile::Relative(path) => format!(
                        "require_once __DIR__ . {};",
                        export(&Literal::from(format!("/{path}")))
                    ),
                    RequiredFile::Path(path) => {
                        format!("require_once {};", export(&Literal::from(path.as_str())))
                    }
                };
                self.writer.writeln(&line);
            }
            self.writer.write("\n");
        }

        if class.has_use_statements() {
            for (alias, namespace) in class.use_statements() {
                self.writer.write(&format!("use {namespace}"));
                let last = namespace.rsplit_once('\\').map_or(namespace.as_str(), |(_, l)| l);
                if last != alias.as_str() {
                    self.writer.write(&format!(" as {alias}"));
                }
                self.writer.write(";\n");
            }
            self.writer.write("\n");
        }

        if let Some(docblock) = class.docblock() {
            self.writer.writeln(docblock);
        }
        if class.is_abstract() {
            self.writer.write("abstract ");
        }
        if class.is_final() {
            self.writer.write("final ");
        }
        self.writer.write(&format!("class {}", class.short_name()));

        if let Some(parent) = class.parent_class_name() {
            let parent = self.qualified(parent);
            self.writer.write(&format!(" extends {parent}"));
        }

        let mut interfaces: Vec<String> = Vec::new();
        for name in class.interface_names() {
            let name = self.qualified(name);
            if !interfaces.contains(&name) {
                interfaces.push(name);
            }
        }
        if !interfaces.is_empty() {
            self.writer
                .write(&format!(" implements {}", interfaces.join(", ")));
        }

        self.writer.write("\n{\n").indent();
    }

    fn visit_constant(&mut self, constant: &Constant) {
        self.writer.writeln(&format!(
            "const {} = {};",
            constant.name(),
            export(constant.value())
        ));
    }

    fn end_visiting_constants(&mut self) {
        self.writer.write("\n");
    }

    fn visit_property(&mut self, property: &Property) {
        self.write_docblock(property.docblock());

        self.writer.write(property.visibility().as_str()).write(" ");
        if property.is_static() {
            self.writer.write("static ");
        }
        self.writer.write(&format!("${}", property.name()));
        if let Some(value) = property.default_value() {
            self.writer.write(&format!(" = {}", export(value)));
        }
        self.writer.writeln(";");
    }

    fn end_visiting_properties(&mut self) {
        self.writer.write("\n");
    }

    fn visit_method(&mut self, method: &Method) {
        self.write_docblock(method.docblock());

        if method.is_abstract() {
            self.writer.write("abstract ");
        }
        self.writer.write(method.visibility().as_str()).write(" ");
        if method.is_static() {
            self.writer.write("static ");
        }
        self.writer.write("function ");
        if method.is_reference_returned() {
            self.writer.write("& ");
        }

        self.writer.write(&format!("{}(", method.name()));
        self.write_parameters(method.parameters());
        self.writer.write(")");
        self.write_return_type(method.return_type(), self.config.nullable_types);

        if method.is_abstract() {
            self.writer.write(";\n\n");
            return;
        }

        self.writer.writeln("\n{");
        self.write_body(method.body());
        self.writer.write("}\n\n");
    }

    fn end_visiting_class(&mut self, class: &Class) {
        trace!(class = class.name(), "closing class");
        self.writer.outdent().rtrim().write("}");
        self.imports.clear();
    }

    fn visit_function(&mut self, function: &Function) {
        if let Some(namespace) = function.namespace().filter(|ns| !ns.is_empty()) {
            self.writer.write(&format!("namespace {namespace};\n\n"));
        }

        self.write_docblock(function.docblock());

        self.writer.write("function ");
        if function.is_reference_returned() {
            self.writer.write("& ");
        }
        self.writer.write(&format!("{}(", function.name()));
        self.write_parameters(function.parameters());
        self.writer.write(")");
        // Free functions never carry a nullable marker.
        self.write_return_type(function.return_type(), false);

        self.writer.write("\n{\n");
        self.write_body(function.body());
        self.writer.write("}");
    }
}

#[cfg(test)]
mod tests {
    use phpcg_ir::Visibility;

    use super::*;

    fn render_class_header(class: &Class) -> String {
        let mut visitor = DefaultVisitor::new();
        visitor.start_visiting_class(class);
        visitor.end_visiting_class(class);
        visitor.content().to_string()
    }

    fn render_method(method: &Method) -> String {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_method(method);
        visitor.content().to_string()
    }

    fn render_function(function: &Function) -> String {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_function(function);
        visitor.content().to_string()
    }

    #[test]
    fn test_class_header_variants() {
        let cases = [
            (
                Class::new("Foo").with_interface_name("ArrayAccess"),
                "class Foo implements \\ArrayAccess\n{\n}",
            ),
            (
                Class::new("Foo").with_abstract(true),
                "abstract class Foo\n{\n}",
            ),
            (Class::new("Foo").with_final(true), "final class Foo\n{\n}"),
            (
                Class::new("Foo").with_use_statement("Foo\\Bar"),
                "use Foo\\Bar;\n\nclass Foo\n{\n}",
            ),
            (
                Class::new("Foo").with_use_statement_as("Foo\\Bar", "Bar"),
                "use Foo\\Bar;\n\nclass Foo\n{\n}",
            ),
            (
                Class::new("Foo").with_use_statement_as("Foo\\Bar", "Baz"),
                "use Foo\\Bar as Baz;\n\nclass Foo\n{\n}",
            ),
            (
                Class::new("Foo").with_required_file("foo.inc.php"),
                "require_once 'foo.inc.php';\n\nclass Foo\n{\n}",
            ),
            (
                Class::new("Foo").with_required_file(RequiredFile::Relative("bar.inc.php".into())),
                "require_once __DIR__ . '/bar.inc.php';\n\nclass Foo\n{\n}",
            ),
        ];

        for (class, expected) in cases {
            assert_eq!(render_class_header(&class), expected);
        }
    }

    #[test]
    fn test_class_namespace_and_parent() {
        let class = Class::new("App\\Model\\User")
            .with_parent_class_name("App\\Model\\Base")
            .with_docblock("/**\n * User.\n */");
        assert_eq!(
            render_class_header(&class),
            "namespace App\\Model;\n\n/**\n * User.\n */\nclass User extends \\App\\Model\\Base\n{\n}"
        );
    }

    #[test]
    fn test_imported_names_stay_unqualified() {
        let class = Class::new("Foo")
            .with_use_statement("Doctrine\\ORM\\EntityRepository")
            .with_use_statement_as("Psr\\Log", "Log")
            .with_parent_class_name("EntityRepository")
            .with_interface_name("Log\\LoggerAwareInterface")
            .with_interface_name("\\Countable")
            .with_interface_name("Countable");
        assert_eq!(
            render_class_header(&class),
            "use Doctrine\\ORM\\EntityRepository;\nuse Psr\\Log;\n\nclass Foo extends EntityRepository implements Log\\LoggerAwareInterface, \\Countable\n{\n}"
        );
    }

    #[test]
    fn test_qualification_agrees_with_class_uses() {
        let class = Class::new("Foo")
            .with_use_statement("Foo\\Bar")
            .with_use_statement_as("Psr\\Log", "Log");

        for name in ["Bar", "Bar\\Baz", "Baz", "Log\\Logger", "Other\\Log", "Foo\\Bar"] {
            let mut visitor = DefaultVisitor::new();
            visitor.start_visiting_class(&class);
            visitor.visit_method(
                &Method::new("f").with_parameter(Parameter::new("a").with_type(name)),
            );

            let qualified = visitor.content().contains(&format!("(\\{name} $a)"));
            assert_eq!(qualified, !class.uses(name).unwrap(), "type {name}");
        }
    }

    #[test]
    fn test_constant() {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_constant(&Constant::from(("FOO", "bar")));
        visitor.visit_constant(&Constant::from(("ZERO", 0)));
        visitor.end_visiting_constants();
        assert_eq!(
            visitor.content(),
            "const FOO = 'bar';\nconst ZERO = 0;\n\n"
        );
    }

    #[test]
    fn test_property() {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_property(
            &Property::new("items")
                .with_visibility(Visibility::Protected)
                .with_static(true)
                .with_docblock("/** @var array */")
                .with_default_value(Literal::empty_array()),
        );
        visitor.visit_property(&Property::new("name").with_visibility(Visibility::Private));
        assert_eq!(
            visitor.content(),
            "/** @var array */\nprotected static $items = [];\nprivate $name;\n"
        );
    }

    #[test]
    fn test_property_default_null_is_rendered() {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_property(&Property::new("a").with_default_value(Literal::Null));
        assert_eq!(visitor.content(), "public $a = NULL;\n");
    }

    #[test]
    fn test_abstract_method() {
        let method = Method::new("foo")
            .with_abstract(true)
            .with_visibility(Visibility::Protected)
            .with_body("return 1;");
        assert_eq!(render_method(&method), "abstract protected function foo();\n\n");
    }

    #[test]
    fn test_concrete_method() {
        let method = Method::new("getId")
            .with_docblock("/**\n * @return int\n */\n")
            .with_return_type("int")
            .with_body("return $this->id;");
        assert_eq!(
            render_method(&method),
            "/**\n * @return int\n */\npublic function getId(): int\n{\n    return $this->id;\n}\n\n"
        );
    }

    #[test]
    fn test_final_method_flag_is_not_rendered() {
        let method = Method::new("foo").with_final(true);
        assert_eq!(render_method(&method), "public function foo()\n{\n}\n\n");
    }

    #[test]
    fn test_method_reference_and_static() {
        let method = Method::new("instance")
            .with_static(true)
            .with_reference_returned(true);
        assert_eq!(
            render_method(&method),
            "public static function & instance()\n{\n}\n\n"
        );
    }

    #[test]
    fn test_parameters() {
        let method = Method::new("foo").with_parameters([
            Parameter::new("a").with_type("array").with_default_value(Literal::empty_array()),
            Parameter::new("b").with_type("Foo\\Bar").with_passed_by_reference(true),
            Parameter::new("c").with_type(TypeHint::nullable("int")).with_default_value(Literal::Null),
            Parameter::new("d").with_default_value("x"),
        ]);
        assert_eq!(
            render_method(&method),
            "public function foo(array $a = [], \\Foo\\Bar &$b, ?int $c = NULL, $d = 'x')\n{\n}\n\n"
        );
    }

    #[test]
    fn test_return_type_nullable_marker_follows_config() {
        let method = Method::new("foo")
            .with_parameter(Parameter::new("a").with_type(TypeHint::nullable("string")))
            .with_return_type(TypeHint::nullable("Foo"));

        assert_eq!(
            render_method(&method),
            "public function foo(?string $a): ?\\Foo\n{\n}\n\n"
        );

        let mut visitor = DefaultVisitor::with_config(RenderConfig::legacy());
        visitor.visit_method(&method);
        assert_eq!(
            visitor.content(),
            "public function foo(?string $a): \\Foo\n{\n}\n\n"
        );
    }

    #[test]
    fn test_function_return_type_has_no_nullable_marker() {
        let function = Function::new("find")
            .with_parameter(Parameter::new("id").with_type(TypeHint::nullable("int")))
            .with_return_type(TypeHint::nullable("Foo"));
        assert_eq!(
            render_function(&function),
            "function find(?int $id): \\Foo\n{\n}"
        );
    }

    #[test]
    fn test_function_return_types() {
        let cases = [("bool", ": bool"), ("\\Foo", ": \\Foo"), ("Foo", ": \\Foo")];
        for (ty, expected) in cases {
            let function = Function::new("foo").with_return_type(ty);
            assert_eq!(
                render_function(&function),
                format!("function foo(){expected}\n{{\n}}")
            );
        }
    }

    #[test]
    fn test_function_with_namespace_and_body() {
        let function = Function::new("foo")
            .with_namespace("Foo\\Bar")
            .with_reference_returned(true)
            .with_parameter(Parameter::new("a"))
            .with_body("return $a;");
        assert_eq!(
            render_function(&function),
            "namespace Foo\\Bar;\n\nfunction & foo($a)\n{\n    return $a;\n}"
        );
    }

    #[test]
    fn test_reset_clears_content() {
        let mut visitor = DefaultVisitor::new();
        visitor.visit_constant(&Constant::from(("A", 1)));
        visitor.reset();
        assert_eq!(visitor.content(), "");
    }
}
