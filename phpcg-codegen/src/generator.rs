use phpcg_core::RenderConfig;
use phpcg_ir::{Class, Function, Method, Property};
use tracing::debug;

use crate::{Comparator, DefaultVisitor, Navigator, Visitor};

/// Turns a class model into source text.
pub trait GeneratorStrategy {
    fn generate(&mut self, class: &Class) -> String;
}

/// [`Navigator`] plus [`DefaultVisitor`], reset before every run.
///
/// # Example
///
/// ```
/// use phpcg_codegen::{DefaultGeneratorStrategy, GeneratorStrategy};
/// use phpcg_ir::{Class, Method};
///
/// let class = Class::new("Greeter").with_method(Method::new("hello").with_body("return 'hi';"));
/// let php = DefaultGeneratorStrategy::new().generate(&class);
///
/// assert_eq!(
///     php,
///     "class Greeter\n{\n    public function hello()\n    {\n        return 'hi';\n    }\n}"
/// );
/// ```
#[derive(Debug, Default)]
pub struct DefaultGeneratorStrategy {
    navigator: Navigator,
    visitor: DefaultVisitor,
}

impl DefaultGeneratorStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            navigator: Navigator::new(),
            visitor: DefaultVisitor::with_config(config),
        }
    }

    pub fn with_navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn set_constant_order(&mut self, order: impl Comparator<str> + 'static) -> &mut Self {
        self.navigator.set_constant_order(Some(Box::new(order)));
        self
    }

    pub fn set_property_order(&mut self, order: impl Comparator<Property> + 'static) -> &mut Self {
        self.navigator.set_property_order(Some(Box::new(order)));
        self
    }

    pub fn set_method_order(&mut self, order: impl Comparator<Method> + 'static) -> &mut Self {
        self.navigator.set_method_order(Some(Box::new(order)));
        self
    }

    /// Drop all custom orders.
    pub fn reset_orders(&mut self) -> &mut Self {
        self.navigator
            .set_constant_order(None)
            .set_property_order(None)
            .set_method_order(None);
        self
    }

    pub fn generate_function(&mut self, function: &Function) -> String {
        debug!(function = %function.qualified_name(), "generating function");
        self.visitor.reset();
        self.visitor.visit_function(function);
        self.visitor.content().to_string()
    }
}

impl GeneratorStrategy for DefaultGeneratorStrategy {
    fn generate(&mut self, class: &Class) -> String {
        debug!(class = class.name(), "generating class");
        self.visitor.reset();
        self.navigator.accept(&mut self.visitor, class);
        self.visitor.content().to_string()
    }
}
