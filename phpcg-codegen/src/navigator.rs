use std::fmt;

use phpcg_ir::{Class, Constant, Method, Property};
use tracing::debug;

use crate::{CaseInsensitiveName, Comparator, DefaultMethodOrder, DefaultPropertyOrder, Visitor};

/// Walks a [`Class`] and drives a [`Visitor`] in a deterministic order.
///
/// Each phase is sorted with its comparator, falling back to
/// [`CaseInsensitiveName`], [`DefaultPropertyOrder`] and
/// [`DefaultMethodOrder`]. Sorting is stable, so members the comparator
/// considers equal keep their insertion order.
#[derive(Default)]
pub struct Navigator {
    constant_order: Option<Box<dyn Comparator<str>>>,
    property_order: Option<Box<dyn Comparator<Property>>>,
    method_order: Option<Box<dyn Comparator<Method>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order constants by name.
    pub fn with_constant_order(mut self, order: impl Comparator<str> + 'static) -> Self {
        self.set_constant_order(Some(Box::new(order)));
        self
    }

    pub fn with_property_order(mut self, order: impl Comparator<Property> + 'static) -> Self {
        self.set_property_order(Some(Box::new(order)));
        self
    }

    pub fn with_method_order(mut self, order: impl Comparator<Method> + 'static) -> Self {
        self.set_method_order(Some(Box::new(order)));
        self
    }

    /// Override the constant order, or restore the default with `None`.
    pub fn set_constant_order(&mut self, order: Option<Box<dyn Comparator<str>>>) -> &mut Self {
        self.constant_order = order;
        self
    }

    pub fn set_property_order(
        &mut self,
        order: Option<Box<dyn Comparator<Property>>>,
    ) -> &mut Self {
        self.property_order = order;
        self
    }

    pub fn set_method_order(&mut self, order: Option<Box<dyn Comparator<Method>>>) -> &mut Self {
        self.method_order = order;
        self
    }

    /// Visit `class`. Phases with no members are skipped entirely, including
    /// their start and end hooks.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, class: &Class) {
        debug!(
            class = class.name(),
            constants = class.constants().len(),
            properties = class.properties().len(),
            methods = class.methods().len(),
            "navigating class"
        );

        visitor.start_visiting_class(class);

        let constants = self.sorted_constants(class);
        if !constants.is_empty() {
            visitor.start_visiting_constants();
            for constant in constants {
                visitor.visit_constant(constant);
            }
            visitor.end_visiting_constants();
        }

        let properties = self.sorted_properties(class);
        if !properties.is_empty() {
            visitor.start_visiting_properties();
            for property in properties {
                visitor.visit_property(property);
            }
            visitor.end_visiting_properties();
        }

        let methods = self.sorted_methods(class);
        if !methods.is_empty() {
            visitor.start_visiting_methods();
            for method in methods {
                visitor.visit_method(method);
            }
            visitor.end_visiting_methods();
        }

        visitor.end_visiting_class(class);
    }

    fn sorted_constants<'a>(&self, class: &'a Class) -> Vec<&'a Constant> {
        let order: &dyn Comparator<str> = match &self.constant_order {
            Some(order) => &**order,
            None => &CaseInsensitiveName,
        };
        let mut constants: Vec<_> = class.constants().values().collect();
        constants.sort_by(|a, b| order.compare(a.name(), b.name()));
        constants
    }

    fn sorted_properties<'a>(&self, class: &'a Class) -> Vec<&'a Property> {
        let order: &dyn Comparator<Property> = match &self.property_order {
            Some(order) => &**order,
            None => &DefaultPropertyOrder,
        };
        let mut properties: Vec<_> = class.properties().values().collect();
        properties.sort_by(|a, b| order.compare(a, b));
        properties
    }

    fn sorted_methods<'a>(&self, class: &'a Class) -> Vec<&'a Method> {
        let order: &dyn Comparator<Method> = match &self.method_order {
            Some(order) => &**order,
            None => &DefaultMethodOrder,
        };
        let mut methods: Vec<_> = class.methods().values().collect();
        methods.sort_by(|a, b| order.compare(a, b));
        methods
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("custom_constant_order", &self.constant_order.is_some())
            .field("custom_property_order", &self.property_order.is_some())
            .field("custom_method_order", &self.method_order.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use phpcg_ir::{Function, Member, Visibility};

    use super::*;

    /// Records every callback as a short event string.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn reset(&mut self) {
            self.events.clear();
        }

        fn start_visiting_class(&mut self, class: &Class) {
            self.events.push(format!("start_class {}", class.name()));
        }

        fn start_visiting_constants(&mut self) {
            self.events.push("start_constants".into());
        }

        fn visit_constant(&mut self, constant: &Constant) {
            self.events.push(format!("constant {}", constant.name()));
        }

        fn end_visiting_constants(&mut self) {
            self.events.push("end_constants".into());
        }

        fn start_visiting_properties(&mut self) {
            self.events.push("start_properties".into());
        }

        fn visit_property(&mut self, property: &Property) {
            self.events.push(format!("property {}", property.name()));
        }

        fn end_visiting_properties(&mut self) {
            self.events.push("end_properties".into());
        }

        fn start_visiting_methods(&mut self) {
            self.events.push("start_methods".into());
        }

        fn visit_method(&mut self, method: &Method) {
            self.events.push(format!("method {}", method.name()));
        }

        fn end_visiting_methods(&mut self) {
            self.events.push("end_methods".into());
        }

        fn end_visiting_class(&mut self, class: &Class) {
            self.events.push(format!("end_class {}", class.name()));
        }

        fn visit_function(&mut self, function: &Function) {
            self.events.push(format!("function {}", function.name()));
        }
    }

    fn record(navigator: &Navigator, class: &Class) -> Vec<String> {
        let mut recorder = Recorder::default();
        navigator.accept(&mut recorder, class);
        recorder.events
    }

    #[test]
    fn test_empty_class_skips_all_phases() {
        let events = record(&Navigator::new(), &Class::new("Foo"));
        assert_eq!(events, ["start_class Foo", "end_class Foo"]);
    }

    #[test]
    fn test_default_order() {
        let class = Class::new("Foo")
            .with_constant(("b", "bar"))
            .with_constant(("A", "foo"))
            .with_property(Property::new("x").with_visibility(Visibility::Private))
            .with_property(Property::new("a"))
            .with_property(Property::new("b"))
            .with_method(Method::new("create").with_static(true))
            .with_method(Method::new("run"));

        let events = record(&Navigator::new(), &class);
        assert_eq!(
            events,
            [
                "start_class Foo",
                "start_constants",
                "constant A",
                "constant b",
                "end_constants",
                "start_properties",
                "property b",
                "property a",
                "property x",
                "end_properties",
                "start_methods",
                "method run",
                "method create",
                "end_methods",
                "end_class Foo",
            ]
        );
    }

    #[test]
    fn test_only_methods() {
        let class = Class::new("Foo").with_method(Method::new("run"));
        let events = record(&Navigator::new(), &class);
        assert_eq!(
            events,
            [
                "start_class Foo",
                "start_methods",
                "method run",
                "end_methods",
                "end_class Foo",
            ]
        );
    }

    #[test]
    fn test_custom_orders() {
        let class = Class::new("Foo")
            .with_constant(("a", 1))
            .with_constant(("b", 2))
            .with_property(Property::new("a"))
            .with_property(Property::new("b"))
            .with_method(Method::new("a"))
            .with_method(Method::new("b"));

        let navigator = Navigator::new()
            .with_constant_order(|a: &str, b: &str| b.cmp(a))
            .with_property_order(|a: &Property, b: &Property| a.name().cmp(b.name()))
            .with_method_order(|a: &Method, b: &Method| b.name().cmp(a.name()));

        let events = record(&navigator, &class);
        assert_eq!(
            &events[1..events.len() - 1],
            [
                "start_constants",
                "constant b",
                "constant a",
                "end_constants",
                "start_properties",
                "property a",
                "property b",
                "end_properties",
                "start_methods",
                "method b",
                "method a",
                "end_methods",
            ]
        );
    }

    #[test]
    fn test_clearing_override_restores_default() {
        let class = Class::new("Foo")
            .with_property(Property::new("a"))
            .with_property(Property::new("b"));

        let mut navigator = Navigator::new()
            .with_property_order(|a: &Property, b: &Property| a.name().cmp(b.name()));
        navigator.set_property_order(None);

        let events = record(&navigator, &class);
        assert_eq!(events[2], "property b");
        assert_eq!(events[3], "property a");
    }

    #[test]
    fn test_sort_is_stable() {
        let class = Class::new("Foo")
            .with_property(Property::new("first"))
            .with_property(Property::new("second"))
            .with_property(Property::new("third"));

        let navigator = Navigator::new().with_property_order(|a: &Property, b: &Property| {
            a.visibility().as_str().cmp(b.visibility().as_str())
        });

        let events = record(&navigator, &class);
        assert_eq!(
            &events[2..5],
            ["property first", "property second", "property third"]
        );
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = Class::new("Foo")
            .with_constant(("A", 1))
            .with_constant(("B", 2))
            .with_constant(("a", 3))
            .with_property(Property::new("a"))
            .with_property(Property::new("b"))
            .with_property(Property::new("B").with_visibility(Visibility::Private))
            .with_method(Method::new("create").with_static(true))
            .with_method(Method::new("run"))
            .with_method(Method::new("Run").with_visibility(Visibility::Protected))
            .with_method(Method::new("build").with_static(true));
        let backward = Class::new("Foo")
            .with_method(Method::new("build").with_static(true))
            .with_method(Method::new("Run").with_visibility(Visibility::Protected))
            .with_method(Method::new("run"))
            .with_method(Method::new("create").with_static(true))
            .with_property(Property::new("B").with_visibility(Visibility::Private))
            .with_property(Property::new("b"))
            .with_property(Property::new("a"))
            .with_constant(("a", 3))
            .with_constant(("B", 2))
            .with_constant(("A", 1));

        let navigator = Navigator::new();
        let events = record(&navigator, &forward);
        assert_eq!(events, record(&navigator, &backward));
        assert_eq!(
            &events[1..events.len() - 1],
            [
                "start_constants",
                "constant A",
                "constant a",
                "constant B",
                "end_constants",
                "start_properties",
                "property b",
                "property a",
                "property B",
                "end_properties",
                "start_methods",
                "method run",
                "method Run",
                "method create",
                "method build",
                "end_methods",
            ]
        );
    }
}
