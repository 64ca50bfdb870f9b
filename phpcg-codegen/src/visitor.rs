use phpcg_ir::{Class, Constant, Function, Method, Property};

/// Callbacks driven by the [`Navigator`](crate::Navigator).
///
/// For a class the navigator calls, in order: `start_visiting_class`, then
/// for each non-empty phase (constants, properties, methods) the phase's
/// `start_*`, one `visit_*` per member, and `end_*`, then
/// `end_visiting_class`. Phase hooks default to doing nothing.
///
/// Implementations hold per-run state, so one instance must not be shared
/// between concurrent generations. Call [`reset`](Visitor::reset) before
/// reusing an instance.
pub trait Visitor {
    fn reset(&mut self);

    fn start_visiting_class(&mut self, class: &Class);

    fn start_visiting_constants(&mut self) {}

    fn visit_constant(&mut self, constant: &Constant);

    fn end_visiting_constants(&mut self) {}

    fn start_visiting_properties(&mut self) {}

    fn visit_property(&mut self, property: &Property);

    fn end_visiting_properties(&mut self) {}

    fn start_visiting_methods(&mut self) {}

    fn visit_method(&mut self, method: &Method);

    fn end_visiting_methods(&mut self) {}

    fn end_visiting_class(&mut self, class: &Class);

    fn visit_function(&mut self, function: &Function);
}
