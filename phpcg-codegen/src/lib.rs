//! Deterministic PHP source rendering.
//!
//! A [`Navigator`] walks a [`Class`](phpcg_ir::Class) and feeds its members,
//! sorted by pluggable [`Comparator`]s, to a [`Visitor`]. The
//! [`DefaultVisitor`] renders them through a [`Writer`].
//! [`DefaultGeneratorStrategy`] wires the two together.
//!
//! # Module Organization
//!
//! - [`writer`] - Indentation-aware text buffer
//! - [`order`] - Comparator trait and the default member orders
//! - [`visitor`] / [`default_visitor`] - Rendering callbacks and the stock renderer
//! - [`navigator`] - Traversal in a stable order
//! - [`generator`] - One-call class and function generation

pub mod default_visitor;
pub mod generator;
pub mod navigator;
pub mod order;
pub mod visitor;
pub mod writer;

pub use default_visitor::DefaultVisitor;
pub use generator::{DefaultGeneratorStrategy, GeneratorStrategy};
pub use navigator::Navigator;
pub use order::{
    CaseInsensitiveName, Comparator, DefaultMethodOrder, DefaultPropertyOrder,
    compare_ignore_case, compare_names, default_method_order, default_property_order,
    member_sorting_score,
};
pub use visitor::Visitor;
pub use writer::Writer;
