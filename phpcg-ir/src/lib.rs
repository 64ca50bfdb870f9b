//! Structural model for the phpcg PHP code generator.
//!
//! These types are plain data with builder methods. They carry no rendering
//! logic; `phpcg-codegen` walks them to produce source text.
//!
//! # Architecture
//!
//! ```text
//! reflection adapter / caller → Class, Function (this crate) → Navigator + Visitor → PHP source
//! ```
//!
//! Members are built with consuming `with_*` methods and handed to a
//! [`Class`], which also exposes `&mut self` setters for incremental
//! population:
//!
//! ```
//! use phpcg_ir::{Class, Method, Parameter, Property, Visibility};
//!
//! let class = Class::new("App\\Entity\\User")
//!     .with_constant(("TABLE", "users"))
//!     .with_property(Property::new("id").with_visibility(Visibility::Private))
//!     .with_method(
//!         Method::new("setId")
//!             .with_parameter(Parameter::new("id").with_type("int"))
//!             .with_return_type("self")
//!             .with_body("$this->id = $id;\nreturn $this;"),
//!     );
//!
//! assert_eq!(class.short_name(), "User");
//! assert_eq!(class.namespace(), Some("App\\Entity"));
//! ```

mod class;
mod constant;
mod function;
mod member;
mod method;
mod parameter;
mod property;
mod types;

pub use class::{Class, RequiredFile, is_imported};
pub use constant::Constant;
pub use function::Function;
pub use member::Member;
pub use method::Method;
pub use parameter::{Parameter, ParameterList};
pub use property::Property;
pub use types::{TypeHint, Visibility};
