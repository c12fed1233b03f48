//! Shape normalizer for type graphs.
//!
//! Rewrites a type graph so that every user-declared (named) type is
//! replaced by its underlying basic-type structure, recursively through
//! all composite kinds. Downstream tools can then reason about types by
//! shape rather than by name, ignoring the aliasing user declarations
//! introduce.
//!
//! ```
//! use std::rc::Rc;
//! use tyshape_graph::ty::{Field, Ty};
//! use tyshape_norm::Converter;
//!
//! let my_int = Ty::named("MyInt", Ty::int());
//! let example = Ty::struct_ty(vec![
//!     Field::new("n", Rc::clone(&my_int)),
//!     Field::new("s", Ty::pointer(Ty::string())),
//! ]);
//!
//! let shape = Converter::new(true).convert(&example);
//! assert_eq!(shape.to_string(), "struct { n: Int, s: String }");
//! ```

mod convert;

pub use convert::{convert, Converter};
