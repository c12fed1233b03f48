//! Type-graph data model for the tyshape normalizer.
//!
//! A type graph is the tree (or DAG, via shared `Rc` edges) of [`ty::Ty`]
//! nodes a type checker produces to describe a program's types. This
//! crate defines the node kinds, the primitive universe, spans, and the
//! `Display` rendering used in tests and error output. The normalizing
//! transformation itself lives in the `tyshape-norm` crate.

pub mod span;
pub mod ty;

pub use span::Span;
pub use ty::{Basic, ChanDir, Field, Param, Ty};
