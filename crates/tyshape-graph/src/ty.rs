//! Type-graph representation.
//!
//! Defines the `Ty` tagged union with one variant per structural type
//! kind, the fixed universe of `Basic` primitives, and the field and
//! parameter records carried by structs and signatures. Graph edges are
//! `Rc<Ty>` so a checker can share substructure between nodes; nothing
//! in this crate mutates a node after construction.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::span::Span;

/// A primitive type with fixed identity.
///
/// Basics are the leaves of every type graph and are never decomposed
/// further. The full universe is [`Basic::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Basic {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
}

impl Basic {
    /// The fixed universe of primitive types.
    pub const ALL: [Basic; 14] = [
        Basic::Bool,
        Basic::Int,
        Basic::Int8,
        Basic::Int16,
        Basic::Int32,
        Basic::Int64,
        Basic::Uint,
        Basic::Uint8,
        Basic::Uint16,
        Basic::Uint32,
        Basic::Uint64,
        Basic::Float32,
        Basic::Float64,
        Basic::String,
    ];

    /// The name this primitive renders as.
    pub fn name(self) -> &'static str {
        match self {
            Basic::Bool => "Bool",
            Basic::Int => "Int",
            Basic::Int8 => "Int8",
            Basic::Int16 => "Int16",
            Basic::Int32 => "Int32",
            Basic::Int64 => "Int64",
            Basic::Uint => "Uint",
            Basic::Uint8 => "Uint8",
            Basic::Uint16 => "Uint16",
            Basic::Uint32 => "Uint32",
            Basic::Uint64 => "Uint64",
            Basic::Float32 => "Float32",
            Basic::Float64 => "Float64",
            Basic::String => "String",
        }
    }
}

impl fmt::Display for Basic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a channel type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChanDir {
    /// Send and receive.
    Both,
    /// Send-only.
    Send,
    /// Receive-only.
    Recv,
}

/// One struct field: its name, declared type, and declaration metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: Rc<Ty>,
    /// True for fields declared by embedding a type rather than naming one.
    pub embedded: bool,
    /// Raw tag string, if the declaration carried one. Tags are positional
    /// metadata and follow their field through every rewrite.
    pub tag: Option<String>,
    pub span: Span,
}

impl Field {
    /// A plain named field with no tag at a synthetic position.
    pub fn new(name: impl Into<String>, ty: Rc<Ty>) -> Self {
        Field {
            name: name.into(),
            ty,
            embedded: false,
            tag: None,
            span: Span::synthetic(),
        }
    }

    /// An embedded field, named after the type it embeds.
    pub fn embedded(name: impl Into<String>, ty: Rc<Ty>) -> Self {
        Field {
            name: name.into(),
            ty,
            embedded: true,
            tag: None,
            span: Span::synthetic(),
        }
    }

    /// A named field carrying a tag string.
    pub fn with_tag(name: impl Into<String>, ty: Rc<Ty>, tag: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            ty,
            embedded: false,
            tag: Some(tag.into()),
            span: Span::synthetic(),
        }
    }
}

/// One slot in a signature's parameter or result tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Param {
    /// Declared name; empty for anonymous parameters and most results.
    pub name: String,
    pub ty: Rc<Ty>,
    pub span: Span,
}

impl Param {
    /// A named parameter at a synthetic position.
    pub fn new(name: impl Into<String>, ty: Rc<Ty>) -> Self {
        Param {
            name: name.into(),
            ty,
            span: Span::synthetic(),
        }
    }

    /// An anonymous parameter or result slot.
    pub fn anon(ty: Rc<Ty>) -> Self {
        Param {
            name: String::new(),
            ty,
            span: Span::synthetic(),
        }
    }
}

/// A type in the graph.
///
/// Every type a checker can produce is one of these kinds:
/// - `Basic`: a primitive (leaf)
/// - `Named`: a user declaration wrapping its structural definition
/// - `Struct`: an ordered field sequence
/// - `Signature`: a function type with optional method receiver
/// - `Pointer`, `Array`, `Slice`, `Map`, `Chan`: the composite kinds
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Ty {
    /// A primitive type.
    Basic(Basic),
    /// A user-declared type. Carries no shape of its own; its structure
    /// is entirely the structure of `underlying`. The checker that built
    /// the graph guarantees the underlying chain terminates in a
    /// non-named kind.
    Named { name: String, underlying: Rc<Ty> },
    /// An ordered sequence of fields.
    Struct { fields: Vec<Field> },
    /// A function type.
    Signature {
        /// Receiver of a method type, if any. A binding, not part of
        /// the data shape.
        recv: Option<Rc<Ty>>,
        params: Vec<Param>,
        results: Vec<Param>,
        /// True when the final parameter collects a variable argument list.
        variadic: bool,
    },
    /// A pointer to an element type.
    Pointer { elem: Rc<Ty> },
    /// A fixed-length sequence.
    Array { len: u64, elem: Rc<Ty> },
    /// A variable-length sequence.
    Slice { elem: Rc<Ty> },
    /// An associative map.
    Map { key: Rc<Ty>, value: Rc<Ty> },
    /// A directional channel.
    Chan { dir: ChanDir, elem: Rc<Ty> },
}

impl Ty {
    /// Wrap a primitive kind as a graph node.
    pub fn basic(b: Basic) -> Rc<Ty> {
        Rc::new(Ty::Basic(b))
    }

    /// The `Bool` primitive.
    pub fn bool() -> Rc<Ty> {
        Ty::basic(Basic::Bool)
    }

    /// The `Int` primitive.
    pub fn int() -> Rc<Ty> {
        Ty::basic(Basic::Int)
    }

    /// The `Float64` primitive.
    pub fn float64() -> Rc<Ty> {
        Ty::basic(Basic::Float64)
    }

    /// The `String` primitive.
    pub fn string() -> Rc<Ty> {
        Ty::basic(Basic::String)
    }

    /// A user-declared type over an underlying definition.
    pub fn named(name: impl Into<String>, underlying: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Named {
            name: name.into(),
            underlying,
        })
    }

    /// A struct with the given fields, in declaration order.
    pub fn struct_ty(fields: Vec<Field>) -> Rc<Ty> {
        Rc::new(Ty::Struct { fields })
    }

    /// A plain function type: no receiver, not variadic.
    pub fn func(params: Vec<Param>, results: Vec<Param>) -> Rc<Ty> {
        Ty::signature(None, params, results, false)
    }

    /// A full signature, including receiver and variadic flag.
    pub fn signature(
        recv: Option<Rc<Ty>>,
        params: Vec<Param>,
        results: Vec<Param>,
        variadic: bool,
    ) -> Rc<Ty> {
        Rc::new(Ty::Signature {
            recv,
            params,
            results,
            variadic,
        })
    }

    /// A pointer to `elem`.
    pub fn pointer(elem: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Pointer { elem })
    }

    /// A fixed-length sequence of `len` elements.
    pub fn array(len: u64, elem: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Array { len, elem })
    }

    /// A variable-length sequence.
    pub fn slice(elem: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Slice { elem })
    }

    /// An associative map from `key` to `value`.
    pub fn map(key: Rc<Ty>, value: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Map { key, value })
    }

    /// A channel carrying `elem` in direction `dir`.
    pub fn chan(dir: ChanDir, elem: Rc<Ty>) -> Rc<Ty> {
        Rc::new(Ty::Chan { dir, elem })
    }

    /// Whether this node is a primitive leaf.
    pub fn is_basic(&self) -> bool {
        matches!(self, Ty::Basic(_))
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Basic(b) => write!(f, "{}", b),
            Ty::Named { name, .. } => write!(f, "{}", name),
            Ty::Struct { fields } => {
                if fields.is_empty() {
                    return write!(f, "struct {{}}");
                }
                write!(f, "struct {{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if field.embedded {
                        write!(f, "{}", field.ty)?;
                    } else {
                        write!(f, "{}: {}", field.name, field.ty)?;
                    }
                }
                write!(f, " }}")
            }
            Ty::Signature {
                params,
                results,
                variadic,
                ..
            } => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if *variadic && i == params.len() - 1 {
                        write!(f, "...")?;
                    }
                    write!(f, "{}", p.ty)?;
                }
                write!(f, ") -> ")?;
                match results.len() {
                    0 => write!(f, "()"),
                    1 => write!(f, "{}", results[0].ty),
                    _ => {
                        write!(f, "(")?;
                        for (i, r) in results.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{}", r.ty)?;
                        }
                        write!(f, ")")
                    }
                }
            }
            Ty::Pointer { elem } => write!(f, "*{}", elem),
            Ty::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            Ty::Slice { elem } => write!(f, "[]{}", elem),
            Ty::Map { key, value } => write!(f, "Map<{}, {}>", key, value),
            Ty::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "Chan<{}>", elem),
                ChanDir::Send => write!(f, "SendChan<{}>", elem),
                ChanDir::Recv => write!(f, "RecvChan<{}>", elem),
            },
        }
    }
}
