//! The normalizing conversion.
//!
//! `Converter` rewrites a type graph into one containing only basic
//! types and composites of basic types. With `MyInt` declared over `Int`:
//!
//! - `[]MyInt -> []Int`
//! - `RecvChan<MyInt> -> RecvChan<Int>`
//! - `Map<MyInt, MyInt> -> Map<Int, Int>`
//!
//! With `ptr_elem` set, a pointer additionally collapses to its element:
//! `*String -> String`.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use tyshape_graph::ty::{Field, Param, Ty};

/// Results of in-progress conversion, keyed on input node identity.
///
/// Shared substructure converts once per call, and the walk does work
/// proportional to the number of distinct reachable nodes.
type Memo = FxHashMap<*const Ty, Rc<Ty>>;

/// One-shot conversion with a throwaway [`Converter`].
pub fn convert(ty: &Rc<Ty>, ptr_elem: bool) -> Rc<Ty> {
    Converter::new(ptr_elem).convert(ty)
}

/// Rewrites type graphs into their underlying, name-free shape.
///
/// The only state is the pointer-collapse flag, fixed at construction;
/// each call keeps its own memo table, so one converter can be reused
/// across any number of independent conversions.
#[derive(Copy, Clone, Debug)]
pub struct Converter {
    ptr_elem: bool,
}

impl Converter {
    /// Create a converter. When `ptr_elem` is set, `*T` converts to the
    /// conversion of `T` itself; when clear, the pointer layer is kept
    /// around the converted element.
    pub fn new(ptr_elem: bool) -> Self {
        Converter { ptr_elem }
    }

    /// Whether this converter collapses pointer layers.
    pub fn ptr_elem(&self) -> bool {
        self.ptr_elem
    }

    /// Convert a type graph into one reachable only through basic types
    /// and composites of basic types.
    ///
    /// The input is never mutated. Nodes that need no rewrite (primitives,
    /// and repeats of any node already converted in this call) come back
    /// by `Rc` identity.
    pub fn convert(&self, ty: &Rc<Ty>) -> Rc<Ty> {
        let mut memo = Memo::default();
        self.convert_node(ty, &mut memo)
    }

    /// Convert an optional type, passing absence through.
    pub fn convert_opt(&self, ty: Option<&Rc<Ty>>) -> Option<Rc<Ty>> {
        ty.map(|t| self.convert(t))
    }

    fn convert_node(&self, ty: &Rc<Ty>, memo: &mut Memo) -> Rc<Ty> {
        let key = Rc::as_ptr(ty);
        if let Some(done) = memo.get(&key) {
            return Rc::clone(done);
        }

        let converted = match &**ty {
            // Primitives are the base case: already canonical, shared
            // back by identity. Must stay ahead of the structural arms.
            Ty::Basic(_) => Rc::clone(ty),

            Ty::Struct { fields } => self.convert_struct(fields, memo),

            Ty::Signature {
                recv,
                params,
                results,
                variadic,
            } => self.convert_signature(recv.as_ref(), params, results, *variadic, memo),

            Ty::Pointer { elem } => {
                if self.ptr_elem {
                    self.convert_node(elem, memo)
                } else {
                    Ty::pointer(self.convert_node(elem, memo))
                }
            }

            Ty::Array { len, elem } => Ty::array(*len, self.convert_node(elem, memo)),

            Ty::Slice { elem } => Ty::slice(self.convert_node(elem, memo)),

            Ty::Map { key, value } => {
                Ty::map(self.convert_node(key, memo), self.convert_node(value, memo))
            }

            Ty::Chan { dir, elem } => Ty::chan(*dir, self.convert_node(elem, memo)),

            // A named type has no shape of its own; its conversion is the
            // conversion of whatever it is declared over, however many
            // naming layers deep.
            Ty::Named { underlying, .. } => self.convert_node(underlying, memo),
        };

        memo.insert(key, Rc::clone(&converted));
        converted
    }

    /// Rebuild a struct around converted field types. Field order, names,
    /// embedding flags, tags, and spans ride along unchanged.
    fn convert_struct(&self, fields: &[Field], memo: &mut Memo) -> Rc<Ty> {
        let fields = fields
            .iter()
            .map(|f| Field {
                name: f.name.clone(),
                ty: self.convert_node(&f.ty, memo),
                embedded: f.embedded,
                tag: f.tag.clone(),
                span: f.span,
            })
            .collect();
        Ty::struct_ty(fields)
    }

    /// Rebuild a signature around converted parameter and result tuples.
    /// The receiver is a method binding, not part of the data shape; it
    /// rides along unconverted.
    fn convert_signature(
        &self,
        recv: Option<&Rc<Ty>>,
        params: &[Param],
        results: &[Param],
        variadic: bool,
        memo: &mut Memo,
    ) -> Rc<Ty> {
        Ty::signature(
            recv.map(Rc::clone),
            self.convert_tuple(params, memo),
            self.convert_tuple(results, memo),
            variadic,
        )
    }

    /// Convert each slot of a parameter or result tuple in place,
    /// keeping every name, span, and position.
    fn convert_tuple(&self, tuple: &[Param], memo: &mut Memo) -> Vec<Param> {
        tuple
            .iter()
            .map(|p| Param {
                name: p.name.clone(),
                ty: self.convert_node(&p.ty, memo),
                span: p.span,
            })
            .collect()
    }
}
