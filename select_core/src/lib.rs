//! This crate describes closed lists of types, written as tuples of Generics.
//! It provides a way to look up a type by its position and a position by its type,
//! both at compile time and at runtime, along with a union that can store any one of them.

pub mod index;
pub mod select;
pub mod union;

pub use index::At;
pub use select::{
    max_of, IndexOf, NthType, Select, Selector, TypeUnion, UnionClone, UnionDebug, UnionEq,
    UnionOrd,
};
