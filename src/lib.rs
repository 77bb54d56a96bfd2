//! This crate provides [`Variant`], a tagged union over a closed list of types.
//!
//! The list is a tuple of Generics, for instance `Variant<(i32, f64, String)>`.
//! A variant is either empty, or holds one value of one of those types and
//! knows which one. Type lookups happen at compile time through the traits of
//! [`select_core`]: `IndexOf` turns a type into its position, `Select` turns a
//! position into a type. Values live inline, in storage sized and aligned for
//! the largest alternative.
//!
//! ```
//! use unionvariant::{get, At, Variant, VariantError};
//!
//! let mut v = Variant::<(i32, f64)>::new(5)?;
//! let mut w = Variant::<(i32, f64)>::with::<At<1>>(5.25)?;
//!
//! assert_eq!(get::<i32, _, _>(&v), Ok(5));
//! assert_eq!(
//!     v.try_lt(&w),
//!     Err(VariantError::MismatchedAlternatives { left: 0, right: 1 })
//! );
//!
//! v.swap(&mut w);
//! assert_eq!(v.get_at::<At<1>>(), Ok(5.25));
//! # Ok::<(), VariantError>(())
//! ```

pub mod access;
mod error;
mod storage;
mod variant;

pub use access::{get, get_at, get_if, holds_alternative, swap};
pub use error::{Result, VariantError};
pub use select_core::{
    At, IndexOf, NthType, Select, Selector, TypeUnion, UnionClone, UnionDebug, UnionEq, UnionOrd,
};
pub use variant::{check_alternatives, Variant};
