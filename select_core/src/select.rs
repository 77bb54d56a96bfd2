use std::alloc::Layout;
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;

use crate::index::At;

pub(crate) unsafe fn cast_ref<'a, T: 'a>(ptr: *const u8) -> &'a T {
    &*(ptr as *const T)
}

pub(crate) unsafe fn cast_mut<'a, T: 'a>(ptr: *mut u8) -> &'a mut T {
    &mut *(ptr as *mut T)
}

/// Returns the largest value of `values`, or 0 when it is empty.
pub const fn max_of(values: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < values.len() {
        if values[i] > max {
            max = values[i];
        }
        i += 1;
    }
    max
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Helper trait to index into a tuple of Generics.
///
/// Only [`At`] implements it. A position that the unsafe dispatch of a
/// [`TypeUnion`] trusts cannot be supplied from outside this crate:
///
/// ```compile_fail
/// use select_core::{Select, Selector};
///
/// struct Forged;
///
/// impl Selector for Forged {
///     const INDEX: usize = 1;
/// }
///
/// impl Select<Forged> for (String, u64) {
///     type Output = String;
/// }
/// ```
pub trait Selector: sealed::Sealed {
    /// The zero-based position this selector points at.
    const INDEX: usize;
}

/// Helper trait to 'select' a generic type out of a tuple of Generics.
pub trait Select<S: Selector> {
    /// The selected generic.
    type Output: 'static;
}

/// The `N`-th generic of the tuple `L`.
pub type NthType<L, const N: usize> = <L as Select<At<N>>>::Output;

/// Implemented by a tuple of Generics for every position `S` at which `T` occurs.
///
/// When `T` occurs exactly once, `S` can be left to inference, which turns a
/// type into its position at compile time. A type that is not in the tuple has
/// no impl, and a type that occurs twice makes the position ambiguous; both are
/// rejected by the compiler.
pub trait IndexOf<T, S: Selector>: Select<S, Output = T> {}

/// A closed, ordered list of types, written as a tuple of Generics.
///
/// # Safety
/// `Union` must be large and aligned enough to hold every
/// [`Select::Output`] of the list at offset 0, and the `*_at` functions must
/// describe the generic at that position.
pub unsafe trait TypeUnion: Sized + 'static {
    /// Storage that can hold any one of the Generics.
    type Union;

    /// Number of Generics in the list.
    const LEN: usize;

    /// The largest `size_of` of all Generics.
    const MAX_SIZE: usize;

    /// The largest `align_of` of all Generics.
    const MAX_ALIGN: usize;

    /// Returns the `TypeId` of the generic at `index`.
    fn type_id_at(index: usize) -> Option<TypeId>;

    /// Returns the type name of the generic at `index`.
    fn type_name_at(index: usize) -> Option<&'static str>;

    /// Returns the memory layout of the generic at `index`.
    fn layout_at(index: usize) -> Option<Layout>;

    /// Returns the position of `T`, or `None` if `T` is not one of the Generics.
    fn index_of<T: 'static>() -> Option<usize> {
        let id = TypeId::of::<T>();
        (0..Self::LEN).find(|&index| Self::type_id_at(index) == Some(id))
    }

    /// Returns `true` if `T` is one of the types of the tuple, false otherwise.
    #[inline]
    fn contains<T: 'static>() -> bool {
        Self::index_of::<T>().is_some()
    }

    /// Returns the first pair of positions holding the same type.
    fn first_duplicate() -> Option<(usize, usize)> {
        (0..Self::LEN)
            .flat_map(|first| (first + 1..Self::LEN).map(move |second| (first, second)))
            .find(|&(first, second)| Self::type_id_at(first) == Self::type_id_at(second))
    }

    /// Returns `true` if no two Generics are the same type.
    #[inline]
    fn all_unique() -> bool {
        Self::first_duplicate().is_none()
    }
}

/// Clones a live alternative chosen at runtime by its position.
///
/// # Safety
/// Implementations must treat the pointers as the alternative at `index`.
pub unsafe trait UnionClone: TypeUnion {
    /// Clones the value at `src` into `dst`.
    ///
    /// # Safety
    /// `src` must point to a live value of the generic at `index`,
    /// `dst` must be valid for writes of `Self::Union` and hold no live value.
    unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8);

    /// Clones the value at `src` into the live value at `dst`, reusing it.
    ///
    /// # Safety
    /// Both pointers must point to live values of the generic at `index`.
    unsafe fn clone_from_at(index: usize, dst: *mut u8, src: *const u8);
}

/// Compares two live values of the same alternative for equality.
///
/// # Safety
/// Implementations must treat the pointers as the alternative at `index`.
pub unsafe trait UnionEq: TypeUnion {
    /// # Safety
    /// Both pointers must point to live values of the generic at `index`.
    unsafe fn eq_at(index: usize, lhs: *const u8, rhs: *const u8) -> bool;
}

/// Orders two live values of the same alternative.
///
/// # Safety
/// Implementations must treat the pointers as the alternative at `index`.
pub unsafe trait UnionOrd: UnionEq {
    /// # Safety
    /// Both pointers must point to live values of the generic at `index`.
    unsafe fn partial_cmp_at(index: usize, lhs: *const u8, rhs: *const u8) -> Option<Ordering>;
}

/// Formats a live alternative chosen at runtime by its position.
///
/// # Safety
/// Implementations must treat the pointer as the alternative at `index`.
pub unsafe trait UnionDebug: TypeUnion {
    /// # Safety
    /// `ptr` must point to a live value of the generic at `index`.
    unsafe fn fmt_at(index: usize, ptr: *const u8, f: &mut fmt::Formatter) -> fmt::Result;
}
