//! Free-standing accessors, for call sites that read better as `get::<T, _, _>(&v)`.

use select_core::{IndexOf, Select, Selector, TypeUnion};

use crate::error::Result;
use crate::variant::Variant;

/// Returns a copy of the `T` held by `variant`.
///
/// Fails with `ValuelessAccess` when `variant` is empty and with
/// `WrongAlternative` when another alternative is active.
#[inline]
pub fn get<T, S, L>(variant: &Variant<L>) -> Result<T>
where
    T: Clone + 'static,
    S: Selector,
    L: IndexOf<T, S> + TypeUnion,
{
    variant.get::<T, S>()
}

/// Returns a copy of the value of the alternative selected by `S`.
#[inline]
pub fn get_at<S, L>(variant: &Variant<L>) -> Result<<L as Select<S>>::Output>
where
    S: Selector,
    L: Select<S> + TypeUnion,
    <L as Select<S>>::Output: Clone,
{
    variant.get_at::<S>()
}

/// Returns a reference to the held `T`, or `None` if `T` is not active.
#[inline]
pub fn get_if<T, S, L>(variant: &Variant<L>) -> Option<&T>
where
    S: Selector,
    T: 'static,
    L: IndexOf<T, S> + TypeUnion,
{
    variant.get_ref::<T, S>().ok()
}

/// Returns `true` if `variant` holds a `T`.
#[inline]
pub fn holds_alternative<T, L>(variant: &Variant<L>) -> bool
where
    T: 'static,
    L: TypeUnion,
{
    variant.holds::<T>()
}

/// Exchanges the values of two variants.
#[inline]
pub fn swap<L: TypeUnion>(a: &mut Variant<L>, b: &mut Variant<L>) {
    a.swap(b);
}
