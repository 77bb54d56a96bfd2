use std::cmp::Ordering;
use std::fmt;
use std::mem;

use select_core::{IndexOf, Select, Selector, TypeUnion, UnionClone, UnionDebug, UnionEq, UnionOrd};

use crate::error::{Result, VariantError};
use crate::storage::Storage;

/// Rejects a list of alternatives that names the same type twice.
pub fn check_alternatives<L: TypeUnion>() -> Result<()> {
    match L::first_duplicate() {
        None => Ok(()),
        Some((first, second)) => {
            let type_name = L::type_name_at(first).unwrap_or_default();
            tracing::debug!(first, second, type_name, "rejected list of alternatives");

            Err(VariantError::DuplicateAlternativeType {
                first,
                second,
                type_name,
            })
        }
    }
}

/// A tagged union holding at most one value out of the Generics of `L`.
///
/// `L` is a tuple such as `(i32, f64, String)`. A variant is either *empty*
/// or holds a value of exactly one of those types, the *active alternative*.
/// Every constructor checks that `L` has no repeated types, so any existing
/// `Variant<L>` is proof that its list is valid.
///
/// Typed operations take the alternative's type and let the compiler infer its
/// position:
///
/// ```
/// use unionvariant::{Variant, VariantError};
///
/// let mut v = Variant::<(i32, f64)>::new(5)?;
/// assert_eq!(v.index(), Some(0));
/// assert_eq!(v.get::<i32, _>(), Ok(5));
///
/// v.set(5.25);
/// assert_eq!(v.index(), Some(1));
/// assert_eq!(
///     v.get::<i32, _>(),
///     Err(VariantError::WrongAlternative { requested: 0, active: 1 })
/// );
/// # Ok::<(), VariantError>(())
/// ```
///
/// Variants are not synchronized; mutation goes through `&mut self`.
pub struct Variant<L: TypeUnion> {
    storage: Storage<L>,
}

impl<L: TypeUnion> Variant<L> {
    /// Creates a variant without a value.
    pub fn empty() -> Result<Self> {
        check_alternatives::<L>()?;

        Ok(Self {
            storage: Storage::vacant(),
        })
    }

    /// Creates a variant holding `value`.
    /// The position of `T` is inferred; `T` must occur in `L` exactly once.
    #[inline]
    pub fn new<T, S>(value: T) -> Result<Self>
    where
        S: Selector,
        T: 'static,
        L: IndexOf<T, S>,
    {
        Self::with::<S>(value)
    }

    /// Creates a variant holding `value` as the alternative selected by `S`.
    pub fn with<S>(value: <L as Select<S>>::Output) -> Result<Self>
    where
        S: Selector,
        L: Select<S>,
    {
        let mut variant = Self::empty()?;
        variant.storage.construct::<S>(value);

        tracing::trace!(index = S::INDEX, "variant constructed");
        Ok(variant)
    }

    /// Returns the position of the active alternative, or `None` if empty.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.storage.index()
    }

    /// Returns `true` if the variant holds a value.
    #[inline]
    pub fn holds_value(&self) -> bool {
        self.storage.index().is_some()
    }

    /// Returns `true` if the variant holds no value.
    #[inline]
    pub fn is_valueless(&self) -> bool {
        !self.holds_value()
    }

    /// Returns `true` if the active alternative is a `T`.
    #[inline]
    pub fn holds<T: 'static>(&self) -> bool {
        self.storage.holds::<T>()
    }

    /// Returns the type name of the active alternative.
    pub fn type_name(&self) -> Option<&'static str> {
        self.storage.type_name()
    }

    /// Makes `value` the held value.
    #[inline]
    pub fn set<T, S>(&mut self, value: T)
    where
        S: Selector,
        T: 'static,
        L: IndexOf<T, S>,
    {
        self.set_at::<S>(value)
    }

    /// Makes `value` the held value, as the alternative selected by `S`.
    ///
    /// If that alternative is already active the live value is assigned to
    /// in place. Otherwise the live value, if any, is dropped first.
    pub fn set_at<S>(&mut self, value: <L as Select<S>>::Output)
    where
        S: Selector,
        L: Select<S>,
    {
        let previous = self.storage.index();

        if previous == Some(S::INDEX) {
            if let Some(current) = self.storage.read_as_mut::<<L as Select<S>>::Output>() {
                *current = value;
                return;
            }
        }

        self.storage.construct::<S>(value);
        tracing::trace!(from = ?previous, to = S::INDEX, "variant switched alternative");
    }

    /// Makes `self` hold a copy of `other`'s value.
    ///
    /// When both hold the same alternative the value is cloned into the live
    /// one with `Clone::clone_from`. An empty `other` empties `self`.
    #[inline]
    pub fn assign(&mut self, other: &Self)
    where
        L: UnionClone,
    {
        self.storage.clone_from(&other.storage);
    }

    /// Moves the value out into a new variant, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        tracing::trace!(index = ?self.storage.index(), "variant moved out");

        Self {
            storage: mem::replace(&mut self.storage, Storage::vacant()),
        }
    }

    /// Exchanges the values of two variants. Never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        tracing::trace!(left = ?self.index(), right = ?other.index(), "variants swapped");
        mem::swap(&mut self.storage, &mut other.storage);
    }

    /// Returns the position of the active alternative if it is `requested`.
    fn active_at(&self, requested: usize) -> Result<usize> {
        match self.storage.index() {
            None => Err(VariantError::ValuelessAccess),
            Some(active) if active == requested => Ok(active),
            Some(active) => Err(VariantError::WrongAlternative { requested, active }),
        }
    }

    fn read<T: 'static>(&self, requested: usize) -> Result<&T> {
        let active = self.active_at(requested)?;
        self.storage
            .read_as::<T>()
            .ok_or(VariantError::WrongAlternative { requested, active })
    }

    /// Returns a copy of the held `T`.
    #[inline]
    pub fn get<T, S>(&self) -> Result<T>
    where
        T: Clone + 'static,
        S: Selector,
        L: IndexOf<T, S>,
    {
        self.get_ref::<T, S>().cloned()
    }

    /// Returns a reference to the held `T`.
    #[inline]
    pub fn get_ref<T, S>(&self) -> Result<&T>
    where
        S: Selector,
        T: 'static,
        L: IndexOf<T, S>,
    {
        self.read::<T>(S::INDEX)
    }

    /// Returns a mutable reference to the held `T`.
    pub fn get_mut<T, S>(&mut self) -> Result<&mut T>
    where
        S: Selector,
        T: 'static,
        L: IndexOf<T, S>,
    {
        let active = self.active_at(S::INDEX)?;
        self.storage
            .read_as_mut::<T>()
            .ok_or(VariantError::WrongAlternative {
                requested: S::INDEX,
                active,
            })
    }

    /// Returns a copy of the value of the alternative selected by `S`.
    #[inline]
    pub fn get_at<S>(&self) -> Result<<L as Select<S>>::Output>
    where
        S: Selector,
        L: Select<S>,
        <L as Select<S>>::Output: Clone,
    {
        self.read::<<L as Select<S>>::Output>(S::INDEX).cloned()
    }

    /// Returns a copy of the held value, addressed by a runtime position.
    ///
    /// Fails with [`VariantError::IndexOutOfRange`] if `index` is past the
    /// end of `L`, and with [`VariantError::WrongAlternative`] if `T` is not
    /// the alternative at `index`.
    pub fn get_index<T>(&self, index: usize) -> Result<T>
    where
        T: Clone + 'static,
    {
        if index >= L::LEN {
            return Err(VariantError::IndexOutOfRange { index, len: L::LEN });
        }

        self.read::<T>(index).cloned()
    }

    /// Moves the held `T` out, leaving the variant empty.
    /// On error the variant is left untouched.
    pub fn take_value<T, S>(&mut self) -> Result<T>
    where
        S: Selector,
        T: 'static,
        L: IndexOf<T, S>,
    {
        let active = self.active_at(S::INDEX)?;
        self.storage
            .take_as::<T>()
            .ok_or(VariantError::WrongAlternative {
                requested: S::INDEX,
                active,
            })
    }

    /// Returns the shared active position of two operands.
    fn operands(&self, other: &Self) -> Result<usize> {
        match (self.storage.index(), other.storage.index()) {
            (Some(left), Some(right)) if left == right => Ok(left),
            (Some(left), Some(right)) => Err(VariantError::MismatchedAlternatives { left, right }),
            _ => Err(VariantError::ValuelessAccess),
        }
    }

    /// Compares the held values for equality.
    ///
    /// Both variants must hold the same alternative: holding different ones
    /// is [`VariantError::MismatchedAlternatives`] rather than `false`.
    pub fn try_eq(&self, other: &Self) -> Result<bool>
    where
        L: UnionEq,
    {
        let index = self.operands(other)?;
        Ok(unsafe { L::eq_at(index, self.storage.as_ptr(), other.storage.as_ptr()) })
    }

    /// Returns `true` if the held values differ.
    #[inline]
    pub fn try_ne(&self, other: &Self) -> Result<bool>
    where
        L: UnionEq,
    {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Orders the held values. Same contract as [`Variant::try_eq`].
    pub fn try_partial_cmp(&self, other: &Self) -> Result<Option<Ordering>>
    where
        L: UnionOrd,
    {
        let index = self.operands(other)?;
        Ok(unsafe { L::partial_cmp_at(index, self.storage.as_ptr(), other.storage.as_ptr()) })
    }

    /// Returns `true` if `self`'s value is less than `other`'s.
    #[inline]
    pub fn try_lt(&self, other: &Self) -> Result<bool>
    where
        L: UnionOrd,
    {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Less)))
    }

    /// Returns `true` if `self`'s value is less than or equal to `other`'s.
    #[inline]
    pub fn try_le(&self, other: &Self) -> Result<bool>
    where
        L: UnionOrd,
    {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Less | Ordering::Equal)))
    }

    /// Returns `true` if `self`'s value is greater than `other`'s.
    #[inline]
    pub fn try_gt(&self, other: &Self) -> Result<bool>
    where
        L: UnionOrd,
    {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Greater)))
    }

    /// Returns `true` if `self`'s value is greater than or equal to `other`'s.
    #[inline]
    pub fn try_ge(&self, other: &Self) -> Result<bool>
    where
        L: UnionOrd,
    {
        Ok(matches!(self.try_partial_cmp(other)?, Some(Ordering::Greater | Ordering::Equal)))
    }
}

impl<L: UnionClone> Clone for Variant<L> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

struct ActiveValue<'a, L: TypeUnion> {
    storage: &'a Storage<L>,
    index: usize,
}

impl<L: UnionDebug> fmt::Debug for ActiveValue<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        unsafe { L::fmt_at(self.index, self.storage.as_ptr(), f) }
    }
}

impl<L: UnionDebug> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.storage.index() {
            None => f.write_str("Variant(<valueless>)"),
            Some(index) => f
                .debug_struct("Variant")
                .field("index", &index)
                .field(
                    "value",
                    &ActiveValue {
                        storage: &self.storage,
                        index,
                    },
                )
                .finish(),
        }
    }
}
