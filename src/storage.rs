//! The storage cell behind a [`Variant`](crate::Variant).
//!
//! A `Storage` owns a block of bytes sized and aligned for the largest
//! alternative of its list. Next to the bytes it keeps the position of the
//! live alternative and a [`Slot`], a small function table for the live type.
//! Destruction goes through the slot, and every typed read is checked against
//! the slot's `TypeId`, so a read with the wrong type yields `None` instead of
//! reinterpreting the bytes.

use std::any::{self, TypeId};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr;

use select_core::{Select, Selector, TypeUnion, UnionClone};

/// Function table for the type living in a [`Storage`].
struct Slot {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    drop: unsafe fn(*mut u8),
}

unsafe fn drop_erased<T>(ptr: *mut u8) {
    ptr::drop_in_place(ptr as *mut T)
}

trait Slotted: 'static {
    const SLOT: &'static Slot;
}

impl<T: 'static> Slotted for T {
    const SLOT: &'static Slot = &Slot {
        type_id: TypeId::of::<T>,
        type_name: any::type_name::<T>,
        drop: drop_erased::<T>,
    };
}

/// The live alternative of a [`Storage`].
#[derive(Clone, Copy)]
struct Active {
    index: usize,
    slot: &'static Slot,
}

impl Active {
    #[inline]
    fn is<T: 'static>(&self) -> bool {
        (self.slot.type_id)() == TypeId::of::<T>()
    }
}

pub(crate) struct Storage<L: TypeUnion> {
    bytes: MaybeUninit<L::Union>,
    active: Option<Active>,

    /// `Storage` drops values of the Generics of `L`.
    _owns: PhantomData<L>,
}

impl<L: TypeUnion> Storage<L> {
    /// Creates a cell without a live value.
    #[inline]
    pub(crate) const fn vacant() -> Self {
        Self {
            bytes: MaybeUninit::uninit(),
            active: None,
            _owns: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> Option<usize> {
        self.active.map(|active| active.index)
    }

    pub(crate) fn type_name(&self) -> Option<&'static str> {
        self.active.map(|active| (active.slot.type_name)())
    }

    /// Returns `true` if the live value is a `T`.
    #[inline]
    pub(crate) fn holds<T: 'static>(&self) -> bool {
        self.active.map_or(false, |active| active.is::<T>())
    }

    /// Writes `value` as the alternative selected by `S`.
    /// Any live value is dropped first.
    ///
    /// Panics before writing if the alternative at `S::INDEX` of `L` is not
    /// the selected type, which only a broken `TypeUnion` impl can cause.
    pub(crate) fn construct<S>(&mut self, value: <L as Select<S>>::Output)
    where
        S: Selector,
        L: Select<S>,
    {
        assert_eq!(
            L::type_id_at(S::INDEX),
            Some(TypeId::of::<<L as Select<S>>::Output>()),
            "alternative {} is not a `{}`",
            S::INDEX,
            any::type_name::<<L as Select<S>>::Output>(),
        );
        debug_assert!(mem::size_of::<<L as Select<S>>::Output>() <= mem::size_of::<L::Union>());
        self.destroy();

        unsafe {
            ptr::write(self.as_mut_ptr() as *mut <L as Select<S>>::Output, value);
        }

        self.active = Some(Active {
            index: S::INDEX,
            slot: <<L as Select<S>>::Output as Slotted>::SLOT,
        });
    }

    /// Drops the live value, if any.
    pub(crate) fn destroy(&mut self) {
        // Vacate first: the value is dropped at most once.
        if let Some(active) = self.active.take() {
            unsafe { (active.slot.drop)(self.as_mut_ptr()) }
        }
    }

    /// Returns the live value, if it is a `T`.
    #[inline]
    pub(crate) fn read_as<T: 'static>(&self) -> Option<&T> {
        if self.holds::<T>() {
            Some(unsafe { &*(self.as_ptr() as *const T) })
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn read_as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if self.holds::<T>() {
            Some(unsafe { &mut *(self.as_mut_ptr() as *mut T) })
        } else {
            None
        }
    }

    /// Moves the live value out if it is a `T`, leaving the cell vacant.
    pub(crate) fn take_as<T: 'static>(&mut self) -> Option<T> {
        if !self.holds::<T>() {
            return None;
        }

        self.active = None;
        Some(unsafe { ptr::read(self.as_ptr() as *const T) })
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr() as *const u8
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr() as *mut u8
    }

    /// Marks the cell as holding `active`.
    ///
    /// # Safety
    /// The cell must be vacant and a live value of the type `active`
    /// describes must have been written to [`Storage::as_mut_ptr`].
    #[inline]
    unsafe fn occupy(&mut self, active: Active) {
        debug_assert!(self.active.is_none());
        self.active = Some(active);
    }
}

impl<L: UnionClone> Clone for Storage<L> {
    fn clone(&self) -> Self {
        let mut storage = Self::vacant();

        if let Some(active) = self.active {
            unsafe {
                L::clone_at(active.index, self.as_ptr(), storage.as_mut_ptr());
                storage.occupy(active);
            }
        }

        storage
    }

    fn clone_from(&mut self, source: &Self) {
        match (self.active, source.active) {
            (Some(mine), Some(theirs)) if mine.index == theirs.index => unsafe {
                L::clone_from_at(mine.index, self.as_mut_ptr(), source.as_ptr())
            },
            _ => *self = source.clone(),
        }
    }
}

impl<L: TypeUnion> Drop for Storage<L> {
    fn drop(&mut self) {
        self.destroy();
    }
}
