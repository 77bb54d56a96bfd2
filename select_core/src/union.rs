use std::alloc::Layout;
use std::any::{self, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::mem::{self, ManuallyDrop};

use crate::index::At;
use crate::select::{
    cast_mut, cast_ref, max_of, IndexOf, Select, TypeUnion, UnionClone, UnionDebug, UnionEq,
    UnionOrd,
};

macro_rules! doc_comment {
    ($x:expr, $($tt:tt)*) => {
        #[doc = $x]
        $($tt)*
    };
}

macro_rules! Union {
    (
        pub union $name:ident {
        $($fieldnames:ident: $generics:ident),*
    }) => (
        doc_comment!(
            concat!("This union can hold the following Generics: ", stringify!($($generics),*)),
            #[repr(C)]
            pub union $name<$($generics),*> {
                $($fieldnames: ManuallyDrop<$generics>,)*
            }
        );
    )
}

macro_rules! GenUnion {
    (
        NAMES = [],
        FIELDS = []
    ) => ();

    (
        NAMES = [$name:ident $(,$names:ident)*],
        FIELDS = [$fieldname:ident: $generic:ident $(,$fieldnames:ident: $generics:ident)*]
    ) => {
        Union!(
            pub union $name {
            $fieldname: $generic
            $(, $fieldnames: $generics)*
        });

        GenUnion!(
            NAMES = [$($names),*],
            FIELDS = [$($fieldnames: $generics),*]
        );
    };
}

GenUnion!(
    NAMES = [Union10, Union9, Union8, Union7, Union6, Union5, Union4, Union3, Union2, Union1],
    FIELDS = [
        _a: A,
        _b: B,
        _c: C,
        _d: D,
        _e: E,
        _f: F,
        _g: G,
        _h: H,
        _i: I,
        _j: J
    ]
);

macro_rules! type_union {
    ($union:ident; $($index:literal => $generic:ident),+) => (
        unsafe impl <$($generic),+> TypeUnion for ($($generic,)+)
        where
            $($generic: 'static),+
        {
            type Union = $union<$($generic),+>;

            const LEN: usize = [$($index),+].len();
            const MAX_SIZE: usize = max_of(&[$(mem::size_of::<$generic>()),+]);
            const MAX_ALIGN: usize = max_of(&[$(mem::align_of::<$generic>()),+]);

            #[inline]
            fn type_id_at(index: usize) -> Option<TypeId> {
                match index {
                    $($index => Some(TypeId::of::<$generic>()),)+
                    _ => None,
                }
            }

            #[inline]
            fn type_name_at(index: usize) -> Option<&'static str> {
                match index {
                    $($index => Some(any::type_name::<$generic>()),)+
                    _ => None,
                }
            }

            #[inline]
            fn layout_at(index: usize) -> Option<Layout> {
                match index {
                    $($index => Some(Layout::new::<$generic>()),)+
                    _ => None,
                }
            }
        }

        unsafe impl <$($generic),+> UnionClone for ($($generic,)+)
        where
            $($generic: Clone + 'static),+
        {
            unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8) {
                match index {
                    $($index => (dst as *mut $generic).write(cast_ref::<$generic>(src).clone()),)+
                    _ => unreachable!("alternative {} out of range", index),
                }
            }

            unsafe fn clone_from_at(index: usize, dst: *mut u8, src: *const u8) {
                match index {
                    $($index => cast_mut::<$generic>(dst).clone_from(cast_ref::<$generic>(src)),)+
                    _ => unreachable!("alternative {} out of range", index),
                }
            }
        }

        unsafe impl <$($generic),+> UnionEq for ($($generic,)+)
        where
            $($generic: PartialEq + 'static),+
        {
            unsafe fn eq_at(index: usize, lhs: *const u8, rhs: *const u8) -> bool {
                match index {
                    $($index => cast_ref::<$generic>(lhs) == cast_ref::<$generic>(rhs),)+
                    _ => unreachable!("alternative {} out of range", index),
                }
            }
        }

        unsafe impl <$($generic),+> UnionOrd for ($($generic,)+)
        where
            $($generic: PartialOrd + 'static),+
        {
            unsafe fn partial_cmp_at(index: usize, lhs: *const u8, rhs: *const u8) -> Option<Ordering> {
                match index {
                    $($index => cast_ref::<$generic>(lhs).partial_cmp(cast_ref::<$generic>(rhs)),)+
                    _ => unreachable!("alternative {} out of range", index),
                }
            }
        }

        unsafe impl <$($generic),+> UnionDebug for ($($generic,)+)
        where
            $($generic: fmt::Debug + 'static),+
        {
            unsafe fn fmt_at(index: usize, ptr: *const u8, f: &mut fmt::Formatter) -> fmt::Result {
                match index {
                    $($index => fmt::Debug::fmt(cast_ref::<$generic>(ptr), f),)+
                    _ => unreachable!("alternative {} out of range", index),
                }
            }
        }
    )
}

macro_rules! impl_select {
    (
        INDICES = [$index:literal $(,$indices:literal)*],
        GENERICS = [$current:ident $(,$generics:ident)*],
        COPIES = [$($copies:ident),+]
    ) => (
        impl <$($copies),+> Select<At<$index>> for ($($copies,)+)
        where
            $current: 'static
        {
            type Output = $current;
        }

        impl <$($copies),+> IndexOf<$current, At<$index>> for ($($copies,)+)
        where
            $current: 'static
        {}

        impl_select!(
            INDICES = [$($indices),*],
            GENERICS = [$($generics),*],
            COPIES = [$($copies),+]
        );
    );

    (
        INDICES = [],
        GENERICS = [],
        COPIES = [$($copies:ident),+]
    ) => ();
}

macro_rules! select {
    (
        $union:ident,
        INDICES = [$($indices:literal),+],
        GENERICS = [$($generics:ident),+]
    ) => (
        type_union!($union; $($indices => $generics),+);

        impl_select!(
            INDICES = [$($indices),+],
            GENERICS = [$($generics),+],
            COPIES = [$($generics),+]
        );
    );
}

select!(Union1, INDICES = [0], GENERICS = [A]);
select!(Union2, INDICES = [0, 1], GENERICS = [A, B]);
select!(Union3, INDICES = [0, 1, 2], GENERICS = [A, B, C]);
select!(Union4, INDICES = [0, 1, 2, 3], GENERICS = [A, B, C, D]);
select!(
    Union5,
    INDICES = [0, 1, 2, 3, 4],
    GENERICS = [A, B, C, D, E]
);
select!(
    Union6,
    INDICES = [0, 1, 2, 3, 4, 5],
    GENERICS = [A, B, C, D, E, F]
);
select!(
    Union7,
    INDICES = [0, 1, 2, 3, 4, 5, 6],
    GENERICS = [A, B, C, D, E, F, G]
);
select!(
    Union8,
    INDICES = [0, 1, 2, 3, 4, 5, 6, 7],
    GENERICS = [A, B, C, D, E, F, G, H]
);
select!(
    Union9,
    INDICES = [0, 1, 2, 3, 4, 5, 6, 7, 8],
    GENERICS = [A, B, C, D, E, F, G, H, I]
);
select!(
    Union10,
    INDICES = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    GENERICS = [A, B, C, D, E, F, G, H, I, J]
);
