//! Property-based tests for `Variant`.
//!
//! These use proptest to check the laws that hold for every value:
//! reading back what was stored, copies matching their source, moves
//! emptying their source, and comparisons refusing mismatched alternatives.

use proptest::prelude::*;
use unionvariant::{Variant, VariantError};

type Mixed = Variant<(i64, String, bool)>;

/// A variant holding an arbitrary value of an arbitrary alternative.
fn mixed_strategy() -> impl Strategy<Value = Mixed> {
    prop_oneof![
        any::<i64>().prop_map(|x| Mixed::new(x).unwrap()),
        "[a-z]{0,12}".prop_map(|s| Mixed::new(s).unwrap()),
        any::<bool>().prop_map(|b| Mixed::new(b).unwrap()),
        Just(()).prop_map(|()| Mixed::empty().unwrap()),
    ]
}

proptest! {
    #[test]
    fn get_returns_what_was_stored(x in any::<i64>(), s in ".{0,24}") {
        prop_assert_eq!(Mixed::new(x).unwrap().get::<i64, _>(), Ok(x));
        prop_assert_eq!(Mixed::new(s.clone()).unwrap().get::<String, _>(), Ok(s));
    }

    #[test]
    fn holds_value_iff_index(v in mixed_strategy()) {
        prop_assert_eq!(v.holds_value(), v.index().is_some());
    }

    #[test]
    fn clone_matches_source(v in mixed_strategy()) {
        let copy = v.clone();

        prop_assert_eq!(copy.index(), v.index());
        if v.holds_value() {
            prop_assert_eq!(copy.try_eq(&v), Ok(true));
        }
    }

    #[test]
    fn take_leaves_source_empty(v in mixed_strategy()) {
        let mut source = v.clone();
        let moved = source.take();

        prop_assert!(source.is_valueless());
        prop_assert_eq!(moved.index(), v.index());
    }

    #[test]
    fn set_replaces_alternative(x in any::<i64>(), b in any::<bool>()) {
        let mut v = Mixed::new(x).unwrap();
        v.set(b);

        prop_assert_eq!(v.index(), Some(2));
        prop_assert_eq!(v.get::<bool, _>(), Ok(b));
        prop_assert_eq!(
            v.get::<i64, _>(),
            Err(VariantError::WrongAlternative { requested: 0, active: 2 })
        );
    }

    #[test]
    fn set_same_alternative_keeps_index(x in any::<i64>(), y in any::<i64>()) {
        let mut v = Mixed::new(x).unwrap();
        v.set(y);

        prop_assert_eq!(v.index(), Some(0));
        prop_assert_eq!(v.get::<i64, _>(), Ok(y));
    }

    #[test]
    fn mismatched_comparison_is_an_error(x in any::<i64>(), s in ".{0,8}") {
        let a = Mixed::new(x).unwrap();
        let b = Mixed::new(s).unwrap();

        let mismatch = Err(VariantError::MismatchedAlternatives { left: 0, right: 1 });
        prop_assert_eq!(a.try_eq(&b), mismatch);
        prop_assert_eq!(a.try_lt(&b), mismatch);
        prop_assert_eq!(a.try_gt(&b), mismatch);
    }

    #[test]
    fn comparison_follows_the_value(x in any::<i64>(), y in any::<i64>()) {
        let a = Mixed::new(x).unwrap();
        let b = Mixed::new(y).unwrap();

        prop_assert_eq!(a.try_eq(&b), Ok(x == y));
        prop_assert_eq!(a.try_lt(&b), Ok(x < y));
        prop_assert_eq!(a.try_partial_cmp(&b), Ok(x.partial_cmp(&y)));
    }

    #[test]
    fn swap_twice_is_identity(a in mixed_strategy(), b in mixed_strategy()) {
        let (mut left, mut right) = (a.clone(), b.clone());

        left.swap(&mut right);
        prop_assert_eq!(left.index(), b.index());
        prop_assert_eq!(right.index(), a.index());

        left.swap(&mut right);
        prop_assert_eq!(left.index(), a.index());
        prop_assert_eq!(right.index(), b.index());
    }
}
