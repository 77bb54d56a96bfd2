use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use unionvariant::{get, get_at, At, Variant, VariantError};

type Num = Variant<(i32, f64)>;

/// Counts how many times values sharing a counter were dropped.
#[derive(Debug)]
struct Tracked {
    drops: Rc<Cell<usize>>,
    clones: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(drops: &Rc<Cell<usize>>, clones: &Rc<Cell<usize>>) -> Self {
        Tracked {
            drops: drops.clone(),
            clones: clones.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Tracked::new(&self.drops, &self.clones)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn int_alternative() {
    let v = Num::new(5).unwrap();

    assert_eq!(v.index(), Some(0));
    assert!(v.holds_value());
    assert_eq!(get::<i32, _, _>(&v), Ok(5));
    assert_eq!(
        get::<f64, _, _>(&v),
        Err(VariantError::WrongAlternative { requested: 1, active: 0 })
    );
}

#[test]
fn double_alternative() {
    let v = Num::new(5.25).unwrap();

    assert_eq!(get_at::<At<1>, _>(&v), Ok(5.25));
    assert_eq!(get::<f64, _, _>(&v), Ok(5.25));
}

#[test]
fn default_is_empty() {
    let v = Num::empty().unwrap();

    assert!(!v.holds_value());
    assert_eq!(get::<i32, _, _>(&v), Err(VariantError::ValuelessAccess));
    assert_eq!(get_at::<At<1>, _>(&v), Err(VariantError::ValuelessAccess));
}

#[test]
fn swap_exchanges_alternatives() {
    let mut v = Num::new(5).unwrap();
    let mut w = Num::new(5.25).unwrap();

    v.swap(&mut w);

    assert_eq!(v.index(), Some(1));
    assert_eq!(w.index(), Some(0));
    assert_eq!(v.get::<f64, _>(), Ok(5.25));
    assert_eq!(w.get::<i32, _>(), Ok(5));
}

#[test]
fn swap_with_empty() {
    let mut v = Num::new(5).unwrap();
    let mut w = Num::empty().unwrap();

    v.swap(&mut w);

    assert!(v.is_valueless());
    assert_eq!(w.get::<i32, _>(), Ok(5));
}

#[test]
fn assign_over_a_different_alternative() {
    let mut v = Num::new(5).unwrap();

    v.set(5.25);

    assert!(v.holds_value());
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.type_name(), Some("f64"));
}

#[test]
fn duplicate_types_are_rejected() {
    assert_eq!(
        Variant::<(u8, String, u8)>::empty().err(),
        Some(VariantError::DuplicateAlternativeType {
            first: 0,
            second: 2,
            type_name: "u8",
        })
    );
}

#[test]
fn destructor_runs_once_on_replace() {
    let drops = Rc::new(Cell::new(0));
    let clones = Rc::new(Cell::new(0));

    let mut v = Variant::<(Tracked, u8)>::new(Tracked::new(&drops, &clones)).unwrap();
    assert_eq!(drops.get(), 0);

    v.set(1u8);
    assert_eq!(drops.get(), 1);

    drop(v);
    assert_eq!(drops.get(), 1);
}

#[test]
fn destructor_runs_once_on_drop() {
    let drops = Rc::new(Cell::new(0));
    let clones = Rc::new(Cell::new(0));

    {
        let _v = Variant::<(u8, Tracked)>::new(Tracked::new(&drops, &clones)).unwrap();
    }

    assert_eq!(drops.get(), 1);
}

#[test]
fn same_alternative_assignment_drops_the_old_value() {
    let drops = Rc::new(Cell::new(0));
    let clones = Rc::new(Cell::new(0));

    let mut v = Variant::<(Tracked, u8)>::new(Tracked::new(&drops, &clones)).unwrap();
    v.set(Tracked::new(&drops, &clones));

    assert_eq!(v.index(), Some(0));
    assert_eq!(drops.get(), 1);

    drop(v);
    assert_eq!(drops.get(), 2);
}

#[test]
fn clone_duplicates_with_clone() {
    let drops = Rc::new(Cell::new(0));
    let clones = Rc::new(Cell::new(0));

    let v = Variant::<(Tracked, u8)>::new(Tracked::new(&drops, &clones)).unwrap();
    let w = v.clone();

    assert_eq!(clones.get(), 1);
    assert_eq!(w.index(), Some(0));

    drop(v);
    drop(w);
    assert_eq!(drops.get(), 2);
}

#[test]
fn take_transfers_without_cloning() {
    let drops = Rc::new(Cell::new(0));
    let clones = Rc::new(Cell::new(0));

    let mut v = Variant::<(Tracked, u8)>::new(Tracked::new(&drops, &clones)).unwrap();
    let w = v.take();

    assert_eq!(clones.get(), 0);
    assert!(v.is_valueless());
    assert!(w.holds::<Tracked>());

    drop(v);
    assert_eq!(drops.get(), 0);
    drop(w);
    assert_eq!(drops.get(), 1);
}

/// Keeps its allocation when assigned from another `Pooled` through `clone_from`.
#[derive(Debug)]
struct Pooled {
    drops: Rc<Cell<usize>>,
    buf: Vec<u8>,
}

impl Clone for Pooled {
    fn clone(&self) -> Self {
        Pooled {
            drops: self.drops.clone(),
            buf: self.buf.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
    }
}

impl Drop for Pooled {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn assign_same_alternative_reuses_the_value() {
    let drops = Rc::new(Cell::new(0));
    let pooled = |buf: &[u8]| Pooled {
        drops: drops.clone(),
        buf: buf.to_vec(),
    };

    let source = Variant::<(Pooled, u8)>::new(pooled(b"abc")).unwrap();
    let mut target = Variant::<(Pooled, u8)>::new(pooled(b"xyz")).unwrap();

    target.assign(&source);

    assert_eq!(drops.get(), 0);
    assert_eq!(target.get_ref::<Pooled, _>().map(|p| p.buf.as_slice()), Ok(&b"abc"[..]));

    drop(source);
    drop(target);
    assert_eq!(drops.get(), 2);
}

#[test]
fn clone_of_empty_is_empty() {
    let v = Variant::<(String, u8)>::empty().unwrap();

    assert!(v.clone().is_valueless());
}

#[test]
fn sort_by_fallible_comparison() {
    let mut values = vec![
        Num::new(3).unwrap(),
        Num::new(1).unwrap(),
        Num::new(2).unwrap(),
    ];

    values.sort_by(|a, b| a.try_partial_cmp(b).unwrap().unwrap());

    let sorted: Vec<i32> = values.iter().map(|v| v.get::<i32, _>().unwrap()).collect();
    assert_eq!(sorted, vec![1, 2, 3]);
}

#[test]
fn ten_alternatives() {
    type Wide = (u8, u16, u32, u64, i8, i16, i32, i64, String, char);

    let v = Variant::<Wide>::new('z').unwrap();

    assert_eq!(v.index(), Some(9));
    assert_eq!(v.get::<char, _>(), Ok('z'));
}
