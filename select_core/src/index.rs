use std::fmt;

use crate::select::{sealed, Selector};

/// This type is used to 'index' into a tuple of generics.
/// `At<0>` selects the first generic, `At<1>` the second, and so on.
/// See [`Select`](crate::select::Select) what Generic it selects.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Default, Clone, Copy)]
pub struct At<const N: usize>;

impl<const N: usize> sealed::Sealed for At<N> {}

impl<const N: usize> Selector for At<N> {
    const INDEX: usize = N;
}

impl<const N: usize> fmt::Debug for At<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "At<{}>", N)
    }
}
