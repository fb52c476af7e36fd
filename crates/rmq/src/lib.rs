mod cartesian;
mod lca;
mod naive;
mod pm_one;
mod sparse_table;
mod tree;
mod util;

use std::ops::Range;

pub use cartesian::CartesianRmq;
pub use lca::Lca;
pub use naive::NaiveRmq;
pub use pm_one::PlusMinusOneRmq;
pub use sparse_table::SparseTableRmq;
pub use tree::{NodeId, Tree};

/// Static RMQ (Range Minimum Query) interface.
///
/// - The engine borrows the input slice; it must not outlive it, and the
///   input must not be empty.
/// - Query ranges are half-open: `[l, r)`.
/// - The answer is the argmin index; ties are broken by the smallest index.
/// - An empty or out-of-bounds range is a contract violation and panics.
pub trait StaticRmq<'a>: Sized {
    fn new(values: &'a [i64]) -> Self;
    fn argmin(&self, range: Range<usize>) -> usize;
}
