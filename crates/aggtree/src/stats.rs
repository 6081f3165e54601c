use aggtree_stats::Sketch;
use core::{cell::Cell, fmt};

/// Stats for [AggregationTree](crate::AggregationTree)
#[derive(Clone, Default)]
pub struct Stats {
    /// A sketch for recording latencies of building the tree
    pub build: Sketch,
    /// A sketch for recording latencies of range queries
    pub query: Sketch,
    /// A sketch for recording latencies of point updates
    pub set: Sketch,
    /// Number of combine calls issued by the tree
    pub combine_ops: Cell<u64>,
}

impl Stats {
    #[inline]
    pub(crate) fn bump_combine(&self) {
        self.combine_ops.set(self.combine_ops.get() + 1);
    }
}

impl fmt::Debug for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AggregationTree Stats")
            .field("build", &self.build.percentiles())
            .field("query", &self.query.percentiles())
            .field("set", &self.set.percentiles())
            .field("combine ops", &self.combine_ops.get())
            .finish()
    }
}
