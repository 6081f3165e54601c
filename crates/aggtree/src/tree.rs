use crate::{
    Error,
    aggregator::{Aggregator, FnAggregator},
};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::{
    fmt,
    ops::{Bound, RangeBounds},
};

#[cfg(feature = "profiler")]
use crate::stats::Stats;
#[cfg(feature = "profiler")]
use aggtree_stats::profile_scope;

/// Returns the slots of the left and right child of node `i`
#[inline]
const fn children(i: usize) -> (usize, usize) {
    let left = 2 * i + 1;
    (left, left + 1)
}

/// Same as `(l + r) / 2` without overflowing
#[inline]
const fn midpoint(l: usize, r: usize) -> usize {
    l + (r - l) / 2
}

/// A fixed-size aggregation tree (segment tree)
///
/// The tree is built once over `n` elements and supports range queries and point updates in
/// `O(log n)` time. Leaves hold [Aggregator::lift] of their element and every internal node
/// holds [Aggregator::combine] of its two children, left before right.
///
/// Nodes live in a single flat buffer of `4n` slots: the root is slot `0` and node `i` has its
/// children in slots `2i + 1` and `2i + 2`. A node covering the inclusive range `[l, r]` splits
/// it at `m = (l + r) / 2` into `[l, m]` and `[m + 1, r]`.
#[derive(Clone)]
pub struct AggregationTree<A: Aggregator> {
    tree: Vec<A::Partial>,
    n: usize,
    aggregator: A,
    #[cfg(feature = "profiler")]
    stats: Stats,
}

impl<A: Aggregator> AggregationTree<A> {
    /// Builds a tree over `values` using the given aggregator
    ///
    /// Every element is lifted exactly once. Runs in `O(n)` and allocates `4n` partial
    /// aggregates. An empty slice produces an empty tree on which every query fails.
    pub fn new(values: &[A::Input], aggregator: A) -> Self {
        #[cfg(feature = "profiler")]
        let stats = Stats::default();
        #[cfg(feature = "profiler")]
        profile_scope!(&stats.build);

        let n = values.len();
        // Slots start out as the lifted first element, which is also leaf 0's final value.
        let tree = match values.first() {
            Some(first) => vec![aggregator.lift(first); n << 2],
            None => Vec::new(),
        };
        let mut this = Self {
            tree,
            n,
            aggregator,
            #[cfg(feature = "profiler")]
            stats,
        };
        if n > 0 {
            this.build(values, 0, 0, n - 1);
        }
        log::debug!(
            "built aggregation tree with {} leaves over {} slots",
            n,
            this.tree.len()
        );
        this
    }

    /// Builds a tree from any sequence of elements, e.g., a linked list or a deque
    ///
    /// The elements are collected once before building.
    pub fn from_iter_with<I>(iter: I, aggregator: A) -> Self
    where
        I: IntoIterator<Item = A::Input>,
    {
        let values: Vec<A::Input> = iter.into_iter().collect();
        Self::new(&values, aggregator)
    }

    fn build(&mut self, values: &[A::Input], i: usize, l: usize, r: usize) {
        if l == r {
            if l != 0 {
                self.tree[i] = self.aggregator.lift(&values[l]);
            }
            return;
        }
        let m = midpoint(l, r);
        let (left, right) = children(i);
        self.build(values, left, l, m);
        self.build(values, right, m + 1, r);
        self.tree[i] = self.combine(&self.tree[left], &self.tree[right]);
    }

    /// Returns the number of elements the tree was built over
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the tree holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns a reference to the aggregator of the tree
    #[inline]
    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// Returns the partial aggregate of all elements or `None` if the tree is empty
    ///
    /// Runs in `O(1)`.
    #[inline]
    pub fn total(&self) -> Option<A::Partial> {
        self.tree.first().cloned()
    }

    /// Combines the elements in the inclusive range `[l, r]`
    ///
    /// Returns [Error::InvalidRange] if `l > r` or `r >= len`. Runs in `O(log n)`.
    pub fn query(&self, l: usize, r: usize) -> Result<A::Partial, Error> {
        if l > r || r >= self.n {
            return Err(self.invalid_range(Bound::Included(l), Bound::Included(r)));
        }
        Ok(self.fold(l, r))
    }

    /// Combines the elements within `range`
    ///
    /// Accepts any range syntax, e.g., `2..5`, `2..=4`, `..3` or `..`.
    /// Returns [Error::InvalidRange] if the range is empty or reaches outside the tree.
    pub fn query_range<B>(&self, range: B) -> Result<A::Partial, Error>
    where
        B: RangeBounds<usize>,
    {
        let (start, l) = match range.start_bound() {
            Bound::Included(&s) => (Bound::Included(s), Some(s)),
            Bound::Excluded(&s) => (Bound::Excluded(s), s.checked_add(1)),
            Bound::Unbounded => (Bound::Included(0), Some(0)),
        };
        let (end, r) = match range.end_bound() {
            Bound::Included(&e) => (Bound::Included(e), Some(e)),
            Bound::Excluded(&e) => (Bound::Excluded(e), e.checked_sub(1)),
            Bound::Unbounded => (Bound::Excluded(self.n), self.n.checked_sub(1)),
        };
        match (l, r) {
            (Some(l), Some(r)) if l <= r && r < self.n => Ok(self.fold(l, r)),
            _ => Err(self.invalid_range(start, end)),
        }
    }

    // Caller has checked l <= r < n.
    fn fold(&self, l: usize, r: usize) -> A::Partial {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.query);

        self.query_node(0, 0, self.n - 1, l, r)
    }

    /// Returns the partial aggregate of the element at `index`
    pub fn get(&self, index: usize) -> Result<A::Partial, Error> {
        if index >= self.n {
            return Err(self.index_out_of_bounds(index));
        }
        Ok(self.query_node(0, 0, self.n - 1, index, index))
    }

    // [l, r] must lie within [cl, cr], which `query` guarantees for the root.
    fn query_node(&self, i: usize, cl: usize, cr: usize, l: usize, r: usize) -> A::Partial {
        debug_assert!(cl <= l && l <= r && r <= cr);
        if l == cl && r == cr {
            return self.tree[i].clone();
        }
        let m = midpoint(cl, cr);
        let (left, right) = children(i);
        if m >= r {
            self.query_node(left, cl, m, l, r)
        } else if m < l {
            self.query_node(right, m + 1, cr, l, r)
        } else {
            let lhs = self.query_node(left, cl, m, l, m);
            let rhs = self.query_node(right, m + 1, cr, m + 1, r);
            self.combine(&lhs, &rhs)
        }
    }

    /// Replaces the element at `index` and refreshes all of its ancestors
    ///
    /// Returns [Error::IndexOutOfBounds] without modifying the tree if `index >= len`.
    /// Runs in `O(log n)`.
    pub fn set(&mut self, index: usize, value: A::Input) -> Result<(), Error> {
        if index >= self.n {
            return Err(self.index_out_of_bounds(index));
        }

        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.set);

        log::trace!("set leaf {} of {}", index, self.n);
        let leaf = self.aggregator.lift(&value);
        self.update(0, 0, self.n - 1, index, leaf);
        Ok(())
    }

    fn update(&mut self, i: usize, l: usize, r: usize, index: usize, leaf: A::Partial) {
        if l == r {
            debug_assert_eq!(l, index);
            self.tree[i] = leaf;
            return;
        }
        let m = midpoint(l, r);
        let (left, right) = children(i);
        if index <= m {
            self.update(left, l, m, index, leaf);
        } else {
            self.update(right, m + 1, r, index, leaf);
        }
        self.tree[i] = self.combine(&self.tree[left], &self.tree[right]);
    }

    #[inline]
    fn combine(&self, a: &A::Partial, b: &A::Partial) -> A::Partial {
        #[cfg(feature = "profiler")]
        self.stats.bump_combine();

        self.aggregator.combine(a, b)
    }

    fn invalid_range(&self, start: Bound<usize>, end: Bound<usize>) -> Error {
        log::debug!("rejected range {:?}..{:?} for size {}", start, end, self.n);
        Error::InvalidRange {
            start,
            end,
            len: self.n,
        }
    }

    fn index_out_of_bounds(&self, index: usize) -> Error {
        log::debug!("rejected index {} for size {}", index, self.n);
        Error::IndexOutOfBounds { index, len: self.n }
    }

    /// Returns a reference to the profiling stats of the tree
    #[cfg(feature = "profiler")]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl<T, R, M, C> AggregationTree<FnAggregator<T, R, M, C>>
where
    R: Clone,
    M: Fn(&T) -> R,
    C: Fn(&R, &R) -> R,
{
    /// Builds a tree over `values` from a `mapper` that lifts every element and an associative
    /// `accumulator` that combines two neighbouring results
    ///
    /// ```
    /// use aggtree::AggregationTree;
    ///
    /// let words = ["a", "bb", "ccc"];
    /// let tree = AggregationTree::from_fns(
    ///     &words,
    ///     |w: &&str| w.len(),
    ///     |a: &usize, b: &usize| a + b,
    /// );
    /// assert_eq!(tree.query(1, 2), Ok(5));
    /// ```
    pub fn from_fns(values: &[T], mapper: M, accumulator: C) -> Self {
        Self::new(values, FnAggregator::new(mapper, accumulator))
    }
}

impl<A> fmt::Debug for AggregationTree<A>
where
    A: Aggregator + fmt::Debug,
    A::Partial: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregationTree")
            .field("len", &self.n)
            .field("aggregator", &self.aggregator)
            .field("total", &self.total())
            .finish()
    }
}
