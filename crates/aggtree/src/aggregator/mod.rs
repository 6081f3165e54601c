use core::{fmt, marker::PhantomData};

/// Incremental MIN and MAX aggregation
pub mod min_max;
/// Incremental SUM aggregation
pub mod sum;

/// Aggregation interface used by [AggregationTree](crate::AggregationTree)
///
/// An aggregator lifts every input element into a [Self::Partial] aggregate exactly once and
/// merges neighbouring partial aggregates through [Aggregator::combine].
///
/// `combine` must be associative. It is not required to be commutative: the tree always
/// passes the partial covering the lower indices as `a` and the one covering the higher
/// indices as `b`.
///
/// # Example
///
/// A SUM aggregator over `u32` input that widens into `u64` partials:
/// ```
/// use aggtree::{AggregationTree, Aggregator};
///
/// #[derive(Debug, Clone, Copy)]
/// struct WideSum;
///
/// impl Aggregator for WideSum {
///     type Input = u32;
///     type Partial = u64;
///
///     fn lift(&self, input: &u32) -> u64 {
///         u64::from(*input)
///     }
///
///     fn combine(&self, a: &u64, b: &u64) -> u64 {
///         a + b
///     }
/// }
///
/// let tree = AggregationTree::new(&[u32::MAX, u32::MAX], WideSum);
/// assert_eq!(tree.total(), Some(2 * u64::from(u32::MAX)));
/// ```
pub trait Aggregator {
    /// Raw input element type
    type Input;
    /// Partial aggregate stored in every node of the tree
    type Partial: Clone;

    /// Lifts an input element into a [Self::Partial]
    fn lift(&self, input: &Self::Input) -> Self::Partial;

    /// Combines the partial aggregate of a left segment with the one of its right neighbour
    fn combine(&self, a: &Self::Partial, b: &Self::Partial) -> Self::Partial;
}

/// An [Aggregator] assembled from a mapper closure and an accumulator closure
pub struct FnAggregator<T, R, M, C> {
    mapper: M,
    accumulator: C,
    _marker: PhantomData<fn(&T) -> R>,
}

impl<T, R, M, C> FnAggregator<T, R, M, C>
where
    M: Fn(&T) -> R,
    C: Fn(&R, &R) -> R,
{
    /// Creates a new aggregator from `mapper` (lift) and `accumulator` (combine)
    pub fn new(mapper: M, accumulator: C) -> Self {
        Self {
            mapper,
            accumulator,
            _marker: PhantomData,
        }
    }
}

impl<T, R, M, C> Aggregator for FnAggregator<T, R, M, C>
where
    R: Clone,
    M: Fn(&T) -> R,
    C: Fn(&R, &R) -> R,
{
    type Input = T;
    type Partial = R;

    #[inline]
    fn lift(&self, input: &T) -> R {
        (self.mapper)(input)
    }

    #[inline]
    fn combine(&self, a: &R, b: &R) -> R {
        (self.accumulator)(a, b)
    }
}

impl<T, R, M: Clone, C: Clone> Clone for FnAggregator<T, R, M, C> {
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            accumulator: self.accumulator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, R, M, C> fmt::Debug for FnAggregator<T, R, M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAggregator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_aggregator_keeps_operand_order() {
        let agg = FnAggregator::new(
            |c: &char| c.to_string(),
            |a: &String, b: &String| format!("{a}{b}"),
        );
        let a = agg.lift(&'a');
        let b = agg.lift(&'b');
        assert_eq!(agg.combine(&a, &b), "ab");
        assert_eq!(agg.combine(&b, &a), "ba");
    }
}
