use super::Aggregator;

macro_rules! min_max_impl {
    ($struct:tt, $type:ty, $op:ident) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        impl Aggregator for $struct {
            type Input = $type;
            type Partial = $type;

            #[inline]
            fn lift(&self, input: &Self::Input) -> Self::Partial {
                *input
            }

            #[inline]
            fn combine(&self, a: &Self::Partial, b: &Self::Partial) -> Self::Partial {
                (*a).$op(*b)
            }
        }
    };
}

min_max_impl!(U32MinAggregator, u32, min);
min_max_impl!(U64MinAggregator, u64, min);
min_max_impl!(I32MinAggregator, i32, min);
min_max_impl!(I64MinAggregator, i64, min);
min_max_impl!(F32MinAggregator, f32, min);
min_max_impl!(F64MinAggregator, f64, min);

min_max_impl!(U32MaxAggregator, u32, max);
min_max_impl!(U64MaxAggregator, u64, max);
min_max_impl!(I32MaxAggregator, i32, max);
min_max_impl!(I64MaxAggregator, i64, max);
min_max_impl!(F32MaxAggregator, f32, max);
min_max_impl!(F64MaxAggregator, f64, max);

#[cfg(test)]
mod tests {
    use crate::AggregationTree;

    use super::*;

    #[test]
    fn min_test() {
        let mut tree = AggregationTree::new(&[4u64, 3, 2, 8, 5, 1, 2, 1], U64MinAggregator);
        assert_eq!(tree.query(0, 3), Ok(2));
        assert_eq!(tree.query(3, 4), Ok(5));
        assert_eq!(tree.total(), Some(1));

        tree.set(2, 9).unwrap();
        assert_eq!(tree.query(0, 3), Ok(3));
    }

    #[test]
    fn max_test() {
        let mut tree = AggregationTree::new(&[4i32, -3, 2, 8, 5, 1, 2, 1], I32MaxAggregator);
        assert_eq!(tree.query(1, 7), Ok(8));
        tree.set(3, -1).unwrap();
        assert_eq!(tree.query(1, 7), Ok(5));
        assert_eq!(tree.query(1, 2), Ok(2));
    }

    #[test]
    fn float_max_test() {
        let tree = AggregationTree::new(&[1.5f32, -2.0, 9.25], F32MaxAggregator);
        assert_eq!(tree.total(), Some(9.25));
        assert_eq!(tree.query(0, 1), Ok(1.5));
    }
}
