use super::Aggregator;

macro_rules! sum_impl {
    ($struct:tt, $type:ty) => {
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
                *a + *b
            }
        }
    };
}

sum_impl!(U32SumAggregator, u32);
sum_impl!(U64SumAggregator, u64);
sum_impl!(I32SumAggregator, i32);
sum_impl!(I64SumAggregator, i64);
sum_impl!(F32SumAggregator, f32);
sum_impl!(F64SumAggregator, f64);

#[cfg(test)]
mod tests {
    use crate::AggregationTree;

    use super::*;

    #[test]
    fn sum_test() {
        let tree = AggregationTree::new(&[-3i64, 7, -2, 9], I64SumAggregator);
        assert_eq!(tree.query(0, 3), Ok(11));
        assert_eq!(tree.query(0, 2), Ok(2));
        assert_eq!(tree.query(2, 2), Ok(-2));
    }

    #[test]
    fn float_sum_test() {
        let tree = AggregationTree::new(&[0.5f64, 1.5, 2.0], F64SumAggregator);
        assert_eq!(tree.total(), Some(4.0));
        assert_eq!(tree.query(1, 2), Ok(3.5));
    }
}
