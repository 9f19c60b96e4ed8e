/// A pure, deterministic evaluator: `(context, rowIndex, sequence) -> cost`.
///
/// Determinism is required for [`crate::cost_cache::CostCache`] correctness: equal
/// sequences must yield equal costs (`spec.md` §3). Cost values are compared with
/// strict `<`; returning `NaN` is undefined behavior, exactly as in the spec.
pub trait CostFunction<T, C> {
    fn evaluate(&self, context: &C, row: usize, sequence: &[T]) -> f64;
}

impl<T, C, F> CostFunction<T, C> for F
where
    F: Fn(&C, usize, &[T]) -> f64,
{
    fn evaluate(&self, context: &C, row: usize, sequence: &[T]) -> f64 {
        self(context, row, sequence)
    }
}
