/// The combiner is the binary operation of a reduction. It is used twice:
/// by each worker to fold the values it pulled into a partial result, and
/// by the executor to merge the partial results of all workers.
///
/// The operation must be associative,
/// `combine(combine(a, b), c) == combine(a, combine(b, c))`, for parallel
/// executors to compute the same value as a sequential fold. It should also
/// be commutative: workers pull values in no particular order, so with a
/// non-commutative operation the result depends on scheduling and is not
/// reproducible between runs. Neither property is checked.
///
/// Every `Fn(T, T) -> T` is a combiner.
pub trait Combiner<T> {
    /// Combine two values into one.
    fn combine(&self, left: T, right: T) -> T;
}

impl<T, F> Combiner<T> for F
where
    F: Fn(T, T) -> T,
{
    fn combine(&self, left: T, right: T) -> T {
        self(left, right)
    }
}
