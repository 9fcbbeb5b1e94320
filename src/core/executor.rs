/// Strategy used to reduce a sequence of type `S` with a combiner of type
/// `C`.
///
/// The executor only borrows the sequence and the combiner for the duration
/// of [`exec`]; no reference is retained after it returns. Each executor
/// states what it needs from `S` and `C`: the sequential one nothing beyond
/// [`Sequence`](crate::Sequence) and [`Combiner`](crate::Combiner), the
/// parallel ones that both can be shared between threads.
///
/// [`exec`]: #tymethod.exec
pub trait Executor<S, C>: Sized
where
    S: ?Sized,
    C: ?Sized,
{
    /// What [`exec`] returns: the reduced value itself, or a `Result` for
    /// executors that can fail before reducing anything.
    ///
    /// [`exec`]: #tymethod.exec
    type Result;

    /// Drains `sequence` and reduces all of its values with `combiner`.
    fn exec(self, sequence: &S, combiner: &C) -> Self::Result;
}
