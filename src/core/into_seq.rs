use super::Sequence;

/// `IntoSequence` implements the conversion to a [`Sequence`].
///
/// By implementing `IntoSequence` for a type, you define how it will be
/// transformed into a sequence. This is the pull-based counterpart of the
/// standard library's [`std::iter::IntoIterator`] trait. Every [`Sequence`]
/// converts into itself.
pub trait IntoSequence {
    /// The sequence type that will be created.
    type Seq: Sequence<Item = Self::Item>;

    /// The type of value the sequence will produce.
    type Item;

    /// Converts `self` into a sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullreduce::*;
    ///
    /// let seq = vec!["a", "b"].into_seq().chain(vec!["c"]);
    ///
    /// assert_eq!(seq.to_vec(), ["a", "b", "c"]);
    /// ```
    fn into_seq(self) -> Self::Seq;
}

impl<S> IntoSequence for S
where
    S: Sequence,
{
    type Seq = S;
    type Item = S::Item;

    fn into_seq(self) -> Self::Seq {
        self
    }
}
