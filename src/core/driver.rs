use crate::{DefaultExecutor, Executor};

/// Deferred operation over a sequence that is run by an [`Executor`].
pub trait Driver: Sized {
    /// The sequence the operation drains.
    type Seq: ?Sized;

    /// The combiner the operation reduces with.
    type Op;

    /// Run the operation with the given executor.
    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<Self::Seq, Self::Op>;

    /// Run the operation with the [`DefaultExecutor`].
    fn exec(self) -> <DefaultExecutor as Executor<Self::Seq, Self::Op>>::Result
    where
        DefaultExecutor: Executor<Self::Seq, Self::Op>,
    {
        self.exec_with(DefaultExecutor::default())
    }
}
