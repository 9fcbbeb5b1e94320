use crate::{Sequence, Setup};

/* Inspect */

/// Sequence returned by [`Sequence::inspect`].
pub struct Inspect<S, O> {
    base: S,
    operation: O,
}

impl<S, O> Inspect<S, O> {
    pub fn new(base: S, operation: O) -> Self {
        Self { base, operation }
    }
}

impl<S, O> Sequence for Inspect<S, O>
where
    S: Sequence,
    O: Fn(&S::Item),
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        let item = self.base.pull()?;

        (self.operation)(&item);

        Some(item)
    }

    fn setup(&self) -> Setup {
        self.base.setup()
    }
}
