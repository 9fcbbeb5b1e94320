use crate::{Sequence, Setup};

/// Sequence returned by [`Sequence::with_workers`].
pub struct WithWorkers<S> {
    base: S,
    workers: usize,
}

impl<S> WithWorkers<S> {
    pub fn new(base: S, workers: usize) -> Self {
        Self { base, workers }
    }
}

impl<S> Sequence for WithWorkers<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        self.base.pull()
    }

    fn setup(&self) -> Setup {
        self.base.setup().merge(Setup {
            workers: Some(self.workers),
        })
    }
}
