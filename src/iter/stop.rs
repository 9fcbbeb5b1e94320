use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{Sequence, Setup};

/* Stoppable */

/// Sequence returned by [`Sequence::stoppable`].
pub struct Stoppable<S> {
    base: S,
    handle: StopHandle,
}

impl<S> Stoppable<S> {
    pub fn new(base: S) -> Self {
        Self {
            base,
            handle: StopHandle::default(),
        }
    }

    /// Handle that stops this sequence.
    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }
}

impl<S> Sequence for Stoppable<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&self) -> Option<Self::Item> {
        if self.handle.is_stopped() {
            None
        } else {
            self.base.pull()
        }
    }

    fn setup(&self) -> Setup {
        self.base.setup()
    }
}

/* StopHandle */

/// Cooperative stop signal for a [`Stoppable`] sequence. Stopping is
/// permanent; values pulled before the stop are still reduced.
#[derive(Debug, Default, Clone)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}
