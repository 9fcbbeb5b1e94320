use std::sync::Mutex;

use futures::{
    channel::mpsc::{self, Receiver, Sender, UnboundedReceiver, UnboundedSender},
    executor::block_on,
    stream::{Fuse, Stream, StreamExt},
};

use crate::{misc::lock, IntoSequence, Sequence};

/// Sequence that receives its values from a stream, usually the receiving
/// half of a [`futures::channel::mpsc`] channel.
///
/// A pull blocks the calling thread until the next value arrives. The
/// sequence is exhausted once the stream ends, i.e. when all senders of a
/// channel are dropped and its buffer is drained. Pulling on a thread that
/// is also responsible for sending will therefore block forever.
pub struct ChannelSequence<R> {
    receiver: Mutex<Fuse<R>>,
}

impl<R> ChannelSequence<R>
where
    R: Stream + Unpin,
{
    pub fn new(receiver: R) -> Self {
        Self {
            receiver: Mutex::new(receiver.fuse()),
        }
    }
}

/// Creates a bounded channel whose receiving half is a sequence.
pub fn channel<T>(buffer: usize) -> (Sender<T>, ChannelSequence<Receiver<T>>) {
    let (sender, receiver) = mpsc::channel(buffer);

    (sender, ChannelSequence::new(receiver))
}

/// Creates an unbounded channel whose receiving half is a sequence.
pub fn unbounded<T>() -> (UnboundedSender<T>, ChannelSequence<UnboundedReceiver<T>>) {
    let (sender, receiver) = mpsc::unbounded();

    (sender, ChannelSequence::new(receiver))
}

impl<T> IntoSequence for Receiver<T> {
    type Item = T;
    type Seq = ChannelSequence<Self>;

    fn into_seq(self) -> Self::Seq {
        ChannelSequence::new(self)
    }
}

impl<T> IntoSequence for UnboundedReceiver<T> {
    type Item = T;
    type Seq = ChannelSequence<Self>;

    fn into_seq(self) -> Self::Seq {
        ChannelSequence::new(self)
    }
}

impl<R> Sequence for ChannelSequence<R>
where
    R: Stream + Unpin,
{
    type Item = R::Item;

    fn pull(&self) -> Option<Self::Item> {
        let mut receiver = lock(&self.receiver);

        block_on(receiver.next())
    }
}
