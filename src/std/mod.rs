#[cfg(feature = "channel")]
mod channel;
mod iter;
mod range;
mod slice;
mod vec;

#[cfg(feature = "channel")]
pub use channel::{channel, unbounded, ChannelSequence};
pub use iter::{from_fn, from_iter, IterSequence};
pub use range::RangeSequence;
pub use slice::SliceSequence;
pub use vec::VecSequence;
