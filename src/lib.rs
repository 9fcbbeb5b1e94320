mod core;
mod error;
mod executor;
mod iter;
mod misc;
mod std;

pub use self::core::{
    CombineFolder, Combiner, Driver, Executor, Folder, IntoSequence, Pulls, Sequence, Setup,
};
pub use self::error::{Error, Result};
#[cfg(feature = "rayon-executor")]
pub use self::executor::Rayon;
pub use self::executor::{
    default_workers, DefaultExecutor, Sequential, Threads, DEFAULT_WORKERS_PER_CPU,
};
pub use self::iter::{
    chain::{joint, Chain, Joint},
    filter::Filter,
    inspect::Inspect,
    map::Map,
    reduce::{parallel_reduce, reduce, Reduce},
    setup::WithWorkers,
    stop::{StopHandle, Stoppable},
};
#[cfg(feature = "channel")]
pub use self::std::{channel, unbounded, ChannelSequence};
pub use self::std::{
    from_fn, from_iter, IterSequence, RangeSequence, SliceSequence, VecSequence,
};
