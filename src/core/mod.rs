mod combiner;
mod driver;
mod executor;
mod folder;
mod into_seq;
mod sequence;
mod setup;

pub use combiner::Combiner;
pub use driver::Driver;
pub use executor::Executor;
pub use folder::{CombineFolder, Folder};
pub use into_seq::IntoSequence;
pub use sequence::{Pulls, Sequence};
pub use setup::Setup;
