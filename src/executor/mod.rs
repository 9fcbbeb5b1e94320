mod misc;
#[cfg(feature = "rayon-executor")]
mod rayon;
mod sequential;
mod threads;

pub use misc::{default_workers, DEFAULT_WORKERS_PER_CPU};
#[cfg(feature = "rayon-executor")]
pub use self::rayon::Rayon;
pub use sequential::Sequential;
pub use threads::Threads;

pub type DefaultExecutor = Threads;
