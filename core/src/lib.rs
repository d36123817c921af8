//! # sweepr-core
//!
//! The host-liveness sweep engine.
//!
//! * [`probe`]: asks a single address whether it is up.
//! * [`sweep`]: walks a block, aggregates answers, reports progress.
//! * [`writer`]: stores the live hosts on disk.

pub mod probe;
pub mod sweep;
pub mod writer;

pub use probe::{PingProber, Prober};
pub use sweep::{LiveHostSet, SilentObserver, SweepObserver, SweepOutcome, Sweeper};
