//! # sweepr-common
//!
//! Shared building blocks of the sweep engine: the address model, the error
//! type, configuration, and the logging macros every crate reports through.

pub mod config;
pub mod error;
pub mod log;
pub mod network;

pub use error::SweepError;
