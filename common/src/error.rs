use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a sweep.
///
/// A host that does not answer is *not* an error: probes only ever yield
/// `true` or `false`.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Invalid IP block '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("Failed to write live hosts to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    pub fn invalid_spec(spec: &str, reason: impl ToString) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
