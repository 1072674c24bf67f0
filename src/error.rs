//! Error types for construction, loading and validation
//!
//! All three kinds are unrecoverable at the point of detection: a loader that
//! hits one produces no parameter set. Whether to recover (say, proceed
//! without an optional config file on [`ConfigError::SourceUnavailable`]) is
//! the caller's call, not ours.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::convert::ValueKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A raw token could not be parsed as the parameter's declared type.
    #[error("invalid value for \"{name}\": cannot parse {raw:?} as {kind}")]
    Conversion { name: &'static str, raw: String, kind: ValueKind },

    /// A file source could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A mandatory parameter was never populated by any merged source.
    #[error("missing mandatory argument \"{name}\" ({kind})")]
    MissingMandatory { name: &'static str, kind: ValueKind },
}
