//! KEY=VALUE file loader

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::raw::RawArgMap;
use crate::set::ParamSet;

/// Build a parameter set from a text file with one `KEY` or `KEY=VALUE` per
/// line. No comments, no quoting, no escaping; blank lines are skipped.
///
/// Fails with [`ConfigError::SourceUnavailable`] if the file cannot be
/// opened or read. The handle is closed on every path, including failure.
pub fn from_file<S: ParamSet, P: AsRef<Path>>(path: P) -> Result<S, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw = RawArgMap::new();
    for line in content.lines() {
        // A blank line has an empty key part, which the tokenizer drops.
        raw.insert_token(line);
    }
    tracing::debug!(path = %path.display(), entries = raw.len(), "parsed config file");
    S::from_raw_map(&raw)
}
