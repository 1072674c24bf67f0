//! Environment snapshot loader

use crate::error::ConfigError;
use crate::raw::RawArgMap;
use crate::set::ParamSet;

/// Build a parameter set from an explicit snapshot of environment entries.
///
/// Taking the snapshot as a parameter instead of reading the process
/// environment keeps the loader testable with an injected fake environment.
/// Entries are consumed wholesale; no name-prefix filtering is applied.
pub fn from_env_entries<S, I, K, V>(entries: I) -> Result<S, ConfigError>
where
    S: ParamSet,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw = RawArgMap::new();
    for (key, value) in entries {
        // Rejoin and re-split so a key carrying a stray `=` behaves like the
        // equivalent command-line token.
        raw.insert_entry(key.as_ref(), value.as_ref());
    }
    tracing::debug!(entries = raw.len(), "captured environment snapshot");
    S::from_raw_map(&raw)
}

/// Build a parameter set from this process's environment.
pub fn from_env<S: ParamSet>() -> Result<S, ConfigError> {
    from_env_entries(std::env::vars())
}
