//! Command-line token loader

use crate::error::ConfigError;
use crate::raw::RawArgMap;
use crate::set::ParamSet;

/// Build a parameter set from command-line tokens (program name excluded).
///
/// Each token is `KEY=VALUE` or a bare `KEY` flag; anything after the first
/// `=` is kept verbatim in the value.
pub fn from_cmd_tokens<S, I>(tokens: I) -> Result<S, ConfigError>
where
    S: ParamSet,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut raw = RawArgMap::new();
    for token in tokens {
        raw.insert_token(token.as_ref());
    }
    tracing::debug!(entries = raw.len(), "tokenized command line");
    S::from_raw_map(&raw)
}

/// Build a parameter set from this process's argument list.
pub fn from_cmd<S: ParamSet>() -> Result<S, ConfigError> {
    from_cmd_tokens(std::env::args().skip(1))
}
