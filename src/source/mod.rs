//! Source loaders: command line, environment, file
//!
//! Each loader reduces its medium to a [`RawArgMap`](crate::RawArgMap) and
//! delegates to [`ParamSet::from_raw_map`](crate::ParamSet::from_raw_map).
//! Loaders are single-pass and non-resumable: a conversion failure aborts
//! the load and no parameter set is produced. Precedence between sources is
//! entirely the caller's merge order.

pub mod cmd;
pub mod env;
pub mod file;

pub use cmd::{from_cmd, from_cmd_tokens};
pub use env::{from_env, from_env_entries};
pub use file::from_file;
