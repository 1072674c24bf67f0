//! argmerge: statically-typed configuration aggregation
//!
//! Declares a compile-time-fixed set of named, typed parameters, populates
//! them from command-line tokens, environment variables and `KEY=VALUE`
//! files, and merges those sources under a caller-chosen precedence order
//! into one validated parameter set.
//!
//! Set membership is part of each set's type: reading, writing or
//! mandatory-checking a parameter a set does not declare is a compile-time
//! error, as is merging a set whose identities are not a subset of the
//! target's. There is no schema file and no runtime reflection.
//!
//! ```
//! use argmerge::{from_cmd_tokens, param, param_set, ParamSet};
//!
//! param!(pub Threads: i64, "threads", "Worker thread count");
//! param!(pub Verbose: bool, "verbose", "Enable verbose logging");
//!
//! param_set! {
//!     pub struct AppParams {
//!         threads: Threads,
//!         verbose: Verbose,
//!     }
//! }
//!
//! # fn main() -> Result<(), argmerge::ConfigError> {
//! let mut params = AppParams::default();
//! params.set::<Threads>(4);
//!
//! let cmd: AppParams = from_cmd_tokens(["threads=8", "verbose"])?;
//! params.merge(&cmd);
//!
//! assert_eq!(params.get::<Threads>(), Some(&8));
//! assert_eq!(params.get::<Verbose>(), Some(&true));
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod param;
pub mod raw;
pub mod set;
pub mod source;

mod macros;

pub use convert::{ConversionError, FromRawValue, ValueKind};
pub use error::ConfigError;
pub use param::{ParamSpec, Slot};
pub use raw::RawArgMap;
pub use set::{HasParam, MandatoryKeys, MergeInto, ParamSet, SlotVisitor};
pub use source::{from_cmd, from_cmd_tokens, from_env, from_env_entries, from_file};

#[doc(hidden)]
pub use set::names_distinct;
