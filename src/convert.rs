//! Raw-token to typed-value conversion
//!
//! Every parameter value type implements [`FromRawValue`]: a conversion from
//! the raw string a tokenizer produced into the declared semantic type.
//! Conversion is total for strings and booleans (well-formed input) and
//! partial for integers and floats.

use std::fmt;

use thiserror::Error;

use crate::error::ConfigError;

/// The four semantic kinds a parameter value can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    String,
    Boolean,
}

impl ValueKind {
    /// Stable lowercase label used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw token that could not be parsed as its target kind.
///
/// Carries no parameter identity; [`Slot`](crate::Slot) attaches the owning
/// parameter's name when lifting this into [`ConfigError::Conversion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {raw:?} as {kind}")]
pub struct ConversionError {
    pub raw: String,
    pub kind: ValueKind,
}

impl ConversionError {
    pub(crate) fn for_param(self, name: &'static str) -> ConfigError {
        ConfigError::Conversion { name, raw: self.raw, kind: self.kind }
    }
}

/// Types usable as parameter values.
///
/// Implemented for exactly `i64`, `f64`, `String` and `bool`; the set is
/// closed on purpose — a parameter declares one of these four kinds and
/// nothing else.
pub trait FromRawValue: Sized + Clone + Default + fmt::Debug + fmt::Display {
    /// The semantic kind this type represents.
    const KIND: ValueKind;

    /// Convert a raw token into a typed value.
    fn from_raw(raw: &str) -> Result<Self, ConversionError>;
}

impl FromRawValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_raw(raw: &str) -> Result<Self, ConversionError> {
        raw.parse().map_err(|_| ConversionError { raw: raw.to_string(), kind: Self::KIND })
    }
}

impl FromRawValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_raw(raw: &str) -> Result<Self, ConversionError> {
        raw.parse().map_err(|_| ConversionError { raw: raw.to_string(), kind: Self::KIND })
    }
}

impl FromRawValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_raw(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_string())
    }
}

impl FromRawValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    /// `""` and `"true"` are true so a bare flag works; `"false"` is false;
    /// anything else is re-read as an integer and coerced (non-zero is true).
    fn from_raw(raw: &str) -> Result<Self, ConversionError> {
        match raw {
            "" | "true" => Ok(true),
            "false" => Ok(false),
            other => other
                .parse::<i64>()
                .map(|n| n != 0)
                .map_err(|_| ConversionError { raw: other.to_string(), kind: Self::KIND }),
        }
    }
}
