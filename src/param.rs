//! Parameter identity and the per-field storage cell
//!
//! A [`ParamSpec`] is the compile-time identity of one configuration field:
//! a marker type carrying the lookup name, the help text and the value type
//! as constants. A [`Slot`] is the runtime cell a parameter set holds for
//! each of its identities: the value plus a populated flag.

use crate::convert::{FromRawValue, ValueKind};
use crate::error::ConfigError;
use crate::raw::RawArgMap;

/// Compile-time identity of one configuration field.
///
/// Declare these with the [`param!`](crate::param!) macro rather than by
/// hand; the macro also asserts at compile time that `NAME` and
/// `DESCRIPTION` are non-empty.
pub trait ParamSpec: 'static {
    /// The typed value this parameter holds.
    type Value: FromRawValue;

    /// Lookup key in raw argument maps, also used in diagnostics.
    const NAME: &'static str;

    /// Human-readable help text.
    const DESCRIPTION: &'static str;

    /// Semantic kind of [`Self::Value`], for error reporting.
    const KIND: ValueKind = <Self::Value as FromRawValue>::KIND;
}

/// Runtime storage for one parameter: a value and whether any source set it.
///
/// Starts default-initialized and unpopulated; populated by direct
/// assignment, by construction from a raw map, or by a merge.
pub struct Slot<P: ParamSpec> {
    value: P::Value,
    populated: bool,
}

impl<P: ParamSpec> Default for Slot<P> {
    fn default() -> Self {
        Slot { value: P::Value::default(), populated: false }
    }
}

impl<P: ParamSpec> Clone for Slot<P> {
    fn clone(&self) -> Self {
        Slot { value: self.value.clone(), populated: self.populated }
    }
}

impl<P: ParamSpec> std::fmt::Debug for Slot<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("name", &P::NAME)
            .field("value", &self.value)
            .field("populated", &self.populated)
            .finish()
    }
}

impl<P: ParamSpec> Slot<P> {
    /// The value, if some source populated it.
    pub fn get(&self) -> Option<&P::Value> {
        self.populated.then_some(&self.value)
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Assign directly and mark populated. Used for pre-seeded defaults.
    pub fn assign(&mut self, value: P::Value) {
        self.value = value;
        self.populated = true;
    }

    /// Populate from a raw map: absent key leaves the slot untouched, a
    /// present key converts the raw value (attaching this parameter's name
    /// to any conversion failure).
    pub fn populate_from(&mut self, raw: &RawArgMap) -> Result<(), ConfigError> {
        if let Some(token) = raw.get(P::NAME) {
            self.value = P::Value::from_raw(token).map_err(|e| e.for_param(P::NAME))?;
            self.populated = true;
        }
        Ok(())
    }

    /// Copy value and flag from `other` iff `other` is populated.
    /// Unpopulated sources never clobber an existing value.
    pub fn overwrite_from(&mut self, other: &Slot<P>) {
        if other.populated {
            self.value = other.value.clone();
            self.populated = true;
        }
    }
}
