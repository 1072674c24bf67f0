//! The parameter set: a fixed, typed collection of slots
//!
//! A parameter set is a generated struct with one [`Slot`] per declared
//! identity (see [`param_set!`](crate::param_set!)). Membership is part of
//! the set's type: [`HasParam<P>`] is implemented exactly for the declared
//! identities, so `get`, `set`, `require` and mandatory checks on a foreign
//! identity — and merging a set that is not a subset of the target — are
//! compile-time errors, not runtime lookup misses.

use crate::error::ConfigError;
use crate::param::{ParamSpec, Slot};
use crate::raw::RawArgMap;

/// Witness that a parameter set's declared identities include `P`.
///
/// Implemented by the `param_set!` macro for each member; never implement
/// this by hand.
pub trait HasParam<P: ParamSpec> {
    fn slot(&self) -> &Slot<P>;
    fn slot_mut(&mut self) -> &mut Slot<P>;
}

/// Visitor over a set's slots in declaration order.
pub trait SlotVisitor {
    fn visit<P: ParamSpec>(&mut self, slot: &Slot<P>);
}

/// Source side of a merge: a set can merge itself into any target that
/// declares every identity this set declares. The `param_set!` macro
/// implements this with one `HasParam` bound per member, which is what makes
/// "other's identities must be a subset of self's" a compile-time check.
pub trait MergeInto<T> {
    fn merge_into(&self, target: &mut T);
}

/// A fixed-arity, typed parameter container.
///
/// Implemented by the `param_set!` macro. An empty set is `Default`; every
/// source loader builds a populated one via [`ParamSet::from_raw_map`].
pub trait ParamSet: Default + Sized {
    /// `(name, description)` pairs in declaration order.
    const DESCRIPTORS: &'static [(&'static str, &'static str)];

    /// Construct from a raw map: each declared identity looks up its name;
    /// present keys are converted and populated, absent keys stay default
    /// and unpopulated. A conversion failure aborts the whole construction.
    fn from_raw_map(raw: &RawArgMap) -> Result<Self, ConfigError>;

    /// Apply `visitor` to every slot in declaration order.
    fn for_each<V: SlotVisitor>(&self, visitor: &mut V);

    /// `(name, description)` pairs in declaration order.
    fn describe() -> &'static [(&'static str, &'static str)] {
        Self::DESCRIPTORS
    }

    /// The value of `P`, if any merged source populated it.
    fn get<P: ParamSpec>(&self) -> Option<&P::Value>
    where
        Self: HasParam<P>,
    {
        <Self as HasParam<P>>::slot(self).get()
    }

    /// Assign `P` directly. Used to pre-seed defaults before merging.
    fn set<P: ParamSpec>(&mut self, value: P::Value)
    where
        Self: HasParam<P>,
    {
        <Self as HasParam<P>>::slot_mut(self).assign(value);
    }

    /// The value of `P`, or [`ConfigError::MissingMandatory`] if no source
    /// populated it.
    fn require<P: ParamSpec>(&self) -> Result<&P::Value, ConfigError>
    where
        Self: HasParam<P>,
    {
        <Self as HasParam<P>>::slot(self)
            .get()
            .ok_or(ConfigError::MissingMandatory { name: P::NAME, kind: P::KIND })
    }

    /// Overwrite every slot whose identity is populated in `other`; slots
    /// unpopulated in `other`, and identities `other` does not declare, are
    /// untouched. Total — merging never fails. Callers merge sources in
    /// ascending precedence so later merges win.
    fn merge<S: MergeInto<Self>>(&mut self, other: &S) {
        other.merge_into(self);
    }

    /// Verify every identity in `M` (a tuple of identities declared in this
    /// set) was populated by some source. Stops at the first missing one.
    fn check_mandatory<M: MandatoryKeys<Self>>(&self) -> Result<(), ConfigError> {
        M::check(self)
    }
}

/// A tuple of identities to validate with [`ParamSet::check_mandatory`].
///
/// Implemented for tuples of up to eight [`ParamSpec`] types, each of which
/// must be declared in the set being checked.
pub trait MandatoryKeys<S> {
    fn check(set: &S) -> Result<(), ConfigError>;
}

macro_rules! impl_mandatory_keys {
    ($($p:ident),+) => {
        impl<S, $($p: ParamSpec),+> MandatoryKeys<S> for ($($p,)+)
        where
            $(S: HasParam<$p>,)+
        {
            fn check(set: &S) -> Result<(), ConfigError> {
                $(
                    if !<S as HasParam<$p>>::slot(set).is_populated() {
                        return Err(ConfigError::MissingMandatory {
                            name: $p::NAME,
                            kind: $p::KIND,
                        });
                    }
                )+
                Ok(())
            }
        }
    };
}

impl_mandatory_keys!(P1);
impl_mandatory_keys!(P1, P2);
impl_mandatory_keys!(P1, P2, P3);
impl_mandatory_keys!(P1, P2, P3, P4);
impl_mandatory_keys!(P1, P2, P3, P4, P5);
impl_mandatory_keys!(P1, P2, P3, P4, P5, P6);
impl_mandatory_keys!(P1, P2, P3, P4, P5, P6, P7);
impl_mandatory_keys!(P1, P2, P3, P4, P5, P6, P7, P8);

/// Pairwise-distinct check over declared parameter names, evaluated in a
/// generated `const` so a duplicate name fails the build.
#[doc(hidden)]
pub const fn names_distinct(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut k = 0;
    while k < a.len() {
        if a[k] != b[k] {
            return false;
        }
        k += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_names_accepted() {
        assert!(names_distinct(&["a", "b", "ab"]));
    }

    #[test]
    fn duplicate_names_rejected() {
        assert!(!names_distinct(&["a", "b", "a"]));
    }

    #[test]
    fn empty_and_single_are_trivially_distinct() {
        assert!(names_distinct(&[]));
        assert!(names_distinct(&["only"]));
    }
}
