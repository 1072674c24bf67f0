//! Declaration macros
//!
//! [`param!`] declares one parameter identity; [`param_set!`] declares a
//! typed set over a list of identities. Both push their invariants to
//! compile time: names and descriptions must be non-empty string literals,
//! an identity declared twice in one set collides on its `HasParam` impl,
//! and two identities sharing a name trip a `const` assertion.

/// Declare a parameter identity: a marker type with a name, a description
/// and a value type (`i64`, `f64`, `String` or `bool`).
///
/// ```
/// argmerge::param!(pub Threads: i64, "threads", "Worker thread count");
/// ```
#[macro_export]
macro_rules! param {
    ($(#[$meta:meta])* $vis:vis $ident:ident : $ty:ty, $name:literal, $desc:literal $(,)?) => {
        $(#[$meta])*
        #[doc = $desc]
        #[derive(Debug, Clone, Copy)]
        $vis struct $ident;

        impl $crate::ParamSpec for $ident {
            type Value = $ty;
            const NAME: &'static str = $name;
            const DESCRIPTION: &'static str = $desc;
        }

        const _: () = {
            assert!(!$name.is_empty(), "parameter name must be non-empty");
            assert!(!$desc.is_empty(), "parameter description must be non-empty");
        };
    };
}

/// Declare a parameter set: a struct with one typed slot per identity.
///
/// The generated type implements [`ParamSet`](crate::ParamSet), one
/// [`HasParam`](crate::HasParam) per member, and
/// [`MergeInto`](crate::MergeInto) for every target set declaring a
/// superset of its identities.
///
/// ```
/// argmerge::param!(pub Threads: i64, "threads", "Worker thread count");
/// argmerge::param!(pub Verbose: bool, "verbose", "Enable verbose logging");
///
/// argmerge::param_set! {
///     pub struct AppParams {
///         threads: Threads,
///         verbose: Verbose,
///     }
/// }
/// ```
#[macro_export]
macro_rules! param_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $set:ident {
            $( $field:ident : $param:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $set {
            $( $field: $crate::Slot<$param>, )+
        }

        $(
            impl $crate::HasParam<$param> for $set {
                fn slot(&self) -> &$crate::Slot<$param> {
                    &self.$field
                }

                fn slot_mut(&mut self) -> &mut $crate::Slot<$param> {
                    &mut self.$field
                }
            }
        )+

        impl $crate::ParamSet for $set {
            const DESCRIPTORS: &'static [(&'static str, &'static str)] = &[
                $(
                    (
                        <$param as $crate::ParamSpec>::NAME,
                        <$param as $crate::ParamSpec>::DESCRIPTION,
                    ),
                )+
            ];

            fn from_raw_map(
                raw: &$crate::RawArgMap,
            ) -> ::std::result::Result<Self, $crate::ConfigError> {
                let mut set = <Self as ::std::default::Default>::default();
                $( set.$field.populate_from(raw)?; )+
                ::std::result::Result::Ok(set)
            }

            fn for_each<V: $crate::SlotVisitor>(&self, visitor: &mut V) {
                $( visitor.visit(&self.$field); )+
            }
        }

        impl<T> $crate::MergeInto<T> for $set
        where
            $( T: $crate::HasParam<$param>, )+
        {
            fn merge_into(&self, target: &mut T) {
                $(
                    <T as $crate::HasParam<$param>>::slot_mut(target)
                        .overwrite_from(&self.$field);
                )+
            }
        }

        const _: () = {
            assert!(
                $crate::names_distinct(&[ $( <$param as $crate::ParamSpec>::NAME ),+ ]),
                "duplicate parameter name within one parameter set"
            );
        };
    };
}
