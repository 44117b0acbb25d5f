/// Declare a closed set of coded members.
///
/// Generates the member struct (wrapping a
/// [`CodeNameModel`](crate::model::CodeNameModel)), one accessor per member
/// returning the registered singleton, the
/// [`CodedEnum`](crate::coded::CodedEnum) impl, code-based equality and
/// hashing, `Display` (the member name), and serialization as the underlying
/// model.
///
/// ```rust,ignore
/// coded_enum! {
///     pub struct Region {
///         united_kingdom => ("UK,GB", "United Kingdom"),
///         france => ("FR", "France"),
///     }
/// }
///
/// assert_eq!(Region::get_by_code("GB"), Some(Region::united_kingdom()));
/// ```
///
/// Code tokens must be unique across the whole set; a duplicate panics at
/// first materialization. Members needing extra fields implement
/// `CodedEnum` by hand instead.
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $member:ident => ($code:expr, $label:expr) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            model: $crate::model::CodeNameModel,
        }

        impl $name {
            $crate::coded_enum!(@accessors 0usize; $($member)+);
        }

        impl $crate::coded::CodedEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn members() -> &'static [Self] {
                static MEMBERS: ::std::sync::LazyLock<::std::vec::Vec<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        let members = ::std::vec::Vec::from([
                            $(
                                $name {
                                    model: $crate::model::CodeNameModel::new($code, $label),
                                }
                            ),+
                        ]);

                        $crate::coded::assert_unique_codes(&members);

                        members
                    });

                &MEMBERS
            }

            fn model(&self) -> &$crate::model::CodeNameModel {
                &self.model
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::coded::CodedEnum::eq_by_code(self, other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::coded::CodedEnum::code(self), state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::coded::CodedEnum::name(self))
            }
        }

        impl $crate::__reexports::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__reexports::serde::Serializer,
            {
                $crate::__reexports::serde::Serialize::serialize(
                    $crate::coded::CodedEnum::model(self),
                    serializer,
                )
            }
        }
    };

    (@accessors $idx:expr; $member:ident $($rest:ident)*) => {
        #[must_use]
        pub fn $member() -> &'static Self {
            &<Self as $crate::coded::CodedEnum>::members()[$idx]
        }

        $crate::coded_enum!(@accessors $idx + 1usize; $($rest)*);
    };
    (@accessors $idx:expr;) => {};
}

/// Declare a native enum together with its
/// [`EnumCatalog`](crate::catalog::EnumCatalog) metadata.
///
/// Variants may attach a human-readable `description` and/or a serialization
/// alias `member_value`; harvesting falls back to the bare ident where a
/// piece of metadata is absent.
///
/// ```rust,ignore
/// enum_catalog! {
///     pub enum Color {
///         Red,
///         Green { description: "Verde" },
///         Blue { description: "Azul", member_value: "blu" },
///     }
/// }
/// ```
///
/// Because this macro only accepts an enum declaration, "the catalog target
/// must be an enum" is checked by the compiler, not at runtime.
#[macro_export]
macro_rules! enum_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident $( { $($key:ident : $val:literal),+ $(,)? } )? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::catalog::EnumCatalog for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [$crate::catalog::VariantMeta] = &[
                $( $crate::enum_catalog!(@meta $variant $( { $($key : $val),+ } )?) ),+
            ];

            fn ident(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }
        }
    };

    (@meta $variant:ident) => {
        $crate::catalog::VariantMeta::new(stringify!($variant))
    };
    (@meta $variant:ident { description : $description:literal }) => {
        $crate::catalog::VariantMeta::new(stringify!($variant)).with_description($description)
    };
    (@meta $variant:ident { member_value : $member_value:literal }) => {
        $crate::catalog::VariantMeta::new(stringify!($variant)).with_member_value($member_value)
    };
    (@meta $variant:ident { description : $description:literal, member_value : $member_value:literal }) => {
        $crate::catalog::VariantMeta::new(stringify!($variant))
            .with_description($description)
            .with_member_value($member_value)
    };
    (@meta $variant:ident { member_value : $member_value:literal, description : $description:literal }) => {
        $crate::catalog::VariantMeta::new(stringify!($variant))
            .with_description($description)
            .with_member_value($member_value)
    };
}
