//! Membership validators over native-enum catalogs.
//!
//! Each validator harvests its valid-value list once at construction and is
//! immutable afterwards, so instances are freely shared across threads.
//! Absent input is not a violation; requiredness is a separate concern owned
//! by the host framework.

use crate::{
    catalog::EnumCatalog,
    validate::{ValidateIssue, Validator, must_be_one_of},
};
use std::marker::PhantomData;

///
/// Membership
///
/// Shared plumbing: the empty string passes trivially, anything else must be
/// an exact, case-sensitive member of the valid list.
///

#[derive(Clone, Debug)]
struct Membership {
    label: &'static str,
    valid: Vec<&'static str>,
}

impl Membership {
    fn check(&self, value: &str) -> Result<(), ValidateIssue> {
        if value.is_empty() || self.valid.iter().any(|candidate| *candidate == value) {
            Ok(())
        } else {
            Err(ValidateIssue::validation(must_be_one_of(
                self.label,
                value,
                self.valid.iter().copied(),
            )))
        }
    }
}

macro_rules! membership_validator {
    (
        $(#[$meta:meta])*
        $name:ident => $harvest:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name<E: EnumCatalog> {
            membership: Membership,
            _marker: PhantomData<fn() -> E>,
        }

        impl<E: EnumCatalog> $name<E> {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    membership: Membership {
                        label: E::TYPE_NAME,
                        valid: <E as EnumCatalog>::$harvest(),
                    },
                    _marker: PhantomData,
                }
            }

            /// Host-framework entry point: absent input passes trivially.
            pub fn check(&self, value: Option<&str>) -> Result<(), ValidateIssue> {
                value.map_or(Ok(()), |value| self.membership.check(value))
            }
        }

        impl<E: EnumCatalog> Default for $name<E> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<E: EnumCatalog> Validator<str> for $name<E> {
            fn validate(&self, value: &str) -> Result<(), ValidateIssue> {
                self.membership.check(value)
            }
        }
    };
}

membership_validator! {
    /// Accepts the enum's variant idents verbatim.
    Name => names
}

membership_validator! {
    /// Accepts the enum's descriptions, ident-fallback applied.
    Description => descriptions
}

membership_validator! {
    /// Accepts the enum's serialization aliases, ident-fallback applied.
    MemberValue => member_values
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    enum_catalog! {
        pub enum Color {
            Red,
            Green { description: "Verde" },
        }
    }

    #[test]
    fn catalog_is_declared_alongside_the_enum() {
        assert_eq!(Color::Red.ident(), "Red");
        assert_eq!(Color::Green.description(), "Verde");
    }

    // ---------------------
    // absence
    // ---------------------

    #[test]
    fn absent_and_empty_input_pass_trivially() {
        let validator = Name::<Color>::new();

        assert!(validator.check(None).is_ok());
        assert!(validator.check(Some("")).is_ok());
        assert!(validator.validate("").is_ok());
    }

    // ---------------------
    // by name
    // ---------------------

    #[test]
    fn name_accepts_declared_idents() {
        let validator = Name::<Color>::new();

        assert!(validator.validate("Red").is_ok());
        assert!(validator.validate("Green").is_ok());
    }

    #[test]
    fn name_is_case_sensitive() {
        let validator = Name::<Color>::new();
        let err = validator.validate("red").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Color (red) must be one of Red|Green"
        );
    }

    // ---------------------
    // by description
    // ---------------------

    #[test]
    fn description_accepts_metadata_and_fallback_idents() {
        let validator = Description::<Color>::new();

        assert!(validator.validate("Verde").is_ok());
        assert!(validator.validate("Red").is_ok());
    }

    #[test]
    fn description_rejects_the_ident_once_metadata_exists() {
        let validator = Description::<Color>::new();
        let err = validator.validate("Green").unwrap_err();

        assert_eq!(
            err,
            ValidateIssue::validation("Color (Green) must be one of Red|Verde")
        );
    }

    // ---------------------
    // by member value
    // ---------------------

    #[test]
    fn member_value_falls_back_to_idents_without_aliases() {
        let validator = MemberValue::<Color>::new();

        assert!(validator.validate("Red").is_ok());
        assert!(validator.validate("Green").is_ok());
        assert!(validator.validate("Verde").is_err());
    }

    #[test]
    fn validators_are_reusable_after_failure() {
        let validator = Name::<Color>::new();

        assert!(validator.validate("Teal").is_err());
        assert!(validator.validate("Red").is_ok());
        assert!(validator.validate("Teal").is_err());
    }
}
