use crate::validate::must_be_one_of;

///
/// VariantMeta
///
/// Declared metadata for one native-enum variant: the ident plus an optional
/// human-readable description and an optional serialization alias.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VariantMeta {
    pub ident: &'static str,
    pub description: Option<&'static str>,
    pub member_value: Option<&'static str>,
}

impl VariantMeta {
    #[must_use]
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            description: None,
            member_value: None,
        }
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub const fn with_member_value(mut self, member_value: &'static str) -> Self {
        self.member_value = Some(member_value);
        self
    }

    /// Description, falling back to the bare ident.
    #[must_use]
    pub const fn description_or_ident(&self) -> &'static str {
        match self.description {
            Some(description) => description,
            None => self.ident,
        }
    }

    /// Serialization alias, falling back to the bare ident.
    #[must_use]
    pub const fn member_value_or_ident(&self) -> &'static str {
        match self.member_value {
            Some(member_value) => member_value,
            None => self.ident,
        }
    }
}

///
/// EnumCatalog
///
/// Variant metadata for a native fieldless enum, declared alongside the enum
/// itself (see [`enum_catalog!`](crate::enum_catalog)). The catalog is the
/// explicit stand-in for runtime enum reflection: validators and message
/// builders harvest their value lists from `VARIANTS`.
///

pub trait EnumCatalog: Copy + Sized + 'static {
    /// Enum type name, used verbatim in validation messages.
    const TYPE_NAME: &'static str;

    /// Declared variants, in declaration order.
    const VARIANTS: &'static [VariantMeta];

    /// Ident of this variant, verbatim.
    fn ident(&self) -> &'static str;

    /// Description of this variant, falling back to its ident.
    fn description(&self) -> &'static str {
        match Self::VARIANTS.iter().find(|v| v.ident == self.ident()) {
            Some(meta) => meta.description_or_ident(),
            None => self.ident(),
        }
    }

    /// Serialization alias of this variant, falling back to its ident.
    fn member_value(&self) -> &'static str {
        match Self::VARIANTS.iter().find(|v| v.ident == self.ident()) {
            Some(meta) => meta.member_value_or_ident(),
            None => self.ident(),
        }
    }

    /// Every variant ident, in declaration order.
    #[must_use]
    fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.ident).collect()
    }

    /// Every variant description, ident-fallback applied, declaration order.
    #[must_use]
    fn descriptions() -> Vec<&'static str> {
        Self::VARIANTS
            .iter()
            .map(VariantMeta::description_or_ident)
            .collect()
    }

    /// Every serialization alias, ident-fallback applied, declaration order.
    #[must_use]
    fn member_values() -> Vec<&'static str> {
        Self::VARIANTS
            .iter()
            .map(VariantMeta::member_value_or_ident)
            .collect()
    }

    /// Rejection message for a value matched against the variant idents.
    #[must_use]
    fn message_for_name(value: &str) -> String {
        must_be_one_of(Self::TYPE_NAME, value, Self::names())
    }

    /// Rejection message for a value matched against the descriptions.
    #[must_use]
    fn message_for_description(value: &str) -> String {
        must_be_one_of(Self::TYPE_NAME, value, Self::descriptions())
    }

    /// Rejection message for a value matched against the aliases.
    #[must_use]
    fn message_for_member_value(value: &str) -> String {
        must_be_one_of(Self::TYPE_NAME, value, Self::member_values())
    }
}

///
/// TESTS
///
