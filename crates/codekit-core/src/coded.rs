use crate::{model::CodeNameModel, validate::must_be_one_of};
use std::{cmp::Ordering, collections::BTreeSet};

///
/// CodedEnum
///
/// A closed, compile-time-declared set of coded members. Native enums cannot
/// carry per-member fields or grow behavior per variant; this trait swaps the
/// variant list for singleton member values registered once and alive for the
/// process lifetime.
///
/// Members embed a [`CodeNameModel`]. A member's `code` may alias several
/// legacy codes by joining them with commas (`"UK,GB"`); [`get_by_code`]
/// matches any one token exactly.
///
/// Equality between members is case-sensitive on `code` and only defined
/// within one concrete type, so comparing members of different sets is a
/// compile error rather than a runtime cast failure. Ordering via
/// [`cmp_by_code`] is case-insensitive.
///
/// Use [`coded_enum!`](crate::coded_enum) for the common declaration shape;
/// implement the trait by hand when members carry extra fields.
///
/// [`get_by_code`]: CodedEnum::get_by_code
/// [`cmp_by_code`]: CodedEnum::cmp_by_code
///

pub trait CodedEnum: Sized + 'static {
    /// Concrete type name, used verbatim in validation messages.
    const TYPE_NAME: &'static str;

    /// Every declared member, in declaration order.
    ///
    /// Built once on first access; implementations back this with a static.
    fn members() -> &'static [Self];

    /// The code/name pair this member wraps.
    fn model(&self) -> &CodeNameModel;

    fn code(&self) -> &str {
        &self.model().code
    }

    fn name(&self) -> &str {
        &self.model().name
    }

    /// A fresh list of every member, in declaration order.
    #[must_use]
    fn get_all() -> Vec<&'static Self> {
        Self::members().iter().collect()
    }

    /// First member whose `code`, split on commas, contains `code` exactly.
    ///
    /// An unknown code is not an error: callers decide whether absence is
    /// fatal.
    #[must_use]
    fn get_by_code(code: &str) -> Option<&'static Self> {
        Self::members()
            .iter()
            .find(|member| member.code().split(',').any(|token| token == code))
    }

    /// Rejection message for a code outside the declared set, listing every
    /// member's full code in declaration order.
    #[must_use]
    fn unsupported_code_message(code_value: &str) -> String {
        let label = format!("{}.Code", Self::TYPE_NAME);

        must_be_one_of(&label, code_value, Self::members().iter().map(Self::code))
    }

    /// Case-sensitive code equality.
    fn eq_by_code(&self, other: &Self) -> bool {
        self.code() == other.code()
    }

    /// Case-insensitive lexicographic order of `code`.
    fn cmp_by_code(&self, other: &Self) -> Ordering {
        self.code()
            .to_lowercase()
            .cmp(&other.code().to_lowercase())
    }
}

/// Panic if any code token appears on more than one member.
///
/// A duplicate token would make [`CodedEnum::get_by_code`] silently prefer
/// the earlier declaration, so the registry treats it as a configuration
/// error and fails at first materialization.
pub fn assert_unique_codes<T: CodedEnum>(members: &[T]) {
    let mut seen = BTreeSet::new();

    for member in members {
        for token in member.code().split(',') {
            assert!(
                seen.insert(token),
                "{}.Code token ({token}) is declared more than once",
                T::TYPE_NAME
            );
        }
    }
}

///
/// TESTS
///
