use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use ulid::Ulid;

///
/// SimpleKind
///
/// Canonical kind for "simple leaf" types: the values a serializer writes
/// as a single scalar rather than walking into.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum SimpleKind {
    Bool,
    Char,
    Date,
    DateTime,
    Decimal,
    Duration,
    Enumeration,
    Float,
    Int,
    Text,
    Time,
    Uint,
    Ulid,
}

///
/// SimpleValue
///
/// Marker for simple leaf types. The compile-time counterpart of a runtime
/// reflection check: classification is monomorphized, so there is no cache
/// to maintain and no lookup cost.
///
/// Native enums opt in with a one-line impl using `SimpleKind::Enumeration`;
/// there is no blanket impl, which keeps the `Option` forwarding below
/// coherent.
///

pub trait SimpleValue {
    const KIND: SimpleKind;
}

macro_rules! simple_value {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl SimpleValue for $ty {
                const KIND: SimpleKind = SimpleKind::$kind;
            }
        )+
    };
}

simple_value!(Bool => bool);
simple_value!(Char => char);
simple_value!(Int => i8, i16, i32, i64, i128, isize);
simple_value!(Uint => u8, u16, u32, u64, u128, usize);
simple_value!(Float => f32, f64);
simple_value!(Text => &str, String);
simple_value!(Decimal => Decimal);
simple_value!(Date => NaiveDate);
simple_value!(DateTime => NaiveDateTime, DateTime<Utc>, DateTime<FixedOffset>);
simple_value!(Time => NaiveTime);
simple_value!(Duration => TimeDelta);
simple_value!(Ulid => Ulid);

// Nullable forms are as simple as their payload.
impl<T: SimpleValue> SimpleValue for Option<T> {
    const KIND: SimpleKind = T::KIND;
}

#[must_use]
pub const fn simple_kind_of<T: SimpleValue>() -> SimpleKind {
    T::KIND
}

///
/// TESTS
///
