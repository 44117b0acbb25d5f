//! ## Crate layout
//! - `core`: code/name value models, closed coded enumerations, native-enum
//!   catalogs, membership validators, and the injectable clock.
//! - `ext`: extension traits for collections, strings, decimals, and
//!   simple-type classification.
//!
//! The `prelude` module mirrors the surface most callers want.

pub use codekit_core as core;
pub use codekit_ext as ext;

pub use codekit_core::{coded_enum, enum_catalog};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use codekit_core::{
        catalog::{EnumCatalog, VariantMeta},
        clock::{Clock, FixedClock, SystemClock},
        coded::CodedEnum,
        model::{CodeNameDescriptionModel, CodeNameModel},
        validate::{ValidateIssue, Validator},
        validator,
    };
    pub use codekit_ext::{
        collection::RemoveWhere as _,
        decimal::DecimalExt as _,
        simple::{SimpleKind, SimpleValue, simple_kind_of},
        text::StrExt as _,
    };
}
