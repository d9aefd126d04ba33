//! Metadata model for persistent classes: scalar fields, relations in every
//! direction, and extension (mixin) declarations. The model is deliberately
//! dumb — descriptors carry tags, never framework objects — so the annotation
//! core can map them to documentation lines without introspection.

pub mod error;
pub mod manifest;
pub mod node;
pub mod types;
pub mod universe;

/// Maximum length for class schema identifiers.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for field and relation schema identifiers.
pub const MAX_FRAGMENT_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorReport,
        node::*,
        types::{DocType, FragmentKind, StorageKind},
        universe::Universe,
    };
    pub use serde::{Deserialize, Serialize};
}
