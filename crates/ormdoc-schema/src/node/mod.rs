mod class;
mod field;
mod relation;

pub use class::Class;
pub use field::{Field, FieldList};
pub use relation::{Extension, Relation, RelationList};

use crate::error::ErrorReport;

///
/// ValidateNode
/// Node-local validation; structural checks that need the whole universe live
/// in the manifest loader instead.
///

pub trait ValidateNode {
    fn validate(&self, errs: &mut ErrorReport);
}
