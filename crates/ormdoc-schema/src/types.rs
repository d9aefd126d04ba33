use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// StorageKind
/// Logical storage tag for a scalar field, declared by the schema source.
/// The annotation core only ever sees this tag, never a field object.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum StorageKind {
    BigInt,
    Boolean,
    Currency,
    Date,
    Datetime,
    Decimal,
    Enum,
    Float,
    Int,
    Percentage,
    Text,
    Time,
    Varchar,
}

impl StorageKind {
    /// Map the storage tag to the documented property type.
    /// Everything without a numeric or boolean shape documents as `string`.
    #[must_use]
    pub const fn doc_type(self) -> DocType {
        match self {
            Self::BigInt | Self::Int => DocType::Int,
            Self::Boolean => DocType::Boolean,
            Self::Currency | Self::Decimal | Self::Float | Self::Percentage => DocType::Float,
            Self::Date | Self::Datetime | Self::Enum | Self::Text | Self::Time | Self::Varchar => {
                DocType::String
            }
        }
    }
}

///
/// DocType
/// The four type tokens that ever appear in a generated `@property` line.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum DocType {
    #[display("boolean")]
    Boolean,
    #[display("float")]
    Float,
    #[display("int")]
    Int,
    #[display("string")]
    String,
}

///
/// FragmentKind
/// One relation or field shape declared on a class. `ORDER` is the fixed
/// emission order for rendering; it is data, not dispatch.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum FragmentKind {
    Owner,
    Db,
    BelongsTo,
    HasOne,
    HasMany,
    ManyMany,
    BelongsManyMany,
    Extensions,
}

impl FragmentKind {
    pub const ORDER: [Self; 8] = [
        Self::Owner,
        Self::Db,
        Self::BelongsTo,
        Self::HasOne,
        Self::HasMany,
        Self::ManyMany,
        Self::BelongsManyMany,
        Self::Extensions,
    ];
}
