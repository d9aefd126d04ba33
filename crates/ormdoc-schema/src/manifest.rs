//! Declarative schema manifest.
//!
//! The manifest is the concrete schema source behind the annotator: one
//! `[[class]]` table per persistent class, already flattened so every list
//! holds only the class's own declarations. Relation and extension targets may
//! name classes outside the manifest (framework classes); documentation lines
//! simply carry the name, so existence is not enforced.

use crate::{err, node::ValidateNode, prelude::*};
use std::{
    collections::BTreeMap,
    fs,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ManifestError
///

#[derive(Debug, ThisError)]
pub enum ManifestError {
    #[error("cannot read manifest '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("manifest validation failed: {0}")]
    Validation(ErrorReport),
}

///
/// RawManifest
/// Serde-facing shape; converted into `Universe` after validation.
///

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default, rename = "class")]
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
    name: String,
    module: String,
    source: PathBuf,
    #[serde(default)]
    extends: Option<String>,

    #[serde(default)]
    db: BTreeMap<String, StorageKind>,
    #[serde(default)]
    belongs_to: BTreeMap<String, String>,
    #[serde(default)]
    has_one: BTreeMap<String, String>,
    #[serde(default)]
    has_many: BTreeMap<String, String>,
    #[serde(default)]
    many_many: BTreeMap<String, String>,
    #[serde(default)]
    belongs_many_many: BTreeMap<String, String>,
    #[serde(default)]
    extensions: Vec<String>,
}

impl RawClass {
    fn into_class(self) -> Class {
        Class {
            name: self.name,
            module: self.module,
            source: self.source,
            extends: self.extends,
            db: FieldList {
                fields: self
                    .db
                    .into_iter()
                    .map(|(ident, storage)| Field { ident, storage })
                    .collect(),
            },
            belongs_to: relation_list(self.belongs_to),
            has_one: relation_list(self.has_one),
            has_many: relation_list(self.has_many),
            many_many: relation_list(self.many_many),
            belongs_many_many: relation_list(self.belongs_many_many),
            extensions: self
                .extensions
                .into_iter()
                .map(|class| Extension { class })
                .collect(),
        }
    }
}

fn relation_list(raw: BTreeMap<String, String>) -> RelationList {
    RelationList {
        relations: raw
            .into_iter()
            .map(|(ident, target)| Relation { ident, target })
            .collect(),
    }
}

/// Load a manifest file and build the validated class universe.
pub fn load_manifest(path: &Path) -> Result<Universe, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&text).map_err(|e| match e {
        ParseOrValidate::Parse(source) => ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseOrValidate::Validation(report) => ManifestError::Validation(report),
    })
}

#[derive(Debug)]
enum ParseOrValidate {
    Parse(Box<toml::de::Error>),
    Validation(ErrorReport),
}

/// Parse manifest text and build the validated class universe.
fn parse_manifest(text: &str) -> Result<Universe, ParseOrValidate> {
    let raw: RawManifest =
        toml::from_str(text).map_err(|e| ParseOrValidate::Parse(Box::new(e)))?;

    build_universe(raw).map_err(ParseOrValidate::Validation)
}

// Validate every class, then check universe-level constraints, collecting all
// failures before rejecting.
fn build_universe(raw: RawManifest) -> Result<Universe, ErrorReport> {
    let mut errs = ErrorReport::new();
    let mut universe = Universe::new();

    for raw_class in raw.classes {
        let class = raw_class.into_class();
        class.validate(&mut errs);

        let name = class.name.clone();
        if universe.insert(class).is_some() {
            err!(errs, "duplicate class '{name}' in manifest");
        }
    }

    errs.result()?;

    Ok(universe)
}
