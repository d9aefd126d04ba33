use crate::{err, node::ValidateNode, prelude::*, MAX_CLASS_NAME_LEN};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

///
/// Class
/// Descriptor for one persistent class. Every list on this struct holds only
/// fragments the class declares directly; inherited fragments are resolved by
/// the schema source before the descriptor is built, so annotating a subclass
/// and its ancestor never documents the same fragment twice.
///

#[derive(Clone, Debug, Serialize)]
pub struct Class {
    pub name: String,
    pub module: String,
    pub source: PathBuf,
    pub extends: Option<String>,

    pub db: FieldList,
    pub belongs_to: RelationList,
    pub has_one: RelationList,
    pub has_many: RelationList,
    pub many_many: RelationList,
    pub belongs_many_many: RelationList,
    pub extensions: Vec<Extension>,
}

impl Class {
    /// Repo-relative path of the class's source file.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// True if any extension on this class names `class`.
    #[must_use]
    pub fn has_extension(&self, class: &str) -> bool {
        self.extensions.iter().any(|ext| ext.class == class)
    }

    // Fragment name -> category label, for cross-category collision checks.
    fn fragment_idents(&self) -> Vec<(&str, &'static str)> {
        let mut idents = Vec::new();
        idents.extend(self.db.iter().map(|f| (f.ident.as_str(), "db")));
        idents.extend(self.belongs_to.iter().map(|r| (r.ident.as_str(), "belongs_to")));
        idents.extend(self.has_one.iter().map(|r| (r.ident.as_str(), "has_one")));
        idents.extend(self.has_many.iter().map(|r| (r.ident.as_str(), "has_many")));
        idents.extend(self.many_many.iter().map(|r| (r.ident.as_str(), "many_many")));
        idents.extend(
            self.belongs_many_many
                .iter()
                .map(|r| (r.ident.as_str(), "belongs_many_many")),
        );

        idents
    }
}

impl ValidateNode for Class {
    fn validate(&self, errs: &mut ErrorReport) {
        if self.name.is_empty() {
            err!(errs, "class has an empty name");
        }
        if self.name.len() > MAX_CLASS_NAME_LEN {
            err!(
                errs,
                "class name '{}' exceeds {} characters",
                self.name,
                MAX_CLASS_NAME_LEN,
            );
        }
        if self.module.is_empty() {
            err!(errs, "class '{}' has an empty module", self.name);
        }
        if self.source.as_os_str().is_empty() {
            err!(errs, "class '{}' has an empty source path", self.name);
        }

        self.db.validate(errs);
        self.belongs_to.validate(errs);
        self.has_one.validate(errs);
        self.has_many.validate(errs);
        self.many_many.validate(errs);
        self.belongs_many_many.validate(errs);
        for ext in &self.extensions {
            ext.validate(errs);
        }

        // A fragment name must not recur across categories within one class.
        let mut seen = BTreeMap::<&str, &'static str>::new();
        for (ident, category) in self.fragment_idents() {
            if let Some(existing) = seen.insert(ident, category) {
                err!(
                    errs,
                    "class '{}': fragment '{}' declared in both {} and {}",
                    self.name,
                    ident,
                    existing,
                    category,
                );
            }
        }
    }
}
