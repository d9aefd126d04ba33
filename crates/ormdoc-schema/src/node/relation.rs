use crate::{err, node::ValidateNode, prelude::*, MAX_FRAGMENT_NAME_LEN};

///
/// RelationList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct RelationList {
    pub relations: Vec<Relation>,
}

impl RelationList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.ident == ident)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }
}

impl ValidateNode for RelationList {
    fn validate(&self, errs: &mut ErrorReport) {
        for relation in &self.relations {
            relation.validate(errs);
        }
    }
}

///
/// Relation
/// One named edge from a class to a related class. The same shape serves
/// every relation category; direction and cardinality live in the category.
///

#[derive(Clone, Debug, Serialize)]
pub struct Relation {
    pub ident: String,
    pub target: String,
}

impl ValidateNode for Relation {
    fn validate(&self, errs: &mut ErrorReport) {
        if self.ident.is_empty() {
            err!(errs, "relation has an empty identifier");
        }
        if self.ident.len() > MAX_FRAGMENT_NAME_LEN {
            err!(
                errs,
                "relation identifier '{}' exceeds {} characters",
                self.ident,
                MAX_FRAGMENT_NAME_LEN,
            );
        }
        if self.target.is_empty() {
            err!(errs, "relation '{}' has an empty target class", self.ident);
        }
    }
}

///
/// Extension
/// A mixin applied to a class; the reverse direction (which classes apply a
/// given extension) is answered by the universe, not stored here.
///

#[derive(Clone, Debug, Serialize)]
pub struct Extension {
    pub class: String,
}

impl ValidateNode for Extension {
    fn validate(&self, errs: &mut ErrorReport) {
        if self.class.is_empty() {
            err!(errs, "extension has an empty class name");
        }
    }
}
