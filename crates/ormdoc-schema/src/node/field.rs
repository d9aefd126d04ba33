use crate::{err, node::ValidateNode, prelude::*, MAX_FRAGMENT_NAME_LEN};

///
/// FieldList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }
}

impl ValidateNode for FieldList {
    fn validate(&self, errs: &mut ErrorReport) {
        for field in &self.fields {
            field.validate(errs);
        }
    }
}

///
/// Field
/// One scalar column declared directly on a class. `storage` is the logical
/// tag the documentation type is derived from.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: String,
    pub storage: StorageKind,
}

impl ValidateNode for Field {
    fn validate(&self, errs: &mut ErrorReport) {
        if self.ident.is_empty() {
            err!(errs, "field has an empty identifier");
        }
        if self.ident.len() > MAX_FRAGMENT_NAME_LEN {
            err!(
                errs,
                "field identifier '{}' exceeds {} characters",
                self.ident,
                MAX_FRAGMENT_NAME_LEN,
            );
        }
    }
}
