//! Schema-to-documentation rendering.
//!
//! `render` is a pure function of the class's own-declared schema plus, for
//! owner lines, the class universe. Emission order is the fixed category table
//! [`FragmentKind::ORDER`]; within a category, fragments render in the order
//! the schema source declares them.

use crate::schema::prelude::*;
use ormdoc_schema::node::RelationList;

/// Render the documentation payload for one class.
///
/// Returns an empty payload when no category declares any fragment; callers
/// must then leave the source file untouched.
#[must_use]
pub fn render(class: &Class, universe: &Universe) -> Vec<String> {
    let mut lines = Vec::new();

    for kind in FragmentKind::ORDER {
        match kind {
            FragmentKind::Owner => render_owner(class, universe, &mut lines),
            FragmentKind::Db => render_db(class, &mut lines),
            FragmentKind::BelongsTo => render_belongs_to(class, &mut lines),
            FragmentKind::HasOne => render_has_one(class, &mut lines),
            FragmentKind::HasMany => render_has_many(class, &mut lines),
            FragmentKind::ManyMany => render_many_many(&class.many_many, &mut lines),
            FragmentKind::BelongsManyMany => render_many_many(&class.belongs_many_many, &mut lines),
            FragmentKind::Extensions => render_extensions(class, &mut lines),
        }
    }

    lines
}

// One line naming every class that mixes this class in, pipe-separated,
// terminated by the class's own name.
fn render_owner(class: &Class, universe: &Universe, lines: &mut Vec<String>) {
    let owners: Vec<&str> = universe
        .owners_of(&class.name)
        .map(|owner| owner.name.as_str())
        .collect();

    if !owners.is_empty() {
        lines.push(format!(
            " * @property {}|{} owner",
            owners.join("|"),
            class.name
        ));
    }
}

fn render_db(class: &Class, lines: &mut Vec<String>) {
    for field in class.db.iter() {
        lines.push(format!(
            " * @property {} {}",
            field.storage.doc_type(),
            field.ident
        ));
    }
}

fn render_belongs_to(class: &Class, lines: &mut Vec<String>) {
    for relation in class.belongs_to.iter() {
        lines.push(format!(" * @property {} {}", relation.target, relation.ident));
    }
}

// Two passes over the same set: all identifier properties first, then all
// accessor methods.
fn render_has_one(class: &Class, lines: &mut Vec<String>) {
    for relation in class.has_one.iter() {
        lines.push(format!(" * @property int {}ID", relation.ident));
    }
    for relation in class.has_one.iter() {
        lines.push(format!(" * @method {} {}()", relation.target, relation.ident));
    }
}

fn render_has_many(class: &Class, lines: &mut Vec<String>) {
    for relation in class.has_many.iter() {
        lines.push(format!(
            " * @method DataList|{}[] {}()",
            relation.target, relation.ident
        ));
    }
}

// ManyMany and BelongsManyMany document identically; direction only matters
// to the persistence layer.
fn render_many_many(relations: &RelationList, lines: &mut Vec<String>) {
    for relation in relations.iter() {
        lines.push(format!(
            " * @method ManyManyList|{}[] {}()",
            relation.target, relation.ident
        ));
    }
}

fn render_extensions(class: &Class, lines: &mut Vec<String>) {
    for ext in &class.extensions {
        lines.push(format!(" * @mixin {}", ext.class));
    }
}
