use crate::prelude::*;
use std::collections::BTreeMap;

///
/// Universe
/// Snapshot of every known class for one batch run. Built fresh per run from
/// the schema source and queried read-only; never cached across runs, so
/// reverse-direction queries (owners) can't go stale.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Universe {
    classes: BTreeMap<String, Class>,
}

impl Universe {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Insert a class descriptor, returning the previous descriptor if the
    /// name was already present.
    pub fn insert(&mut self, class: Class) -> Option<Class> {
        self.classes.insert(class.name.clone(), class)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes, ordered by name.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Classes belonging to `module`, ordered by name.
    pub fn classes_in_module<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a Class> {
        self.classes.values().filter(move |c| c.module == module)
    }

    /// Every class whose own extension list names `class` as a mixin,
    /// ordered by name. This is the reverse query behind `owner` lines.
    pub fn owners_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Class> {
        self.classes.values().filter(move |c| c.has_extension(class))
    }

    /// Module names present in the universe, deduplicated and ordered.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.classes.values().map(|c| c.module.as_str()).collect();
        modules.sort_unstable();
        modules.dedup();

        modules
    }
}
