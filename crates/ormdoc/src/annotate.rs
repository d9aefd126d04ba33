//! The batch driver: allow-list gating, source resolution, change detection.
//!
//! Every per-class condition short of an I/O failure is a skip, never an
//! abort; a module batch records hard failures and continues past them.

use crate::{
    config::Config,
    docblock::{DocBlock, MarkerState, marker_state},
    error::{Error, SkipReason},
    render::render,
    schema::prelude::*,
};
use log::{debug, info, warn};
use std::{fs, path::Path};

///
/// Outcome
/// Result of processing one class. `Unchanged` is a success: the computed
/// content matched what was on disk, so nothing was written.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Updated,
    Reverted,
    Unchanged,
    Skipped(SkipReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

///
/// ModuleReport
///

#[derive(Debug, Default)]
pub struct ModuleReport {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failures: Vec<(String, Error)>,
}

impl ModuleReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Updated | Outcome::Reverted => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }
}

///
/// Annotator
/// One batch run over a fixed universe snapshot. The snapshot is taken by the
/// caller when the run starts and dropped with the annotator; it is never
/// cached across runs.
///

pub struct Annotator<'a> {
    universe: &'a Universe,
    config: &'a Config,
    root: &'a Path,
    dry_run: bool,
}

impl<'a> Annotator<'a> {
    #[must_use]
    pub const fn new(universe: &'a Universe, config: &'a Config, root: &'a Path) -> Self {
        Self {
            universe,
            config,
            root,
            dry_run: false,
        }
    }

    /// Compute and report changes without writing any file.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Annotate (or, with `undo`, revert) a single class by name.
    pub fn annotate_class(&self, name: &str, undo: bool) -> Result<Outcome, Error> {
        let class = self
            .universe
            .get(name)
            .ok_or_else(|| Error::UnknownClass(name.to_string()))?;

        self.annotate(class, undo)
    }

    /// Process every class in a module, continuing past per-class failures.
    pub fn annotate_module(&self, module: &str, undo: bool) -> Result<ModuleReport, Error> {
        if !self.universe.modules().contains(&module) {
            return Err(Error::UnknownModule(module.to_string()));
        }

        let mut report = ModuleReport::default();
        for class in self.universe.classes_in_module(module) {
            match self.annotate(class, undo) {
                Ok(outcome) => report.record(outcome),
                Err(err) => {
                    warn!("{}: {err}", class.name);
                    report.failures.push((class.name.clone(), err));
                }
            }
        }

        Ok(report)
    }

    fn annotate(&self, class: &Class, undo: bool) -> Result<Outcome, Error> {
        if !self.config.is_module_enabled(&class.module) {
            debug!("{}: module '{}' not enabled", class.name, class.module);
            return Ok(Outcome::Skipped(SkipReason::ModuleDisabled));
        }
        if !self.config.is_class_enabled(class) {
            debug!("{}: excluded by configuration", class.name);
            return Ok(Outcome::Skipped(SkipReason::ClassDisabled));
        }

        let path = self.root.join(class.source_path());
        if !path.is_file() {
            debug!("{}: no source file at {}", class.name, path.display());
            return Ok(Outcome::Skipped(SkipReason::UnresolvablePath));
        }

        let original = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;

        if marker_state(&original) == MarkerState::Malformed {
            warn!(
                "{}: malformed marker block in {}, leaving file untouched",
                class.name,
                path.display()
            );
            return Ok(Outcome::Skipped(SkipReason::MalformedBlock));
        }

        let block = DocBlock::new(&class.name);
        let next = if undo {
            block.strip(&original)
        } else {
            let payload = render(class, self.universe);
            if payload.is_empty() {
                debug!("{}: no fragments to document", class.name);
                return Ok(Outcome::Skipped(SkipReason::EmptySchema));
            }

            block.apply(&original, &payload)
        };

        if next == original {
            return Ok(Outcome::Unchanged);
        }

        if self.dry_run {
            info!("{}: would update {}", class.name, path.display());
        } else {
            fs::write(&path, &next).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!("{}: updated {}", class.name, path.display());
        }

        Ok(if undo {
            Outcome::Reverted
        } else {
            Outcome::Updated
        })
    }
}
