//! ## Crate layout
//! - `render`: maps a class's declared schema to ordered documentation lines.
//! - `docblock`: marker-delimited block insertion, replacement, and removal.
//! - `annotate`: the driver — gating, path resolution, change detection.
//! - `config`: the enabled-modules allow-list.
//!
//! The schema model lives in `ormdoc-schema`, re-exported here as `schema`.

pub mod annotate;
pub mod config;
pub mod docblock;
pub mod error;
pub mod render;

pub use ormdoc_schema as schema;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotate::{Annotator, ModuleReport, Outcome},
        config::Config,
        docblock::{DocBlock, END_TAG, MarkerState, START_TAG, marker_state},
        error::{Error, SkipReason},
        render::render,
    };
    pub use ormdoc_schema::prelude::*;
}
