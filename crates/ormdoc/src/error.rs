use crate::{config::ConfigError, schema::manifest::ManifestError};
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// Error
/// Hard failures. Everything that merely means "nothing to do for this class"
/// is a [`SkipReason`], not an error, and never aborts a batch.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    #[error("unknown module '{0}'")]
    UnknownModule(String),

    #[error("cannot read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ManifestError(#[from] ManifestError),
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum SkipReason {
    #[error("module is not in the enabled-modules list")]
    ModuleDisabled,

    #[error("class is excluded by configuration")]
    ClassDisabled,

    #[error("source file could not be resolved")]
    UnresolvablePath,

    #[error("class declares no fragments")]
    EmptySchema,

    #[error("existing marker block is malformed")]
    MalformedBlock,
}
