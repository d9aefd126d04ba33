//! ormdoc CLI entry point.

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use ormdoc::{
    annotate::{Annotator, Outcome},
    config::Config,
    error::Error,
    schema::manifest::load_manifest,
};
use std::{path::PathBuf, process, str::FromStr};

///
/// Args
///

#[derive(Debug, Parser)]
#[command(name = "ormdoc", version, about = "Annotate schema-declared classes with generated docblocks")]
struct Args {
    /// Modules to process
    #[arg(required_unless_present = "class")]
    modules: Vec<String>,

    /// Process a single class instead of whole modules
    #[arg(long)]
    class: Option<String>,

    /// Remove generated blocks instead of inserting them
    #[arg(long)]
    undo: bool,

    /// Compute and report changes without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Path to the schema manifest
    #[arg(long, env = "ORMDOC_MANIFEST", default_value = "schema.toml")]
    manifest: PathBuf,

    /// Path to the config file
    #[arg(long, env = "ORMDOC_CONFIG", default_value = "ormdoc.toml")]
    config: PathBuf,

    /// Project root that manifest source paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("parsed arguments: {args:?}");

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}

// Returns Ok(false) when any class failed hard; skips never fail the run.
fn run(args: &Args) -> Result<bool, Error> {
    let config = Config::load(&args.config)?;
    let universe = load_manifest(&args.manifest)?;

    info!(
        "loaded {} classes across {} module(s)",
        universe.len(),
        universe.modules().len()
    );

    let annotator = Annotator::new(&universe, &config, &args.root).dry_run(args.dry_run);
    let mut clean = true;

    if let Some(class) = &args.class {
        let outcome = annotator.annotate_class(class, args.undo)?;
        info!("{class}: {}", describe(outcome));
    }

    for module in &args.modules {
        let report = annotator.annotate_module(module, args.undo)?;
        info!(
            "{module}: {} updated, {} unchanged, {} skipped, {} failed",
            report.updated,
            report.unchanged,
            report.skipped,
            report.failures.len()
        );

        for (class, err) in &report.failures {
            error!("{module}/{class}: {err}");
        }
        clean &= report.is_clean();
    }

    Ok(clean)
}

const fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Updated => "updated",
        Outcome::Reverted => "reverted",
        Outcome::Unchanged => "unchanged",
        Outcome::Skipped(_) => "skipped",
    }
}
