//! Run orchestration: precondition checks, the collect/render pipeline and
//! the auxiliary copy step.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    cli::Args,
    collector::collect,
    config::Config,
    copier::{copy_entries, resolve_copy_entries},
    error::{Error, Result},
    loader::DataLoader,
    name::NameSource,
    renderer::TemplateRenderer,
    reporter::Reporter,
    template::{parse_template, render_template, write_output},
    walker::{traverse, PathMatcher},
};

/// Paths and options of one run, resolved from the configuration and the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub destination_dir: PathBuf,
    pub destination_file: PathBuf,
    pub test: String,
    pub name_source: NameSource,
    pub search_depth: usize,
    pub force: bool,
}

impl Settings {
    pub fn resolve(config: &Config, args: &Args) -> Self {
        let destination_dir = config.build_root.join(&args.destination);
        let destination_file = destination_dir.join(&config.destination);
        let source = match &args.source {
            Some(source) => config.source_root.join(source),
            None => config.source_root.clone(),
        };
        Self {
            source,
            destination_dir,
            destination_file,
            test: args.test.clone().unwrap_or_else(|| config.default_test.clone()),
            name_source: NameSource::from_flag(args.name_from_dir),
            search_depth: args.search_depth,
            force: args.force,
        }
    }
}

/// Ensures the source root exists and is a directory.
///
/// # Errors
/// * `Error::SourceNotFoundError` otherwise
pub fn ensure_source_dir<P: AsRef<Path>>(source: P) -> Result<PathBuf> {
    let source = source.as_ref();
    if !source.is_dir() {
        return Err(Error::SourceNotFoundError { source_dir: source.display().to_string() });
    }
    Ok(source.to_path_buf())
}

/// Ensures the generated artifact may be written.
///
/// # Errors
/// * `Error::DestinationExistsError` if the file exists and `force` is false
pub fn ensure_destination<P: AsRef<Path>>(destination: P, force: bool) -> Result<PathBuf> {
    let destination = destination.as_ref();
    if destination.exists() && !force {
        return Err(Error::DestinationExistsError {
            destination: destination.display().to_string(),
        });
    }
    Ok(destination.to_path_buf())
}

/// Collects the source tree and writes the expanded template.
///
/// Returns the number of collected records.
pub fn generate(
    config: &Config,
    settings: &Settings,
    loader: &dyn DataLoader,
    engine: &dyn TemplateRenderer,
    reporter: &dyn Reporter,
) -> Result<usize> {
    let matcher = PathMatcher::new(&settings.test)?;
    let files = traverse(&settings.source, settings.search_depth).matching(matcher);
    let collection = collect(files, loader, settings.name_source, reporter)?;

    let template = fs::read_to_string(&config.template)?;
    let lines = parse_template(&template, &config.placeholder);
    let output = render_template(&lines, &collection, &config.line_template, engine)?;
    write_output(&settings.destination_file, &output)?;

    reporter.written(&settings.destination_file, collection.len());
    Ok(collection.len())
}

/// Runs the whole build step: checks, generation, then the copy step.
pub fn process(
    config: &Config,
    settings: &Settings,
    loader: &dyn DataLoader,
    engine: &dyn TemplateRenderer,
    reporter: &dyn Reporter,
) -> Result<()> {
    ensure_source_dir(&settings.source)?;
    ensure_destination(&settings.destination_file, settings.force)?;
    fs::create_dir_all(&settings.destination_dir)?;

    generate(config, settings, loader, engine, reporter)?;

    let entries = resolve_copy_entries(&config.copy, &settings.destination_dir)?;
    copy_entries(&entries, reporter)?;
    Ok(())
}
