//! collectkit's application entry point.
//! Parses the command line, loads the configuration and hands over to the
//! processor.

use collectkit::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    loader::YamlLoader,
    logger::init_logger,
    processor::{process, Settings},
    renderer::MiniJinjaRenderer,
    reporter::LogReporter,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose, args.silent);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and validates the configuration
/// 2. Resolves source and destination paths
/// 3. Collects data files and renders the template
/// 4. Copies configured auxiliary files
fn run(args: Args) -> Result<()> {
    let config = get_config(&args.config)?;
    let settings = Settings::resolve(&config, &args);

    let loader = YamlLoader::new();
    let engine = MiniJinjaRenderer::new();
    let reporter = LogReporter::new(args.silent);

    process(&config, &settings, &loader, &engine, &reporter)
}
