use basedev_context::cli::commands::{CliArgs, Commands};
use basedev_context::cli::handlers::{handle_catalog, handle_context, handle_detect, EXIT_ERROR};
use basedev_context::util::logging::{init_logging, parse_level, LoggingConfig};
use basedev_context::{ContextConfig, VERSION};

use clap::Parser;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();

    let config = match ContextConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging(apply_cli_level(&args, LoggingConfig::default()));
            error!("{}", e);
            std::process::exit(EXIT_ERROR);
        }
    };
    init_logging(apply_cli_level(&args, LoggingConfig::from_config(&config)));

    debug!("basedev-context v{} starting", VERSION);
    debug!("Arguments: {:?}", args);
    debug!("{}", config);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args),
        Commands::Context(context_args) => handle_context(context_args, &config),
        Commands::Catalog(catalog_args) => handle_catalog(catalog_args),
    };

    std::process::exit(exit_code);
}

/// `--log-level` wins over `-v`/`-q`, which win over the environment
fn apply_cli_level(args: &CliArgs, mut logging: LoggingConfig) -> LoggingConfig {
    if let Some(level_str) = &args.log_level {
        logging.level = parse_level(level_str);
    } else if args.verbose {
        logging.level = Level::DEBUG;
    } else if args.quiet {
        logging.level = Level::ERROR;
    }
    logging
}
