use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Framework detection for development-assistant projects
#[derive(Parser, Debug)]
#[command(
    name = "basedev-context",
    about = "Detect which framework a project directory uses",
    version,
    long_about = "basedev-context scores a project directory against a catalog of weighted \
                  filesystem signals and inspects its package.json dependencies to identify \
                  the framework in use."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the framework used by a project",
        long_about = "Runs filesystem-signal detection and/or package.json detection. Both \
                      results are reported independently.\n\n\
                      Examples:\n  \
                      basedev-context detect\n  \
                      basedev-context detect /path/to/project --source manifest\n  \
                      basedev-context detect --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Classify a project as browser or code-editor context",
        long_about = "Reports code_editor mode with the framework name when filesystem \
                      detection matches, browser mode otherwise. Without a path, the \
                      configured scratch path (BASEDEV_SCRATCH_PATH) is classified."
    )]
    Context(ContextArgs),

    #[command(about = "Print the built-in pattern catalog")]
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 's',
        long,
        value_enum,
        default_value = "all",
        help = "Which detection pass to run"
    )]
    pub source: DetectionSourceArg,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ContextArgs {
    #[arg(value_name = "PATH", help = "Path to classify (defaults to the scratch path)")]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSourceArg {
    /// Weighted filesystem signals only
    Filesystem,
    /// package.json dependencies only
    Manifest,
    /// Both passes, reported side by side
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_detect_args() {
        let args = CliArgs::parse_from(["basedev-context", "detect"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.format, OutputFormatArg::Human);
                assert_eq!(detect_args.source, DetectionSourceArg::All);
                assert!(detect_args.project_path.is_none());
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_detect_with_options() {
        let args = CliArgs::parse_from([
            "basedev-context",
            "detect",
            "/srv/app",
            "--source",
            "manifest",
            "-f",
            "yaml",
        ]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.project_path, Some(PathBuf::from("/srv/app")));
                assert_eq!(detect_args.source, DetectionSourceArg::Manifest);
                assert_eq!(detect_args.format, OutputFormatArg::Yaml);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_context_defaults_to_json() {
        let args = CliArgs::parse_from(["basedev-context", "context"]);
        match args.command {
            Commands::Context(context_args) => {
                assert_eq!(context_args.format, OutputFormatArg::Json);
                assert!(context_args.project_path.is_none());
            }
            _ => panic!("Expected Context command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["basedev-context", "catalog", "--verbose"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let result = CliArgs::try_parse_from(["basedev-context", "catalog", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_source_rejected() {
        let result =
            CliArgs::try_parse_from(["basedev-context", "detect", "--source", "registry"]);
        assert!(result.is_err());
    }
}
