// Rust guideline compliant 2026-02-06

//! Feedback CLI Application
//!
//! Command-line dashboard for collecting and reviewing customer feedback.

use anyhow::Result;
use clap::Parser;
use feedback_app::{AppError, ErrorEnvelope, RepoContext};
use feedback_cli::logging::init_tracing;
use feedback_cli::terminal::{print_error, print_success};
use feedback_cli::{commands, create_formatter, should_use_color, ChartKind, OutputFormatter};
use feedback_core::OutputFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "fbk",
    version,
    about = "Feedback dashboard: collect ratings and review satisfaction",
    long_about = "fbk records customer feedback (a name, a 1-5 rating, and an optional comment) in a JSONL file and summarizes it as statistics, a rating chart, and a filterable list.",
    after_help = "Examples:\n  fbk init\n  fbk submit \"Ana Souza\" --rating 5 --comment \"Great service\"\n  fbk list --filter 4-5 --sort highest --pages 2\n  fbk chart --kind pie\n  fbk dashboard --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Display timestamps as absolute UTC times
    #[arg(long, global = true)]
    absolute_time: bool,

    /// Directory containing `.feedback` (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a feedback repository
    Init,

    /// Submit a new feedback entry
    Submit {
        /// Name of the person giving feedback
        name: String,

        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Optional comment (up to 500 characters)
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Show a single feedback entry
    Show {
        /// Feedback ID (fb-xxxxxxxx)
        id: String,
    },

    /// List feedback
    List {
        /// Filter: all, 1-5, or 4-5
        #[arg(long)]
        filter: Option<String>,

        /// Sort: newest, oldest, highest, lowest
        #[arg(long)]
        sort: Option<String>,

        /// Number of pages to show
        #[arg(long)]
        pages: Option<usize>,
    },

    /// Show summary statistics
    Stats,

    /// Chart the rating distribution
    Chart {
        /// Chart style
        #[arg(long, value_enum, default_value_t = ChartKind::Bar)]
        kind: ChartKind,
    },

    /// Show statistics, chart, and list together
    Dashboard {
        /// Filter: all, 1-5, or 4-5
        #[arg(long)]
        filter: Option<String>,

        /// Sort: newest, oldest, highest, lowest
        #[arg(long)]
        sort: Option<String>,

        /// Number of pages to show
        #[arg(long)]
        pages: Option<usize>,

        /// Chart style
        #[arg(long, value_enum, default_value_t = ChartKind::Bar)]
        kind: ChartKind,
    },
}

/// Output settings after merging flags with repository configuration.
#[derive(Debug, Clone, Copy)]
struct Settings {
    format: OutputFormat,
    use_color: bool,
    absolute_time: bool,
}

fn resolve_settings(cli: &Cli) -> Settings {
    let loaded = RepoContext::discover(cli.root.as_deref()).and_then(|repo| repo.load_config());
    let config = match loaded {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::debug!(error = %err, "using default output settings");
            None
        }
    };

    let format = cli
        .format
        .map(OutputFormat::from)
        .or_else(|| cli.json.then_some(OutputFormat::Json))
        .or_else(|| config.as_ref().map(|config| config.output_format))
        .unwrap_or_default();

    Settings {
        format,
        use_color: !cli.no_color && should_use_color(),
        absolute_time: cli.absolute_time
            || config.as_ref().is_some_and(|config| config.absolute_time),
    }
}

fn run(
    command: Commands,
    root: Option<&Path>,
    formatter: &dyn OutputFormatter,
    settings: Settings,
) -> Result<String> {
    match command {
        Commands::Init => commands::init::execute(root, formatter),
        Commands::Submit {
            name,
            rating,
            comment,
        } => {
            let output = commands::submit::execute(root, name, rating, comment, formatter)?;
            if settings.format != OutputFormat::Json {
                print_success("Feedback recorded", settings.use_color);
            }
            Ok(output)
        }
        Commands::Show { id } => commands::show::execute(root, id, formatter),
        Commands::List {
            filter,
            sort,
            pages,
        } => commands::list::execute(root, filter, sort, pages, formatter),
        Commands::Stats => commands::stats::execute(root, formatter),
        Commands::Chart { kind } => commands::chart::execute(root, kind, formatter),
        Commands::Dashboard {
            filter,
            sort,
            pages,
            kind,
        } => commands::dashboard::execute(root, filter, sort, pages, kind, formatter),
    }
}

fn report_error(err: &anyhow::Error, formatter: &dyn OutputFormatter, settings: Settings) {
    tracing::debug!(error = ?err, "command failed");

    if settings.format == OutputFormat::Json {
        let output = match err.downcast_ref::<AppError>() {
            Some(app_err) => serde_json::to_string_pretty(&ErrorEnvelope::from_error(app_err))
                .unwrap_or_else(|_| formatter.format_error(&err.to_string())),
            None => formatter.format_error(&format!("{err:#}")),
        };
        println!("{}", output);
        return;
    }

    match settings.format {
        OutputFormat::Table => print_error(&format!("{err:#}"), settings.use_color),
        _ => eprintln!("{}", formatter.format_error(&format!("{err:#}"))),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let settings = resolve_settings(&cli);
    let formatter = create_formatter(settings.format, settings.use_color, settings.absolute_time);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    match run(command, cli.root.as_deref(), formatter.as_ref(), settings) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err, formatter.as_ref(), settings);
            ExitCode::FAILURE
        }
    }
}
