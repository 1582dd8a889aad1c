//! CLI entry point for the bikeshare statistics tool.
//!
//! Runs the interactive exploration session by default, or a single
//! non-interactive report or raw-row query.

use anyhow::Result;
use bikeshare_stats::{
    City, DayFilter, FilterSpec, MonthFilter, StatisticsReport, TripTable,
    output::{write_json, write_report, write_rows},
    paginate::{PAGE_SIZE, Pager},
    pipeline::run_query,
    prompt::Prompt,
};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, global = true, env = "BIKESHARE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct QueryArgs {
    #[arg(long, value_enum, ignore_case = true)]
    city: City,

    #[arg(long, value_enum, ignore_case = true, default_value_t = MonthFilter::All)]
    month: MonthFilter,

    #[arg(long, value_enum, ignore_case = true, default_value_t = DayFilter::All)]
    day: DayFilter,
}

impl QueryArgs {
    fn spec(&self) -> FilterSpec {
        FilterSpec::new(self.city, self.month, self.day)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick filters, view statistics and page through raw rows (default)
    Explore,
    /// Print statistics for one query
    Report {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print raw trip rows for one query as CSV
    Rows {
        #[command(flatten)]
        query: QueryArgs,

        /// Zero-based row to start from
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        /// Number of pages to print
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr stays quiet by default so it does not interleave with prompts
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    info!(data_dir = %cli.data_dir.display(), "Starting");

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => explore(&cli.data_dir)?,
        Commands::Report { query, json } => {
            let spec = query.spec();
            let table = run_query(&cli.data_dir, &spec)?;
            let report = StatisticsReport::compute(spec, &table);

            let stdout = io::stdout();
            if json {
                write_json(stdout.lock(), &report)?;
            } else {
                write_report(stdout.lock(), &report)?;
            }
        }
        Commands::Rows {
            query,
            start,
            pages,
        } => {
            let table = run_query(&cli.data_dir, &query.spec())?;
            let mut pager = Pager::starting_at(&table, start);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for page_number in 0..pages {
                let rows = pager.next_page();
                if rows.is_empty() {
                    break;
                }
                write_rows(&mut out, rows, page_number == 0)?;
            }
        }
    }

    Ok(())
}

/// The interactive session: ask for filters, show statistics, offer raw rows,
/// then offer to start over with a freshly loaded table.
fn explore(data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        let spec = prompt.get_filters()?;

        match run_query(data_dir, &spec) {
            Ok(table) => {
                let report = StatisticsReport::compute(spec, &table);
                write_report(prompt.output(), &report)?;
                show_raw_data(&mut prompt, &table)?;
            }
            Err(e) => {
                error!(error = %e, "Query failed");
                writeln!(prompt.output(), "Could not load data: {e}")?;
            }
        }

        if !prompt.confirm("\nWould you like to restart? Enter 'y' or 'n'.\n")? {
            break;
        }
    }

    Ok(())
}

/// Shows raw rows a page at a time for as long as the user asks for more.
fn show_raw_data<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, table: &TripTable) -> Result<()> {
    let mut pager = Pager::new(table);
    let question = format!("Would you like to see {PAGE_SIZE} rows of raw data? Enter 'y' or 'n'.\n");

    while prompt.confirm(&question)? {
        let first_page = pager.cursor() == 0;
        let rows = pager.next_page();
        if rows.is_empty() {
            writeln!(prompt.output(), "No more rows to show.")?;
            break;
        }
        write_rows(prompt.output(), rows, first_page)?;
    }

    Ok(())
}
