//! CLI entry point for the event manager.
//!
//! Reads a registrant roster, prints cleaned fields, writes a cleaned copy,
//! reports registration statistics, looks up legislators and writes form
//! letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use event_manager::{
    clean::{clean_all, normalize_phone, normalize_zipcode},
    ingest::{Roster, read_roster},
    letters::{FormLetter, write_letters},
    lookup::{DEFAULT_BASE_URL, LookupConfig, SunlightDirectory, lookup_registrants},
    output::{ReportFormat, render_report, write_roster},
    record::fields,
    stats::{DayHistogram, HourHistogram, StateRanking, tally},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "event_manager")]
#[command(about = "Clean and summarise event registrant rosters", long_about = None)]
struct Cli {
    /// Roster CSV with a header row
    #[arg(short, long, global = true, default_value = "event_attendees.csv")]
    input: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print registrant names
    Names,
    /// Print cleaned home phone numbers
    Phones,
    /// Print cleaned zip codes
    Zipcodes,
    /// Write a copy of the roster with cleaned phone numbers and zip codes
    Clean {
        /// CSV file to write
        #[arg(short, long, default_value = "event_attendees_clean.csv")]
        output: PathBuf,
    },
    /// Registrations per hour of day
    Hours {
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Registrations per day of week (0 = Sunday)
    Days {
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Registrants per state, alphabetical, with popularity rank
    States {
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Look up the legislators of the first registrants by zip code
    Lookup {
        /// Number of registrants to look up
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// API key for the legislator directory
        #[arg(long, env = "LEGISLATOR_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Base URL of the legislator directory
        #[arg(long, env = "LEGISLATOR_API_URL", default_value = DEFAULT_BASE_URL)]
        api_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Write thank-you letters for the first registrants
    Letters {
        /// HTML template containing #first_name, #last_name, ... placeholders
        #[arg(short, long, default_value = "form_letter.html")]
        template: PathBuf,

        /// Directory to write letters into
        #[arg(short = 'd', long, default_value = "output")]
        output_dir: PathBuf,

        /// Number of letters to write
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    let roster = read_roster(&cli.input)?;

    match cli.command {
        Commands::Names => {
            for record in &roster {
                println!(
                    "{} {}",
                    record.get(fields::FIRST_NAME).unwrap_or_default(),
                    record.get(fields::LAST_NAME).unwrap_or_default()
                );
            }
        }
        Commands::Phones => {
            for record in &roster {
                println!("{}", normalize_phone(record.get(fields::HOMEPHONE)));
            }
        }
        Commands::Zipcodes => {
            for record in &roster {
                println!("{}", normalize_zipcode(record.get(fields::ZIPCODE)));
            }
        }
        Commands::Clean { output } => {
            clean_roster(&roster, &output)?;
        }
        Commands::Hours { format } => {
            let mut hours = HourHistogram::new();
            tally(&mut hours, &roster).context("hour report aborted")?;
            debug!(total = hours.total(), "Hour histogram complete");
            print!("{}", render_report(&hours.render(), format)?);
        }
        Commands::Days { format } => {
            let mut days = DayHistogram::new();
            tally(&mut days, &roster).context("day report aborted")?;
            debug!(total = days.total(), "Day histogram complete");
            print!("{}", render_report(&days.render(), format)?);
        }
        Commands::States { format } => {
            let mut states = StateRanking::new();
            tally(&mut states, &roster).context("state report aborted")?;
            debug!(states = states.len(), "State ranking complete");
            print!("{}", render_report(&states.render(), format)?);
        }
        Commands::Lookup {
            limit,
            api_key,
            api_url,
            timeout_secs,
        } => {
            let config = LookupConfig::new(api_key)
                .with_base_url(api_url)
                .with_timeout(Duration::from_secs(timeout_secs));
            info!(base_url = %config.base_url, limit, "Looking up legislators");

            let directory = SunlightDirectory::new(&config)?;
            for line in lookup_registrants(&directory, &roster, limit).await? {
                println!("{line}");
            }
        }
        Commands::Letters {
            template,
            output_dir,
            limit,
        } => {
            let letter = FormLetter::load(&template)?;
            let cleaned: Vec<_> = clean_all(&roster).collect();
            write_letters(&letter, &output_dir, &cleaned, limit)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/event_manager.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("event_manager.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

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

    Ok(file_guard)
}

/// Writes the cleaned roster, keeping the input's header row.
#[tracing::instrument(skip(roster, output), fields(output = %output.display(), records = roster.len()))]
fn clean_roster(roster: &Roster, output: &Path) -> Result<()> {
    let cleaned: Vec<_> = clean_all(roster).collect();
    write_roster(output, roster.headers(), &cleaned)?;
    Ok(())
}
