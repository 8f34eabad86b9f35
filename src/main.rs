//! decision-readiness - inspect and classify decision analyses
//!
//! Reads analyses from the embedded examples or a directory of JSON/YAML
//! files and prints validated analyses or readiness overviews as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use decision_readiness::adapters::FileAnalysisSource;
use decision_readiness::application::{
    GetReadinessOverviewHandler, GetReadinessOverviewQuery, ListAnalysesHandler,
    ReadinessQueryError, ValidateAnalysisHandler, ValidateAnalysisQuery,
};
use decision_readiness::config::{AppConfig, LoggingConfig};
use decision_readiness::domain::decision_analysis::{validate, DecisionAnalysis};

/// decision-readiness - inspect and classify decision analyses
#[derive(Parser, Debug)]
#[command(name = "decision-readiness")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory of analyses (overrides DECISION_READINESS__SOURCE__ANALYSES_DIR)
    #[arg(long)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the keys of the available analyses
    #[command(alias = "ls")]
    List,

    /// Validate an analysis file, or the analysis stored under a key
    Validate {
        /// Path to a JSON/YAML file, or a key of the configured source
        target: String,
    },

    /// Print the readiness overview of an analysis
    Overview {
        /// Analysis key
        key: String,

        /// Day to compute data staleness against (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        as_of: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(dir) = cli.dir {
        config.source.analyses_dir = Some(dir);
    }
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging)?;

    let source = config.source.build();

    match cli.command {
        Commands::List => {
            for key in ListAnalysesHandler::new(source).handle()? {
                println!("{}", key);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { target } => {
            let path = PathBuf::from(&target);
            let result = if path.is_file() {
                validate_file(&path)
            } else {
                ValidateAnalysisHandler::new(source).handle(ValidateAnalysisQuery { key: target })
            };

            match result {
                Ok(analysis) => {
                    print_json(&analysis)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(ReadinessQueryError::Invalid(invalid)) => {
                    eprintln!("{} violation(s):", invalid.len());
                    for violation in invalid.violations() {
                        eprintln!("  {}", violation);
                    }
                    Ok(ExitCode::from(1))
                }
                Err(other) => Err(other.into()),
            }
        }
        Commands::Overview { key, as_of } => {
            let policy = config.classifier.policy()?;
            let handler = GetReadinessOverviewHandler::new(source, policy);
            let overview = handler.handle(GetReadinessOverviewQuery {
                key: key.clone(),
                as_of: as_of.unwrap_or_else(|| Utc::now().date_naive()),
            })?;
            print_json(&overview).with_context(|| format!("failed to render overview of {}", key))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate_file(path: &std::path::Path) -> Result<DecisionAnalysis, ReadinessQueryError> {
    let candidate = FileAnalysisSource::load_file(path)?;
    Ok(validate(&candidate)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(logging.env_filter()?);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
