use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workout_tracker::config::Config;
use workout_tracker::error::AppError;
use workout_tracker::pipeline::run::{self, FailurePolicy};
use workout_tracker::state::AppState;
use workout_tracker::types::record::{sample_records, WorkoutRecord};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Distance, speed and calorie summaries for running, walking and swimming"
)]
struct Cli {
    /// Skip records that fail instead of stopping at the first one
    #[arg(long, global = true)]
    keep_going: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the built-in sample packages
    Sample,
    /// Summarize one package given on the command line
    Calc {
        /// Workout tag: SWM, RUN or WLK
        tag: String,
        /// Positional readings for that workout type
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Summarize a JSON array of packages read from a file, or `-` for stdin
    Batch { path: PathBuf },
    /// Serve summaries over HTTP
    Serve,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_tracker=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(err) = execute(cli, config).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn execute(cli: Cli, config: Config) -> Result<(), AppError> {
    let policy = if cli.keep_going {
        FailurePolicy::Report
    } else {
        config.failure_policy()
    };

    let records = match cli.command.unwrap_or(Command::Sample) {
        Command::Sample => sample_records(),
        Command::Calc { tag, values } => vec![WorkoutRecord::new(tag, values)],
        Command::Batch { path } => read_records(&path)?,
        Command::Serve => return serve(config).await,
    };

    let stdout = std::io::stdout();
    let report = run::run(&records, &mut stdout.lock(), policy)?;
    if report.failed > 0 {
        return Err(AppError::BadRequest(format!(
            "{} of {} records failed",
            report.failed,
            records.len()
        )));
    }
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<WorkoutRecord>, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

async fn serve(config: Config) -> Result<(), AppError> {
    let addr = format!("0.0.0.0:{}", config.port);
    let app = workout_tracker::app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Workout tracker listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Summary: POST http://{}/api/summary", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
