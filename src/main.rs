use clap::Parser;
use football_terminal::app;
use football_terminal::cli::Args;
use football_terminal::error::AppError;
use football_terminal::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard flushes the file appender on drop; keep it for the whole run
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = app::run(&args).await;
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {e}");
    }
    result
}
