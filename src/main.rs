use clap::Parser;
use digrone_stats::cli::Args;
use digrone_stats::error::AppError;
use digrone_stats::{commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Err(e) = commands::run(args).await {
        tracing::error!("{e}");
        return Err(e);
    }
    Ok(())
}
