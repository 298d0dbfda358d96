mod cli;
mod infra;
mod render;

use smartship::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
