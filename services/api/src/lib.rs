mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use longevity::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
