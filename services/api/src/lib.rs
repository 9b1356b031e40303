mod cli;
mod infra;
mod lookup;
mod routes;
mod server;

use civic_connect::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
