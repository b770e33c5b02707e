mod cli;
mod commands;
mod infra;

use hearing_listing::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
