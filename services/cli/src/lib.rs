mod batch;
mod cli;
mod demo;
mod evaluate;
mod infra;

use agape_core::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
