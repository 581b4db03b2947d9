mod cli;
mod demo;
mod infra;
mod render;
mod views;

use interview_playground::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
