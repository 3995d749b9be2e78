mod cli;
mod commands;

use job_skills::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
