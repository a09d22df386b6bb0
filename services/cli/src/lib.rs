mod allocate;
mod cli;

use admission::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
