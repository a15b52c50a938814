//! File logging. The terminal belongs to the UI, so logs never go to stdout.

use crate::error::AppError;
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub fn init(path: &Path, filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|err| AppError::LogFilter {
        filter: filter.to_string(),
        reason: err.to_string(),
    })?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Subscriber(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_reported() {
        let path = Path::new("/nonexistent-dir-for-todo-tui/todo.log");
        let err = init(path, "info").unwrap_err();
        assert!(matches!(err, AppError::LogFile { .. }));
        assert!(err.to_string().contains("todo.log"));
    }
}
