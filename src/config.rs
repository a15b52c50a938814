use clap::Parser;
use std::path::PathBuf;

/// Terminal todo list.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Write logs to this file. Logging is off when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `todo_tui=trace`.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Id given to the first todo created.
    #[arg(long, default_value_t = 1)]
    pub start_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["todo-tui"]).unwrap();
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level, "info");
        assert_eq!(args.start_id, 1);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "todo-tui",
            "--log-file",
            "/tmp/todo.log",
            "--log-level",
            "debug",
            "--start-id",
            "5",
        ])
        .unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/todo.log")));
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.start_id, 5);
    }

    #[test]
    fn rejects_non_numeric_start_id() {
        assert!(Args::try_parse_from(["todo-tui", "--start-id", "five"]).is_err());
    }
}
