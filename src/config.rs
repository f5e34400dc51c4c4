use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "task-dialog.log";
const DEFAULT_LOG_FILTER: &str = "task_dialog=info";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where tracing output goes; the terminal belongs to the UI.
    pub log_file: PathBuf,
    /// `EnvFilter` directive used for the log file.
    pub log_filter: String,
}

impl Config {
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `TASK_DIALOG_LOG_FILE` | `task-dialog.log`    |
    /// | `TASK_DIALOG_LOG`      | `task_dialog=info`   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_file = lookup("TASK_DIALOG_LOG_FILE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.into())
            .into();

        let log_filter = lookup("TASK_DIALOG_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Self {
            log_file,
            log_filter,
        }
    }
}
