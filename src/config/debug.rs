use super::*;

fn log_max_size() -> u64 {
    1024 * 1024 * 1024
}

fn log_queue_depth() -> usize {
    4096
}

fn log_single_message_size() -> usize {
    1024
}

#[derive(Clone, Deserialize)]
pub struct Debug {
    #[serde(default)]
    log_level: LogLevel,
    /// Optional log file. Logging goes to stderr when unset.
    #[serde(default)]
    log_file: Option<String>,
    /// Backup file for log rotation. Defaults to the log file with a `.old`
    /// extension appended.
    #[serde(default)]
    log_backup: Option<String>,
    #[serde(default = "log_max_size")]
    log_max_size: u64,
    #[serde(default = "log_queue_depth")]
    log_queue_depth: usize,
    #[serde(default = "log_single_message_size")]
    log_single_message_size: usize,
}

impl Default for Debug {
    fn default() -> Self {
        Self {
            log_level: Default::default(),
            log_file: None,
            log_backup: None,
            log_max_size: log_max_size(),
            log_queue_depth: log_queue_depth(),
            log_single_message_size: log_single_message_size(),
        }
    }
}

impl Debug {
    pub fn log_level(&self) -> Level {
        self.log_level.to_level()
    }

    pub fn log_file(&self) -> Option<String> {
        self.log_file.clone()
    }

    pub fn log_backup(&self) -> Option<String> {
        self.log_backup.clone()
    }

    pub fn log_max_size(&self) -> u64 {
        self.log_max_size
    }

    pub fn log_queue_depth(&self) -> usize {
        self.log_queue_depth
    }

    pub fn log_single_message_size(&self) -> usize {
        self.log_single_message_size
    }
}

#[derive(Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level(self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
            Self::Trace => Level::Trace,
        }
    }
}
