//! Logging utilities for status and diagnostic output

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Operation status lines, always shown
    Normal = 0,
    /// One verbose flag (-v)
    Info = 1,
    /// Two verbose flags (-v -v): request parameters and SDK error chains
    Debug = 2,
}

/// Verbosity-gated printer shared by the client and the backends
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Whether a message at `level` would be printed
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.verbosity >= level as u8
    }

    pub fn log(&self, msg: &str, level: LogLevel) {
        if self.enabled(level) {
            println!("{}", format_line(msg, level));
        }
    }

    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    /// Always shown, on stderr
    pub fn warn(&self, msg: &str) {
        eprintln!("warn: {msg}");
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

fn format_line(msg: &str, level: LogLevel) -> String {
    match level {
        LogLevel::Normal => msg.to_string(),
        LogLevel::Info => format!("info: {msg}"),
        LogLevel::Debug => format!("dbg: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_gate_on_verbosity() {
        let quiet = Logger::new(0);
        assert!(quiet.enabled(LogLevel::Normal));
        assert!(!quiet.enabled(LogLevel::Info));

        let chatty = Logger::new(2);
        assert!(chatty.enabled(LogLevel::Debug));
        assert_eq!(chatty.verbosity(), 2);
    }

    #[test]
    fn test_line_prefixes() {
        assert_eq!(format_line("x", LogLevel::Normal), "x");
        assert_eq!(format_line("x", LogLevel::Info), "info: x");
        assert_eq!(format_line("x", LogLevel::Debug), "dbg: x");
    }
}
