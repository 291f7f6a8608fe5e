//! Application log records.

use chrono::{DateTime, Local, Utc};

/// Which output stream of the process emitted the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogStreamKind {
    #[default]
    Out,
    Err,
}

impl LogStreamKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::Err => "ERR",
        }
    }
}

/// One line of application output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub message: String,
    pub app_guid: String,
    /// Component that produced the line (e.g. `APP/PROC/WEB`, `RTR`, `DEA`).
    pub source_type: String,
    pub source_instance: String,
    pub stream: LogStreamKind,
    pub timestamp: DateTime<Utc>,
}

impl LogMessage {
    pub fn new(
        message: impl Into<String>,
        app_guid: impl Into<String>,
        source_type: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            message: message.into(),
            app_guid: app_guid.into(),
            source_type: source_type.into(),
            source_instance: "0".to_string(),
            stream: LogStreamKind::Out,
            timestamp,
        }
    }

    /// Render the line the way `logs` prints it.
    ///
    /// The message text is emitted verbatim; it is never used as a format
    /// string.
    pub fn render(&self) -> String {
        let local = self.timestamp.with_timezone(&Local);
        let source = format!("[{}/{}]", self.source_type, self.source_instance);
        format!(
            "{} {:<14} {} {}",
            local.format("%Y-%m-%dT%H:%M:%S%.3f%z"),
            source,
            self.stream.label(),
            self.message.trim_end_matches(['\r', '\n'])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_source_and_stream() {
        let msg = LogMessage::new("hello", "app-guid", "DEA", Utc::now());
        let line = msg.render();
        assert!(line.contains("[DEA/0]"));
        assert!(line.contains("OUT hello"));
    }

    #[test]
    fn render_keeps_formatting_verbs_verbatim() {
        let msg = LogMessage::new("hello%2Bworld%v {}", "app-guid", "DEA", Utc::now());
        assert!(msg.render().ends_with("hello%2Bworld%v {}"));
    }

    #[test]
    fn render_formats_timestamp_with_milliseconds() {
        let timestamp = DateTime::from_timestamp(1_700_000_000, 123_000_000).unwrap();
        let msg = LogMessage::new("hello", "app-guid", "RTR", timestamp);
        let local = timestamp.with_timezone(&Local);

        let line = msg.render();

        assert!(line.starts_with(&local.format("%Y-%m-%dT%H:%M:%S").to_string()));
        assert!(line.contains(".123"));
        assert!(line.ends_with("[RTR/0]        OUT hello"));
    }

    #[test]
    fn render_strips_trailing_newline() {
        let mut msg = LogMessage::new("line\n", "app-guid", "APP/PROC/WEB", Utc::now());
        msg.stream = LogStreamKind::Err;
        let line = msg.render();
        assert!(line.ends_with("ERR line"));
    }
}
