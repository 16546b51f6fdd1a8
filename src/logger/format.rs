//! Access log format module
//!
//! Supports:
//! - `common` (Common Log Format - CLF)
//! - `json` (JSON structured logging)
//!
//! Unknown format names fall back to `common`.

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_common(),
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        let query_json = self
            .query
            .as_ref()
            .map_or_else(|| "null".to_string(), |q| format!("\"{}\"", escape_json(q)));

        format!(
            "{{\"remote_addr\":\"{}\",\"time\":\"{}\",\"method\":\"{}\",\"path\":\"{}\",\"query\":{},\"http_version\":\"{}\",\"status\":{},\"body_bytes\":{}}}",
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            query_json,
            escape_json(&self.http_version),
            self.status,
            self.body_bytes,
        )
    }
}

/// Escape special characters for JSON string values
fn escape_json(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/bye/".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 4;
        entry
    }

    #[test]
    fn test_format_common() {
        let line = make_entry().format_common();
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /bye/ HTTP/1.1\""));
        assert!(line.ends_with(" 200 4"));
    }

    #[test]
    fn test_format_common_with_query() {
        let mut entry = make_entry();
        entry.query = Some("verbose=1".to_string());
        let line = entry.format_common();
        assert!(line.contains("\"GET /bye/?verbose=1 HTTP/1.1\""));
    }

    #[test]
    fn test_format_json() {
        let line = make_entry().format_json();
        assert!(line.contains("\"remote_addr\":\"127.0.0.1\""));
        assert!(line.contains("\"method\":\"GET\""));
        assert!(line.contains("\"path\":\"/bye/\""));
        assert!(line.contains("\"query\":null"));
        assert!(line.contains("\"status\":200"));
        assert!(line.contains("\"body_bytes\":4"));
    }

    #[test]
    fn test_unknown_format_falls_back_to_common() {
        let entry = make_entry();
        assert_eq!(entry.format("combined"), entry.format_common());
    }

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("a\"b"), "a\\\"b");
        assert_eq!(escape_json("a\\b"), "a\\\\b");
        assert_eq!(escape_json("a\nb"), "a\\nb");
    }
}
