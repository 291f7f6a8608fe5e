//! Application logs from the log cache.
//!
//! Recent logs are a single descending read, re-sorted oldest first. Tailing
//! performs one read synchronously so connection and certificate failures
//! reach the caller, then polls from a background thread that feeds a
//! [`LogStream`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::models::{LogMessage, LogStreamKind};

use super::client::{build_http_client, read_json, send};
use super::{ApiError, ApiResult, LogStream, LogsRepository};

/// Lines requested for `--recent`.
const RECENT_LIMIT: &str = "100";

/// Delay between tail polls.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Default, Deserialize)]
struct ReadResponse {
    #[serde(default)]
    envelopes: EnvelopeBatch,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeBatch {
    #[serde(default)]
    batch: Vec<Envelope>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Nanos {
    Text(String),
    Number(i64),
}

impl Nanos {
    fn value(&self) -> ApiResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .parse()
                .map_err(|_| ApiError::Decode(format!("invalid timestamp '{}'", s))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    timestamp: Nanos,
    #[serde(default)]
    source_id: String,
    #[serde(default)]
    instance_id: String,
    #[serde(default)]
    tags: HashMap<String, String>,
    log: Option<LogPayload>,
}

#[derive(Debug, Deserialize)]
struct LogPayload {
    #[serde(default)]
    payload: String,
    #[serde(default, rename = "type")]
    kind: String,
}

impl Envelope {
    fn into_message(self) -> ApiResult<Option<(i64, LogMessage)>> {
        let Some(log) = self.log else {
            return Ok(None);
        };
        let nanos = self.timestamp.value()?;
        let bytes = STANDARD
            .decode(log.payload.as_bytes())
            .map_err(|e| ApiError::Decode(format!("log payload: {}", e)))?;

        let source_type = self
            .tags
            .get("source_type")
            .cloned()
            .unwrap_or_else(|| "APP".to_string());
        let mut message = LogMessage::new(
            String::from_utf8_lossy(&bytes),
            self.source_id,
            source_type,
            DateTime::<Utc>::from_timestamp_nanos(nanos),
        );
        if !self.instance_id.is_empty() {
            message.source_instance = self.instance_id;
        }
        if log.kind.eq_ignore_ascii_case("ERR") {
            message.stream = LogStreamKind::Err;
        }
        Ok(Some((nanos, message)))
    }
}

/// Reads one application's envelopes.
#[derive(Clone)]
struct LogCacheReader {
    http: Client,
    base_url: String,
    access_token: String,
}

impl LogCacheReader {
    fn read(
        &self,
        app_guid: &str,
        params: &[(&str, String)],
    ) -> ApiResult<Vec<(i64, LogMessage)>> {
        let url = format!("{}/api/v1/read/{}", self.base_url, app_guid);
        tracing::debug!(%url, ?params, "reading log cache");

        let mut request = self
            .http
            .get(&url)
            .query(&[("envelope_types", "LOG")])
            .query(params);
        if !self.access_token.is_empty() {
            request = request.header("Authorization", &self.access_token);
        }

        let response: ReadResponse = read_json(send(request, &self.base_url)?)?;
        let mut messages = Vec::new();
        for envelope in response.envelopes.batch {
            if let Some(entry) = envelope.into_message()? {
                messages.push(entry);
            }
        }
        messages.sort_by_key(|(nanos, _)| *nanos);
        Ok(messages)
    }
}

pub struct HttpLogsRepository {
    reader: LogCacheReader,
}

impl HttpLogsRepository {
    pub fn new(
        logging_endpoint: &str,
        access_token: &str,
        skip_ssl_validation: bool,
    ) -> ApiResult<Self> {
        Ok(Self {
            reader: LogCacheReader {
                http: build_http_client(skip_ssl_validation)?,
                base_url: logging_endpoint.trim_end_matches('/').to_string(),
                access_token: access_token.to_string(),
            },
        })
    }
}

/// Start time of the next poll: just past the newest envelope seen.
fn next_start(start: i64, seen: i64) -> i64 {
    start.max(seen.saturating_add(1))
}

impl LogsRepository for HttpLogsRepository {
    fn recent(&self, app_guid: &str) -> ApiResult<Vec<LogMessage>> {
        let messages = self.reader.read(
            app_guid,
            &[
                ("descending", "true".to_string()),
                ("limit", RECENT_LIMIT.to_string()),
            ],
        )?;
        Ok(messages.into_iter().map(|(_, m)| m).collect())
    }

    fn tail(&self, app_guid: &str) -> ApiResult<LogStream> {
        let mut start = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let first = self
            .reader
            .read(app_guid, &[("start_time", start.to_string())])?;

        let (sender, receiver) = mpsc::channel();
        let reader = self.reader.clone();
        let app_guid = app_guid.to_string();

        thread::spawn(move || {
            let mut batch = first;
            loop {
                for (nanos, message) in batch {
                    start = next_start(start, nanos);
                    if sender.send(Ok(message)).is_err() {
                        return;
                    }
                }
                thread::sleep(POLL_INTERVAL);
                batch = match reader.read(&app_guid, &[("start_time", start.to_string())]) {
                    Ok(batch) => batch,
                    Err(e) => {
                        tracing::debug!(error = %e, "log tail stopped");
                        let _ = sender.send(Err(e));
                        return;
                    }
                };
            }
        });

        Ok(LogStream::new(receiver))
    }
}
