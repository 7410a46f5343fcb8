use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by a weather lookup. Nothing is retried; the first failure
/// at any stage is returned as-is.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected response status {status}: {}", truncate_body(.body))]
    UpstreamStatus { status: StatusCode, body: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures of the HTTP collaborator itself (no response was received).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

impl TransportError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { url: url.to_string() }
        } else {
            TransportError::Request { url: url.to_string(), message: err.to_string() }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Body is not JSON of the expected shape.
    Malformed { reason: String },
    MissingCurrentWeather,
    InsufficientForecastData { hourly: usize, daily: usize },
    NoLocationMatch,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Malformed { reason } => write!(f, "{reason}"),
            ParseErrorKind::MissingCurrentWeather => {
                f.write_str("want at least one current weather element")
            }
            ParseErrorKind::InsufficientForecastData { hourly, daily } => write!(
                f,
                "want at least {} hourly and {} daily entries, got {hourly} and {daily}",
                crate::normalize::MIN_HOURLY_ENTRIES,
                crate::normalize::MIN_DAILY_ENTRIES,
            ),
            ParseErrorKind::NoLocationMatch => {
                f.write_str("want at least one set of coordinates")
            }
        }
    }
}

/// The upstream body could not be turned into the normalized model.
///
/// The offending payload is kept verbatim for diagnostics; `Display` only shows
/// its beginning.
#[derive(Debug, Clone, Error)]
#[error("invalid API response {}: {kind}", truncate_body(.payload))]
pub struct ParseError {
    kind: ParseErrorKind,
    payload: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, payload: &[u8]) -> Self {
        Self { kind, payload: String::from_utf8_lossy(payload).into_owned() }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Local precondition failures on forecast selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("forecast offset {offset} is out of range, allowed: 0..={max}", max = crate::analytics::MAX_DAY_OFFSET)]
    OffsetOutOfRange { offset: usize },

    #[error("forecast for offset {offset} not available, only {available} days present")]
    DayUnavailable { offset: usize, available: usize },
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "ä".repeat(300);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }

    #[test]
    fn parse_error_keeps_full_payload() {
        let payload = "x".repeat(500);
        let err = ParseError::new(ParseErrorKind::NoLocationMatch, payload.as_bytes());
        assert_eq!(err.payload().len(), 500);
        assert!(err.to_string().len() < 300);
        assert!(err.to_string().contains("want at least one set of coordinates"));
    }

    #[test]
    fn offset_error_mentions_allowed_range() {
        let err = ValidationError::OffsetOutOfRange { offset: 9 };
        assert_eq!(err.to_string(), "forecast offset 9 is out of range, allowed: 0..=2");
    }
}
