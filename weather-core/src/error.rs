pub use reqwest::StatusCode;
use thiserror::Error;

/// Local validation failure: the typed name is not in the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("'{0}' is not a known city. Please select a valid city from suggestions.")]
    UnknownCity(String),
}

/// Remote failure while fetching current weather.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to OpenWeather")]
    Transport(#[source] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse OpenWeather response")]
    Decode(#[source] serde_json::Error),
}

/// Shortens a response body so it can be embedded in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
