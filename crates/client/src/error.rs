use reqwest::StatusCode;
use thiserror::Error;

/// Failure of an admin API call.
///
/// Resource functions never interpret failures themselves; whatever the
/// transport produced is propagated unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or protocol-level failure from reqwest.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response whose body was not a server envelope.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The server answered with an envelope code other than 200.
    #[error("server rejected request (code {code}): {message}")]
    Api { code: i64, message: String },

    /// A 2xx response that did not decode as an envelope.
    #[error("failed to decode response near `{preview}`: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        preview: String,
    },

    /// A success envelope with no `data` payload where one was expected.
    #[error("response carried no data payload")]
    MissingData,
}
