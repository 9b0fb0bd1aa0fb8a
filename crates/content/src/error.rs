/// Errors from the content store layer.
///
/// Page composers never show these to a visitor; they are logged and the
/// page falls back to its placeholder copy.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The client is missing required settings (project id, dataset ...).
    #[error("Content store misconfigured: {0}")]
    Config(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Content request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status code.
    #[error("Content store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The payload did not match the expected view model.
    #[error("Content payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
