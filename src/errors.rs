#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Status mismatch: transport {transport}, envelope {envelope}")]
    StatusMismatch { transport: u16, envelope: i64 },
}
