use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptHubError {
    /// The ingestion input parsed as JSON but was not an array of records.
    #[error("expected a JSON array of prompt records")]
    NotAnArray,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("search query too long: {0} characters (max 200)")]
    QueryTooLong(usize),
    #[error("search query contains forbidden content")]
    ForbiddenQuery,
}
