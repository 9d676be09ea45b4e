use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("malformed date value: {0}")]
    MalformedDate(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
}
