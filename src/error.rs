use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubscribeError {
    #[error("Please enter your email address")]
    EmptyEmail,
    #[error("\"{0}\" doesn't look like an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
