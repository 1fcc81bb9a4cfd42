use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unknown meal: {0}")]
    UnknownMeal(String),

    #[error("Meal not claimable right now: {0}")]
    NotClaimable(String),

    #[error("Meal already claimed today: {0}")]
    AlreadyClaimed(String),

    #[error("Backend rejected claim: {0}")]
    Backend(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClaimError>;
