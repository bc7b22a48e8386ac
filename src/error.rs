use thiserror::Error;

/// Every failure a store or provider call can surface. `Display` output is
/// meant to be shown to a user as-is.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP Error: {0}")]
    HttpStatus(u16),

    /// The provider answered 200 but reported a failure in its body.
    #[error("{0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

pub type AppResult<T> = Result<T, AppError>;
