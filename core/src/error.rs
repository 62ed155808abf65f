use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Event '{event_id}' not found")]
    EventNotFound { event_id: String },

    #[error("Need at least 2 participants to run an assignment, got {count}")]
    InsufficientParticipants { count: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
