use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid time order: start {start} must be before end {end}")]
    InvalidTimeOrder { start: String, end: String },

    #[error("Capacity exceeded: schedule already holds the maximum of {max} slots")]
    CapacityExceeded { max: usize },

    #[error("Malformed time: {0}")]
    MalformedTime(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;
