use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number {0}")]
    InvalidNumber(String),

    #[error("Invalid operator {0}")]
    InvalidOperator(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl CrudError {
    /// True for errors caused by the caller rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CrudError::BadRequest(_)
                | CrudError::NotFound(_)
                | CrudError::Json(_)
                | CrudError::InvalidNumber(_)
                | CrudError::InvalidOperator(_)
                | CrudError::DivisionByZero
        )
    }
}

impl<T> From<std::sync::PoisonError<T>> for CrudError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        CrudError::Storage(format!("lock poisoned: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CrudError>;
