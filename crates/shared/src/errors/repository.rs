use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    /// A single-row write touched some other number of rows.
    #[error("Total affected: {0}")]
    AffectedRows(u64),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    pub fn expect_single_row(affected: u64) -> Result<(), Self> {
        if affected == 1 {
            Ok(())
        } else {
            Err(RepositoryError::AffectedRows(affected))
        }
    }
}
