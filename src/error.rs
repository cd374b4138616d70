use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::deadpool::PoolError;
use thiserror::Error;

/// Everything the engine (or the pool in front of it) can report back.
///
/// These never leave the repository methods; they are folded into a
/// `ReturnValue`, a sentinel entity or an empty result first.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("could not reach the database: {0}")]
    ConnectionFailure(String),
    #[error("not null violation: {0}")]
    NotNullViolation(String),
    #[error("check violation: {0}")]
    CheckViolation(String),
    #[error("unique violation: {0}")]
    UniqueViolation(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("unknown database error: {0}")]
    Unknown(String),
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    ApplicationLogic(String),
}

impl From<DieselError> for DatabaseError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_owned();
                match kind {
                    DatabaseErrorKind::UniqueViolation => DatabaseError::UniqueViolation(message),
                    DatabaseErrorKind::ForeignKeyViolation => {
                        DatabaseError::ForeignKeyViolation(message)
                    }
                    DatabaseErrorKind::NotNullViolation => DatabaseError::NotNullViolation(message),
                    DatabaseErrorKind::CheckViolation => DatabaseError::CheckViolation(message),
                    DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                        DatabaseError::ConnectionFailure(message)
                    }
                    _ => DatabaseError::Unknown(message),
                }
            }
            DieselError::NotFound => DatabaseError::NotFound,
            DieselError::DeserializationError(e) => DatabaseError::ApplicationLogic(format!(
                "could not decode row: {e}"
            )),
            other => DatabaseError::Unknown(other.to_string()),
        }
    }
}

impl From<PoolError> for DatabaseError {
    fn from(err: PoolError) -> Self {
        DatabaseError::ConnectionFailure(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("failed to parse {name} as {expected}: {value}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
