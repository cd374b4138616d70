use crate::error::DatabaseError;
use serde::Serialize;
use std::fmt;

/// Outcome of every mutating repository call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnValue {
    Ok,
    NotExists,
    AlreadyExists,
    BadParams,
    Error,
}

/// The kind of statement whose failure is being classified. The same engine
/// error means different things depending on what was being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Insert,
    /// Insert into `player_scores` or `match_in_stadium`: a missing parent row
    /// is reported as `NotExists` instead of `BadParams`.
    InsertFact,
    Delete,
}

impl ReturnValue {
    pub fn from_error(statement: Statement, err: &DatabaseError) -> Self {
        match (statement, err) {
            (Statement::Delete, _) => ReturnValue::Error,
            (_, DatabaseError::UniqueViolation(_)) => ReturnValue::AlreadyExists,
            (_, DatabaseError::CheckViolation(_) | DatabaseError::NotNullViolation(_)) => {
                ReturnValue::BadParams
            }
            (Statement::InsertFact, DatabaseError::ForeignKeyViolation(_)) => {
                ReturnValue::NotExists
            }
            (Statement::Insert, DatabaseError::ForeignKeyViolation(_)) => ReturnValue::BadParams,
            (
                _,
                DatabaseError::ConnectionFailure(_)
                | DatabaseError::Unknown(_)
                | DatabaseError::NotFound
                | DatabaseError::ApplicationLogic(_),
            ) => ReturnValue::Error,
        }
    }

    pub fn from_deleted_rows(rows: usize) -> Self {
        if rows == 0 {
            ReturnValue::NotExists
        } else {
            ReturnValue::Ok
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReturnValue::Ok => "OK",
            ReturnValue::NotExists => "NOT_EXISTS",
            ReturnValue::AlreadyExists => "ALREADY_EXISTS",
            ReturnValue::BadParams => "BAD_PARAMS",
            ReturnValue::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}
