//! Data-access layer for a league statistics schema on PostgreSQL: teams,
//! players, matches, stadiums, goals and attendance.
//!
//! Mutating calls answer with a [`ReturnValue`], lookups with the entity or
//! its sentinel (`Team::bad_team()` and friends), and reports with plain
//! values. Engine errors stay inside the crate.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::config::Config;
pub use error::{ConfigError, DatabaseError};
pub use models::{Match, Player, ReturnValue, Stadium, Team};
pub use repository::database::Database;
