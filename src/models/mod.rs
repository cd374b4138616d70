pub mod facts;
pub mod matches;
pub mod player;
pub mod return_value;
pub mod schema;
pub mod stadium;
pub mod team;

pub use facts::{MatchInStadium, PlayerScore};
pub use matches::Match;
pub use player::Player;
pub use return_value::{ReturnValue, Statement};
pub use stadium::Stadium;
pub use team::Team;
