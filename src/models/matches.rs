use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable, Insertable)]
#[diesel(table_name = crate::models::schema::matches)]
pub struct Match {
    pub match_id: i32,
    pub competition: String,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: i32,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: i32,
}

impl Match {
    pub const INTERNATIONAL: &'static str = "International";
    pub const DOMESTIC: &'static str = "Domestic";

    pub fn new(match_id: i32, competition: &str, home_team_id: i32, away_team_id: i32) -> Self {
        Match {
            match_id,
            competition: competition.to_owned(),
            home_team_id,
            away_team_id,
        }
    }

    pub fn bad_match() -> Self {
        Match {
            match_id: -1,
            competition: String::new(),
            home_team_id: -1,
            away_team_id: -1,
        }
    }

    pub fn is_bad(&self) -> bool {
        *self == Self::bad_match()
    }
}
