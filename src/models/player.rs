use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable, Insertable)]
#[diesel(table_name = crate::models::schema::player)]
pub struct Player {
    pub player_id: i32,
    #[serde(rename = "teamId")]
    pub team_id: i32,
    pub age: i32,
    pub height: i32,
    #[serde(rename = "preferredFoot")]
    pub preferred_foot: String,
}

impl Player {
    pub const LEFT: &'static str = "Left";
    pub const RIGHT: &'static str = "Right";

    pub fn new(player_id: i32, team_id: i32, age: i32, height: i32, preferred_foot: &str) -> Self {
        Player {
            player_id,
            team_id,
            age,
            height,
            preferred_foot: preferred_foot.to_owned(),
        }
    }

    // Every id is -1; stored ids are CHECKed > 0.
    pub fn bad_player() -> Self {
        Player {
            player_id: -1,
            team_id: -1,
            age: -1,
            height: -1,
            preferred_foot: String::new(),
        }
    }

    pub fn is_bad(&self) -> bool {
        *self == Self::bad_player()
    }
}
