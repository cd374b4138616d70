use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable, Insertable)]
#[diesel(table_name = crate::models::schema::team)]
pub struct Team {
    pub team_id: i32,
}

impl Team {
    pub fn new(team_id: i32) -> Self {
        Team { team_id }
    }

    /// Returned by lookups that found nothing or failed.
    pub fn bad_team() -> Self {
        Team { team_id: -1 }
    }

    pub fn is_bad(&self) -> bool {
        *self == Self::bad_team()
    }
}
