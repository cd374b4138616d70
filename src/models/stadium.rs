use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable, Insertable)]
#[diesel(table_name = crate::models::schema::stadium)]
pub struct Stadium {
    pub stadium_id: i32,
    /// Owning team, if any. A team owns at most one stadium.
    #[serde(rename = "belongsTo")]
    pub belongs_to: Option<i32>,
    pub capacity: i32,
}

impl Stadium {
    pub fn new(stadium_id: i32, belongs_to: Option<i32>, capacity: i32) -> Self {
        Stadium {
            stadium_id,
            belongs_to,
            capacity,
        }
    }

    pub fn bad_stadium() -> Self {
        Stadium {
            stadium_id: -1,
            belongs_to: None,
            capacity: -1,
        }
    }

    pub fn is_bad(&self) -> bool {
        *self == Self::bad_stadium()
    }
}
