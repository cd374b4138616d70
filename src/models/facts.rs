use diesel::Insertable;

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::models::schema::player_scores)]
pub struct PlayerScore {
    pub player_id: i32,
    pub match_id: i32,
    pub goals: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::models::schema::match_in_stadium)]
pub struct MatchInStadium {
    pub match_id: i32,
    pub stadium_id: i32,
    pub attendance: i32,
}
