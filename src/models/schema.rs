// Mirrors the DDL in `repository::lifecycle`.

diesel::table! {
    team (team_id) {
        team_id -> Int4,
    }
}

diesel::table! {
    #[sql_name = "match"]
    matches (match_id) {
        match_id -> Int4,
        competition -> Text,
        home_team_id -> Int4,
        away_team_id -> Int4,
    }
}

diesel::table! {
    player (player_id) {
        player_id -> Int4,
        team_id -> Int4,
        age -> Int4,
        height -> Int4,
        preferred_foot -> Text,
    }
}

diesel::table! {
    stadium (stadium_id) {
        stadium_id -> Int4,
        belongs_to -> Nullable<Int4>,
        capacity -> Int4,
    }
}

diesel::table! {
    player_scores (player_id, match_id) {
        player_id -> Int4,
        match_id -> Int4,
        goals -> Int4,
    }
}

diesel::table! {
    match_in_stadium (match_id) {
        match_id -> Int4,
        stadium_id -> Int4,
        attendance -> Int4,
    }
}

diesel::joinable!(player -> team (team_id));
diesel::joinable!(player_scores -> player (player_id));
diesel::joinable!(player_scores -> matches (match_id));
diesel::joinable!(match_in_stadium -> matches (match_id));
diesel::joinable!(match_in_stadium -> stadium (stadium_id));

diesel::allow_tables_to_appear_in_same_query!(
    team,
    matches,
    player,
    stadium,
    player_scores,
    match_in_stadium,
);
