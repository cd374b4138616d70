//! Read-only reports over the league schema.
//!
//! None of these surface an error: lists come back empty, scalar reports
//! fall back to their documented sentinel, and the failure is logged.

use crate::error::DatabaseError;
use crate::repository::database::Database;
use diesel::sql_types::{BigInt, Double, Integer};
use diesel::{sql_query, QueryableByName};
use diesel_async::RunQueryDsl;
use log::error;

const AVERAGE_ATTENDANCE: &str = "\
    SELECT COALESCE(AVG(attendance), 0)::float8 AS average \
    FROM match_in_stadium \
    WHERE stadium_id = $1";

const TOTAL_GOALS: &str = "\
    SELECT COALESCE(SUM(ps.goals), 0)::int8 AS total \
    FROM player_scores ps \
    JOIN match_in_stadium mis ON mis.match_id = ps.match_id \
    WHERE mis.stadium_id = $1";

// Doubled in bigint: 2 * goals overflows int4 for large tallies.
const MATCH_WINNER: &str = "\
    SELECT ps.player_id AS id \
    FROM player_scores ps \
    WHERE ps.player_id = $1 AND ps.match_id = $2 AND ps.goals > 0 \
      AND 2 * ps.goals::int8 >= (SELECT COALESCE(SUM(goals), 0) FROM player_scores WHERE match_id = $2)";

const ACTIVE_TALL_TEAMS: &str = "\
    SELECT team_id AS id \
    FROM active_tall_teams \
    ORDER BY team_id DESC \
    LIMIT 5";

const ACTIVE_TALL_RICH_TEAMS: &str = "\
    SELECT att.team_id AS id \
    FROM active_tall_teams att \
    WHERE att.team_id IN (SELECT belongs_to FROM stadium WHERE capacity > 55000) \
    ORDER BY att.team_id ASC \
    LIMIT 5";

// A home match with no recorded attendance counts as 0 attendees.
const POPULAR_TEAMS: &str = r#"
    SELECT m.home_team_id AS id
    FROM "match" m
    LEFT OUTER JOIN match_in_stadium mis ON m.match_id = mis.match_id
    GROUP BY m.home_team_id
    HAVING MIN(COALESCE(mis.attendance, 0)) > 40000
    ORDER BY m.home_team_id DESC
    LIMIT 10"#;

// The full join in scores_in_stadium yields a NULL stadium for goals scored
// in matches without a venue.
const MOST_ATTRACTIVE_STADIUMS: &str = "\
    SELECT stadium_id AS id \
    FROM scores_in_stadium \
    WHERE stadium_id IS NOT NULL \
    GROUP BY stadium_id \
    ORDER BY COALESCE(SUM(goals), 0) DESC, stadium_id ASC";

const TOP_SCORERS: &str = "\
    SELECT player_id AS id \
    FROM all_players_score \
    WHERE team_id = $1 \
    GROUP BY player_id \
    ORDER BY COALESCE(SUM(goals), 0) DESC, player_id DESC \
    LIMIT 5";

const SIMILAR_PLAYERS: &str = "\
    SELECT aps.player_id AS id \
    FROM all_players_score aps \
    WHERE aps.player_id <> $1 \
      AND aps.match_id IN (SELECT match_id FROM player_scores WHERE player_id = $1) \
    GROUP BY aps.player_id \
    HAVING 2 * COUNT(aps.match_id) >= (SELECT COUNT(match_id) FROM player_scores WHERE player_id = $1) \
    ORDER BY aps.player_id ASC \
    LIMIT 10";

#[derive(QueryableByName)]
struct IdRow {
    #[diesel(sql_type = Integer)]
    id: i32,
}

#[derive(QueryableByName)]
struct AverageRow {
    #[diesel(sql_type = Double)]
    average: f64,
}

#[derive(QueryableByName)]
struct TotalRow {
    #[diesel(sql_type = BigInt)]
    total: i64,
}

impl Database {
    /// Mean attendance of the matches played at the stadium. `0.0` when it
    /// hosted none, `-1.0` when the query itself failed.
    pub async fn average_attendance(&self, stadium_id: i32) -> f64 {
        let result: Result<AverageRow, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(AVERAGE_ATTENDANCE)
                .bind::<Integer, _>(stadium_id)
                .get_result::<AverageRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;

        match result {
            Ok(row) => row.average,
            Err(err) => {
                error!("An error occurred in the average_attendance function. The error: {err}");
                -1.0
            }
        }
    }

    /// Goals scored in all matches played at the stadium. `0` when none,
    /// `-1` when the query failed.
    pub async fn total_goals(&self, stadium_id: i32) -> i64 {
        let result: Result<TotalRow, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(TOTAL_GOALS)
                .bind::<Integer, _>(stadium_id)
                .get_result::<TotalRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;

        match result {
            Ok(row) => row.total,
            Err(err) => {
                error!("An error occurred in the total_goals function. The error: {err}");
                -1
            }
        }
    }

    /// True when the player scored and has at least half of the match's goals.
    pub async fn is_match_winner(&self, player_id: i32, match_id: i32) -> bool {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(MATCH_WINNER)
                .bind::<Integer, _>(player_id)
                .bind::<Integer, _>(match_id)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;

        match result {
            Ok(rows) => !rows.is_empty(),
            Err(err) => {
                error!("An error occurred in the is_match_winner function. The error: {err}");
                false
            }
        }
    }

    pub async fn active_tall_teams(&self) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(ACTIVE_TALL_TEAMS)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("active_tall_teams", result)
    }

    pub async fn active_tall_rich_teams(&self) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(ACTIVE_TALL_RICH_TEAMS)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("active_tall_rich_teams", result)
    }

    pub async fn popular_teams(&self) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(POPULAR_TEAMS)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("popular_teams", result)
    }

    pub async fn most_attractive_stadiums(&self) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(MOST_ATTRACTIVE_STADIUMS)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("most_attractive_stadiums", result)
    }

    pub async fn top_scorers(&self, team_id: i32) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(TOP_SCORERS)
                .bind::<Integer, _>(team_id)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("top_scorers", result)
    }

    pub async fn similar_players(&self, player_id: i32) -> Vec<i32> {
        let result: Result<Vec<IdRow>, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            sql_query(SIMILAR_PLAYERS)
                .bind::<Integer, _>(player_id)
                .load::<IdRow>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        ids_or_empty("similar_players", result)
    }
}

fn ids_or_empty(operation: &str, result: Result<Vec<IdRow>, DatabaseError>) -> Vec<i32> {
    match result {
        Ok(rows) => rows.into_iter().map(|row| row.id).collect(),
        Err(err) => {
            error!("An error occurred in the {operation} function. The error: {err}");
            Vec::new()
        }
    }
}
