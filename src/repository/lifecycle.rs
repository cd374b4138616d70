use crate::error::DatabaseError;
use crate::repository::database::Database;
use diesel_async::{scoped_futures::ScopedFutureExt, SimpleAsyncConnection};
use log::{error, info};

const CREATE_SCHEMA: &str = r#"
CREATE TABLE team (
    team_id INTEGER PRIMARY KEY CHECK (team_id > 0)
);

CREATE TABLE "match" (
    match_id     INTEGER PRIMARY KEY CHECK (match_id > 0),
    competition  TEXT    NOT NULL CHECK (competition IN ('International', 'Domestic')),
    home_team_id INTEGER NOT NULL REFERENCES team (team_id),
    away_team_id INTEGER NOT NULL REFERENCES team (team_id),
    CHECK (home_team_id <> away_team_id)
);

CREATE TABLE player (
    player_id      INTEGER PRIMARY KEY CHECK (player_id > 0),
    team_id        INTEGER NOT NULL CHECK (team_id > 0) REFERENCES team (team_id),
    age            INTEGER NOT NULL CHECK (age > 0),
    height         INTEGER NOT NULL CHECK (height > 0),
    preferred_foot TEXT    NOT NULL CHECK (preferred_foot IN ('Left', 'Right'))
);

CREATE TABLE stadium (
    stadium_id INTEGER PRIMARY KEY CHECK (stadium_id > 0),
    belongs_to INTEGER UNIQUE REFERENCES team (team_id),
    capacity   INTEGER NOT NULL CHECK (capacity > 0)
);

CREATE TABLE player_scores (
    player_id INTEGER NOT NULL REFERENCES player (player_id) ON DELETE CASCADE,
    match_id  INTEGER NOT NULL REFERENCES "match" (match_id) ON DELETE CASCADE,
    goals     INTEGER NOT NULL CHECK (goals > 0),
    PRIMARY KEY (player_id, match_id)
);

CREATE TABLE match_in_stadium (
    match_id   INTEGER PRIMARY KEY REFERENCES "match" (match_id) ON DELETE CASCADE,
    stadium_id INTEGER NOT NULL REFERENCES stadium (stadium_id) ON DELETE CASCADE,
    attendance INTEGER NOT NULL CHECK (attendance > 0)
);

CREATE VIEW active_tall_teams AS
    SELECT p.team_id
    FROM player p
    WHERE p.height > 190
      AND EXISTS (SELECT 1 FROM "match" m
                  WHERE m.home_team_id = p.team_id OR m.away_team_id = p.team_id)
    GROUP BY p.team_id
    HAVING COUNT(DISTINCT p.player_id) >= 2;

CREATE VIEW scores_in_stadium AS
    SELECT s.stadium_id, ps.goals
    FROM stadium s
    LEFT OUTER JOIN match_in_stadium mis ON s.stadium_id = mis.stadium_id
    FULL JOIN player_scores ps ON ps.match_id = mis.match_id;

CREATE VIEW all_players_score AS
    SELECT p.player_id, p.team_id, ps.match_id, ps.goals
    FROM player p
    LEFT OUTER JOIN player_scores ps ON p.player_id = ps.player_id;
"#;

// Children first so no foreign key blocks a parent delete.
const CLEAR_DATA: &str = r#"
DELETE FROM player_scores;
DELETE FROM match_in_stadium;
DELETE FROM stadium;
DELETE FROM player;
DELETE FROM "match";
DELETE FROM team;
"#;

const DROP_SCHEMA: &str = r#"
DROP VIEW IF EXISTS active_tall_teams;
DROP VIEW IF EXISTS scores_in_stadium;
DROP VIEW IF EXISTS all_players_score;
DROP TABLE IF EXISTS player_scores CASCADE;
DROP TABLE IF EXISTS match_in_stadium CASCADE;
DROP TABLE IF EXISTS stadium CASCADE;
DROP TABLE IF EXISTS player CASCADE;
DROP TABLE IF EXISTS "match" CASCADE;
DROP TABLE IF EXISTS team CASCADE;
"#;

impl Database {
    pub async fn create_schema(&self) {
        self.run_batch("create_schema", CREATE_SCHEMA).await
    }

    pub async fn clear_data(&self) {
        self.run_batch("clear_data", CLEAR_DATA).await
    }

    pub async fn drop_schema(&self) {
        self.run_batch("drop_schema", DROP_SCHEMA).await
    }

    // Administrative batches have no caller-visible outcome; failures are only logged.
    async fn run_batch(&self, operation: &str, batch: &'static str) {
        let result = self
            .in_transaction(|conn| {
                async move { conn.batch_execute(batch).await.map_err(DatabaseError::from) }
                    .scope_boxed()
            })
            .await;

        match result {
            Ok(()) => info!("{operation} finished"),
            Err(err) => error!("An error occurred in the {operation} function. The error: {err}"),
        }
    }
}
