use crate::error::DatabaseError;
use crate::models::schema::{match_in_stadium, player_scores};
use crate::models::{Match, MatchInStadium, Player, PlayerScore, ReturnValue, Stadium, Statement};
use crate::repository::database::{write_outcome, Database};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, RunQueryDsl};

impl Database {
    /// Records that `scorer` scored `amount` goals in `played`. A missing
    /// match or player is reported as `NotExists`.
    pub async fn record_goal(&self, played: &Match, scorer: &Player, amount: i32) -> ReturnValue {
        let score = PlayerScore {
            player_id: scorer.player_id,
            match_id: played.match_id,
            goals: amount,
        };
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(player_scores::table)
                        .values(&score)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("record_goal", Statement::InsertFact, result)
    }

    pub async fn remove_goal(&self, played: &Match, scorer: &Player) -> ReturnValue {
        let (player_id, match_id) = (scorer.player_id, played.match_id);
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(
                        player_scores::table
                            .filter(player_scores::player_id.eq(player_id))
                            .filter(player_scores::match_id.eq(match_id)),
                    )
                    .execute(conn)
                    .await
                    .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("remove_goal", Statement::Delete, result)
    }

    /// A match is played in at most one stadium; assigning it twice gives
    /// `AlreadyExists`.
    pub async fn assign_stadium(
        &self,
        played: &Match,
        venue: &Stadium,
        attendance: i32,
    ) -> ReturnValue {
        let assignment = MatchInStadium {
            match_id: played.match_id,
            stadium_id: venue.stadium_id,
            attendance,
        };
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(match_in_stadium::table)
                        .values(&assignment)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("assign_stadium", Statement::InsertFact, result)
    }

    pub async fn unassign_stadium(&self, played: &Match, venue: &Stadium) -> ReturnValue {
        let (match_id, stadium_id) = (played.match_id, venue.stadium_id);
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(
                        match_in_stadium::table
                            .filter(match_in_stadium::match_id.eq(match_id))
                            .filter(match_in_stadium::stadium_id.eq(stadium_id)),
                    )
                    .execute(conn)
                    .await
                    .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("unassign_stadium", Statement::Delete, result)
    }
}
