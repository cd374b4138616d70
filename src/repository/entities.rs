use crate::error::DatabaseError;
use crate::models::schema::{matches, player, stadium, team};
use crate::models::{Match, Player, ReturnValue, Stadium, Statement, Team};
use crate::repository::database::{found_or, write_outcome, Database};
use diesel::{ExpressionMethods, PgExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, RunQueryDsl};

// Deletes match on every field of the entity, not only the key: a stale or
// partially wrong entity is reported as NotExists and the row is kept.

impl Database {
    pub async fn add_team(&self, new_team: &Team) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(team::table)
                        .values(new_team)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("add_team", Statement::Insert, result)
    }

    pub async fn get_team(&self, team_id: i32) -> Team {
        let result: Result<Team, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            team::table
                .find(team_id)
                .first::<Team>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        found_or("get_team", result, Team::bad_team)
    }

    pub async fn delete_team(&self, old_team: &Team) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(team::table.filter(team::team_id.eq(old_team.team_id)))
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("delete_team", Statement::Delete, result)
    }

    pub async fn add_match(&self, new_match: &Match) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(matches::table)
                        .values(new_match)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("add_match", Statement::Insert, result)
    }

    pub async fn get_match(&self, match_id: i32) -> Match {
        let result: Result<Match, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            matches::table
                .find(match_id)
                .first::<Match>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        found_or("get_match", result, Match::bad_match)
    }

    pub async fn delete_match(&self, old_match: &Match) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(
                        matches::table
                            .filter(matches::match_id.eq(old_match.match_id))
                            .filter(matches::competition.eq(&old_match.competition))
                            .filter(matches::home_team_id.eq(old_match.home_team_id))
                            .filter(matches::away_team_id.eq(old_match.away_team_id)),
                    )
                    .execute(conn)
                    .await
                    .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("delete_match", Statement::Delete, result)
    }

    pub async fn add_player(&self, new_player: &Player) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(player::table)
                        .values(new_player)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("add_player", Statement::Insert, result)
    }

    pub async fn get_player(&self, player_id: i32) -> Player {
        let result: Result<Player, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            player::table
                .find(player_id)
                .first::<Player>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        found_or("get_player", result, Player::bad_player)
    }

    pub async fn delete_player(&self, old_player: &Player) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(
                        player::table
                            .filter(player::player_id.eq(old_player.player_id))
                            .filter(player::team_id.eq(old_player.team_id))
                            .filter(player::age.eq(old_player.age))
                            .filter(player::height.eq(old_player.height))
                            .filter(player::preferred_foot.eq(&old_player.preferred_foot)),
                    )
                    .execute(conn)
                    .await
                    .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("delete_player", Statement::Delete, result)
    }

    pub async fn add_stadium(&self, new_stadium: &Stadium) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::insert_into(stadium::table)
                        .values(new_stadium)
                        .execute(conn)
                        .await
                        .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("add_stadium", Statement::Insert, result)
    }

    pub async fn get_stadium(&self, stadium_id: i32) -> Stadium {
        let result: Result<Stadium, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            stadium::table
                .find(stadium_id)
                .first::<Stadium>(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;
        found_or("get_stadium", result, Stadium::bad_stadium)
    }

    pub async fn delete_stadium(&self, old_stadium: &Stadium) -> ReturnValue {
        let result = self
            .in_transaction(|conn| {
                async move {
                    diesel::delete(
                        stadium::table
                            .filter(stadium::stadium_id.eq(old_stadium.stadium_id))
                            .filter(stadium::capacity.eq(old_stadium.capacity))
                            // NULL owner has to match NULL
                            .filter(stadium::belongs_to.is_not_distinct_from(old_stadium.belongs_to)),
                    )
                    .execute(conn)
                    .await
                    .map_err(DatabaseError::from)
                }
                .scope_boxed()
            })
            .await;
        write_outcome("delete_stadium", Statement::Delete, result)
    }
}
