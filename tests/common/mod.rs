// Database-backed tests. They need a disposable PostgreSQL database:
// DATABASE_URL=postgres://... cargo test -- --ignored
#![allow(dead_code)]

use lazy_static::lazy_static;
use league_repository::config::logging::init_logging;
use league_repository::{Config, Database, Match, Player, ReturnValue, Stadium, Team};
use std::ops::Deref;
use std::sync::Once;
use tokio::sync::{Mutex, MutexGuard};

lazy_static! {
    // Every test recreates the same schema, so they take turns.
    static ref SCHEMA_LOCK: Mutex<()> = Mutex::new(());
}

static LOGGING: Once = Once::new();

pub struct TestDb {
    db: Database,
    _guard: MutexGuard<'static, ()>,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

pub async fn fresh_database() -> TestDb {
    LOGGING.call_once(|| {
        let _ = init_logging("log-config.yml");
    });
    let guard = SCHEMA_LOCK.lock().await;
    let config = Config::init().expect("DATABASE_URL must be set for database tests");
    let db = Database::new(config).expect("failed to build the connection pool");
    db.drop_schema().await;
    db.create_schema().await;
    TestDb { db, _guard: guard }
}

pub async fn add_teams(db: &Database, ids: &[i32]) {
    for &id in ids {
        assert_eq!(db.add_team(&Team::new(id)).await, ReturnValue::Ok);
    }
}

pub async fn add_match(db: &Database, id: i32, home: i32, away: i32) -> Match {
    let new_match = Match::new(id, Match::DOMESTIC, home, away);
    assert_eq!(db.add_match(&new_match).await, ReturnValue::Ok);
    new_match
}

pub async fn add_player(db: &Database, id: i32, team: i32, height: i32) -> Player {
    let new_player = Player::new(id, team, 25, height, Player::RIGHT);
    assert_eq!(db.add_player(&new_player).await, ReturnValue::Ok);
    new_player
}

pub async fn add_stadium(db: &Database, id: i32, owner: Option<i32>, capacity: i32) -> Stadium {
    let new_stadium = Stadium::new(id, owner, capacity);
    assert_eq!(db.add_stadium(&new_stadium).await, ReturnValue::Ok);
    new_stadium
}
