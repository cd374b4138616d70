use crate::config::config::Config;
use crate::error::DatabaseError;
use crate::models::{ReturnValue, Statement};
use deadpool::managed::Object;
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    scoped_futures::ScopedBoxFuture,
    AsyncConnection, AsyncPgConnection, RunQueryDsl,
};
use log::{debug, error};
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;

pub type DBPool = Pool<AsyncPgConnection>;
pub type DBConn = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Handle to the league database. Every public method checks out one pooled
/// connection and hands it back when it returns.
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(config: Config) -> Result<Self, DatabaseError> {
        let manager = match config.ca_file {
            Some(ca_file) => AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
                config.database_url,
                move |url| Box::pin(Self::establish(url, ca_file.clone())),
            ),
            None => AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url),
        };
        let pool = Pool::builder(manager)
            .max_size(config.pool_max_size)
            .build()
            .map_err(|e| DatabaseError::ConnectionFailure(e.to_string()))?;
        Ok(Database { pool })
    }

    async fn establish(database_url: &str, ca_file: String) -> ConnectionResult<AsyncPgConnection> {
        let mut builder = SslConnector::builder(SslMethod::tls())
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        builder
            .set_ca_file(&ca_file)
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    pub(crate) async fn get_db_conn(&self) -> Result<DBConn, DatabaseError> {
        self.pool.get().await.map_err(DatabaseError::from)
    }

    /// Runs `callback` in its own transaction. Any error rolls the
    /// transaction back before the connection goes back to the pool.
    pub(crate) async fn in_transaction<'a, R, F>(&self, callback: F) -> Result<R, DatabaseError>
    where
        F: for<'r> FnOnce(
                &'r mut AsyncPgConnection,
            ) -> ScopedBoxFuture<'a, 'r, Result<R, DatabaseError>>
            + Send
            + 'a,
        R: Send + 'a,
    {
        let mut conn = self.get_db_conn().await?;
        AsyncConnection::transaction(&mut *conn, callback).await
    }

    pub async fn ping(&self) -> bool {
        let result: Result<usize, DatabaseError> = async {
            let mut conn = self.get_db_conn().await?;
            diesel::sql_query("SELECT 1")
                .execute(&mut conn)
                .await
                .map_err(DatabaseError::from)
        }
        .await;

        match result {
            Ok(_) => true,
            Err(err) => {
                error!("The database did not answer the ping. The error: {err}");
                false
            }
        }
    }
}

/// Folds the result of an insert or delete into the result vocabulary.
pub(crate) fn write_outcome(
    operation: &str,
    statement: Statement,
    result: Result<usize, DatabaseError>,
) -> ReturnValue {
    match result {
        Ok(rows) if statement == Statement::Delete => {
            let outcome = ReturnValue::from_deleted_rows(rows);
            if outcome == ReturnValue::NotExists {
                debug!("{operation}: no row matched every field");
            }
            outcome
        }
        Ok(_) => ReturnValue::Ok,
        Err(err) => {
            let outcome = ReturnValue::from_error(statement, &err);
            if outcome == ReturnValue::Error {
                error!("An error occurred in the {operation} function. The error: {err}");
            } else {
                debug!("{operation} rejected with {outcome}: {err}");
            }
            outcome
        }
    }
}

/// Returns the fetched entity, or the sentinel produced by `bad` on any failure.
pub(crate) fn found_or<T>(operation: &str, result: Result<T, DatabaseError>, bad: fn() -> T) -> T {
    match result {
        Ok(entity) => entity,
        Err(DatabaseError::NotFound) => {
            debug!("{operation}: no such row");
            bad()
        }
        Err(err) => {
            error!("An error occurred in the {operation} function. The error: {err}");
            bad()
        }
    }
}
