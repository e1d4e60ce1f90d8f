//! Connection pooling for the SQLite data store.
//!
//! Diesel's SQLite backend is synchronous, so adapters run their queries on
//! the blocking thread pool via [`DbPool::run`]. The pool enforces
//! `PRAGMA foreign_keys = ON` on every connection so the schema's foreign
//! keys actually reject dangling rows.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying checkout failure.
        message: String,
    },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying construction failure.
        message: String,
    },

    /// A blocking database task was cancelled or panicked.
    #[error("blocking database task failed: {message}")]
    Task {
        /// Underlying task failure.
        message: String,
    },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a task error with the given message.
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }
}

/// Failure raised by [`DbPool::run`]: either the pool or the query itself.
#[derive(Debug)]
pub enum RunError {
    /// The connection could not be obtained or the task did not complete.
    Pool(PoolError),
    /// The query ran and failed.
    Query(diesel::result::Error),
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use aula_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("aula.sqlite3").with_max_size(4);
/// assert_eq!(config.database_path(), "aula.sqlite3");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_path: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given SQLite database path.
    ///
    /// Defaults to 10 connections and a 30 second checkout timeout.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// The configured database path.
    #[must_use]
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

/// Enables foreign key enforcement on every pooled connection.
///
/// SQLite ships with foreign keys off per connection; a busy timeout keeps
/// concurrent writers from failing immediately on a locked database file.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Connection pool for the SQLite store.
///
/// Cloning is cheap; clones share the same underlying pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] if the pool cannot be constructed, for
    /// example when the database path is not writable.
    pub fn new(config: &PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_path());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Get a connection from the pool.
    ///
    /// Callers on the async runtime should prefer [`DbPool::run`]; this is
    /// for startup tasks such as migrations that already run synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] if a connection cannot be obtained
    /// within the configured timeout.
    pub fn get(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, PoolError> {
        self.inner
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))
    }

    /// Run a query closure on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Pool`] when the checkout or the blocking task
    /// fails and [`RunError::Query`] when the closure's query fails.
    pub async fn run<T, F>(&self, op: F) -> Result<T, RunError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> diesel::QueryResult<T> + Send + 'static,
    {
        let pool = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|err| RunError::Pool(PoolError::checkout(err.to_string())))?;
            op(&mut conn).map_err(RunError::Query)
        })
        .await
        .map_err(|err| RunError::Pool(PoolError::task(err.to_string())))?
    }

    /// Apply any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when a connection cannot be obtained or a
    /// migration fails to apply.
    pub fn run_migrations(&self) -> Result<(), PoolError> {
        let mut conn = self.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| PoolError::build(format!("migration failed: {err}")))?;
        if !applied.is_empty() {
            tracing::info!(count = applied.len(), "schema migrations applied");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("aula.sqlite3");
        assert_eq!(config.database_path(), "aula.sqlite3");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new("aula.sqlite3")
            .with_max_size(4)
            .with_connection_timeout(Duration::from_secs(60));
        assert_eq!(config.max_size, 4);
        assert_eq!(config.connection_timeout, Duration::from_secs(60));
    }

    #[rstest]
    fn pool_error_display() {
        assert!(
            PoolError::checkout("connection refused")
                .to_string()
                .contains("connection refused")
        );
        assert!(PoolError::build("bad path").to_string().contains("bad path"));
        assert!(PoolError::task("cancelled").to_string().contains("cancelled"));
    }

    #[test]
    fn in_memory_pool_enforces_foreign_keys() {
        use diesel::prelude::*;
        use diesel::sql_types::Integer;

        #[derive(QueryableByName)]
        struct Flag {
            #[diesel(sql_type = Integer)]
            foreign_keys: i32,
        }

        let pool = DbPool::new(&PoolConfig::new(":memory:").with_max_size(1)).expect("pool");
        let mut conn = pool.get().expect("connection");
        let flag: Flag = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut conn)
            .expect("pragma query");
        assert_eq!(flag.foreign_keys, 1);
    }
}
