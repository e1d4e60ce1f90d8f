//! Shared helpers for integration tests backed by a temporary SQLite store.

use aula_backend::outbound::persistence::{DbPool, PoolConfig};
use tempfile::TempDir;

/// A migrated SQLite store living in a temporary directory.
///
/// The directory is removed when the value drops, taking the database file
/// with it.
pub struct TestStore {
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh store and run the embedded migrations against it.
pub fn migrated_store() -> TestStore {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("test.sqlite3");
    let pool =
        DbPool::new(&PoolConfig::new(path.to_str().expect("utf-8 path"))).expect("connection pool");
    pool.run_migrations().expect("migrations");
    TestStore { pool, _dir: dir }
}
