//! Helpers for integration tests.

use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use rw_kiosco::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary SQLite database used in integration tests. The backing file
/// (and its -wal/-shm siblings) lives in a temp dir that vanishes on drop.
pub struct TestDb {
    dir: TempDir,
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        let path = dir.path().join(filename);
        let database_url = path.to_str().expect("db path should be UTF-8").to_string();

        let pool = establish_connection_pool(&database_url)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            dir,
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)] // not every test binary inspects the file
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(&self.filename)
    }
}
