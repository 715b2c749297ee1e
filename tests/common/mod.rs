//! Shared helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone, Utc};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use mockable::Clock;
use shelter_carer::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

/// Embedded migrations from the `migrations` directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite database with the schema applied. Removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&database_url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Clock frozen at 2026-06-15 12:00 UTC.
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}
