use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use finboard_core::users::{User, UserRepositoryTrait};
use tempfile::TempDir;

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::users::UserRepository;

pub(crate) struct TestDb {
    // Keeps the database directory alive for the duration of a test.
    _dir: TempDir,
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
}

/// A fresh, migrated database. Must be called inside a Tokio runtime.
pub(crate) fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.db");
    let db_path = init(path.to_str().expect("utf-8 path")).expect("init db");
    let pool = create_pool(&db_path).expect("pool");
    run_migrations(&pool).expect("migrations");
    let writer = spawn_writer((*pool).clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

pub(crate) fn ts(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub(crate) async fn seed_user(db: &TestDb, id: &str) -> User {
    let repo = UserRepository::new(db.pool.clone(), db.writer.clone());
    repo.insert_user(
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            display_name: None,
            created_at: ts(1),
            updated_at: ts(1),
        },
        "hash".to_string(),
    )
    .await
    .expect("seed user")
}
