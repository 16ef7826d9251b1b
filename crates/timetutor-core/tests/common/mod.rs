use std::path::{Path, PathBuf};

use jiff::Timestamp;
use tempfile::TempDir;
use timetutor_core::{DayBoundary, FixedClock, PlanRepository, RepositoryBuilder, SqliteStore};

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("plans.db");
    (temp_dir, db_path)
}

/// Helper function to open a repository on `db_path` frozen at `now`
pub fn repository_at(db_path: &Path, now: &str) -> PlanRepository<SqliteStore> {
    let now: Timestamp = now.parse().expect("valid timestamp");
    RepositoryBuilder::new()
        .with_database_path(Some(db_path))
        .with_day_boundary(DayBoundary::Utc)
        .with_clock(FixedClock(now))
        .build()
        .expect("Failed to create repository")
}
