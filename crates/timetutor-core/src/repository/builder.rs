//! Builder for creating and configuring PlanRepository instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::PlanRepository;
use crate::{
    clock::{Clock, DayBoundary, SystemClock},
    error::{Result, TutorError},
    store::{KeyValueStore, SqliteStore},
};

/// Builder for creating and configuring PlanRepository instances.
pub struct RepositoryBuilder {
    database_path: Option<PathBuf>,
    day_boundary: DayBoundary,
    clock: Box<dyn Clock>,
}

impl RepositoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            day_boundary: DayBoundary::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/timetutor/timetutor.db` or
    /// `~/.local/share/timetutor/timetutor.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets which calendar "today" is taken from.
    pub fn with_day_boundary(mut self, day_boundary: DayBoundary) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    /// Replaces the system clock.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builds a repository over the configured SQLite file.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::XdgDirectory` if no default path can be determined
    /// Returns `TutorError::FileSystem` if the parent directory cannot be created
    /// Returns `TutorError::Database` if the database cannot be opened
    pub fn build(self) -> Result<PlanRepository<SqliteStore>> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TutorError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening plan storage at {}", db_path.display());
        let store = SqliteStore::open(&db_path)?;
        Ok(self.build_with_store(store))
    }

    /// Builds a repository over an already opened store.
    pub fn build_with_store<S: KeyValueStore>(self, store: S) -> PlanRepository<S> {
        PlanRepository {
            store: crate::store::PlanStore::new(store),
            clock: self.clock,
            day_boundary: self.day_boundary,
        }
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("timetutor")
            .place_data_file("timetutor.db")
            .map_err(|e| TutorError::XdgDirectory(e.to_string()))
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
