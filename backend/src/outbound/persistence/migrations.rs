//! Schema migrations for the apartment tables.

use std::path::{Path, PathBuf};

use diesel::{Connection, PgConnection};
use diesel_migrations::{FileBasedMigrations, MigrationHarness};
use tracing::info;

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect to database: {message}")]
    Connect { message: String },
    /// The migrations directory could not be read or a migration failed.
    #[error("failed to apply migrations from {path}: {message}")]
    Apply { path: PathBuf, message: String },
}

impl MigrationError {
    fn apply(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::Apply {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

/// Apply all pending Diesel file-based migrations for the given database.
///
/// Returns the number of migrations that ran.
///
/// # Errors
///
/// Returns [`MigrationError::Connect`] when the database is unreachable and
/// [`MigrationError::Apply`] when reading or running a migration fails.
pub fn apply_migrations(
    database_url: &str,
    migrations_dir: &Path,
) -> Result<usize, MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|error| MigrationError::Connect {
            message: error.to_string(),
        })?;
    let migrations = FileBasedMigrations::from_path(migrations_dir)
        .map_err(|error| MigrationError::apply(migrations_dir, error))?;
    let applied = connection
        .run_pending_migrations(migrations)
        .map_err(|error| MigrationError::apply(migrations_dir, error))?;

    for version in &applied {
        info!(%version, "migration applied");
    }
    Ok(applied.len())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn apply_error_names_directory() {
        let err = MigrationError::apply(Path::new("/srv/migrations"), "bad sql");
        let rendered = err.to_string();

        assert!(rendered.contains("/srv/migrations"));
        assert!(rendered.contains("bad sql"));
    }

    #[rstest]
    fn unreachable_database_is_a_connect_error() {
        let result = apply_migrations("not a url", Path::new("migrations"));

        assert!(matches!(result, Err(MigrationError::Connect { .. })));
    }
}
