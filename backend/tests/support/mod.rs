//! Shared helper utilities for integration tests that need PostgreSQL.

pub mod cluster_skip;
pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

pub use cluster_skip::handle_cluster_setup_failure;

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// `postgres::Error` often displays as a bare `db error`, so prefer the
/// database error's message and SQLSTATE when one is available.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );

    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }

    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }

    summary
}

/// Drop and recreate `name` on the cluster so each suite starts empty.
///
/// Runs through `postgres` against the maintenance database, since
/// `DROP DATABASE` cannot run inside a transaction.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(admin_url.as_str(), NoTls).map_err(|err| format_postgres_error(&err))?;
    let escaped = name.replace('"', "\"\"");
    client
        .batch_execute(&format!(
            r#"DROP DATABASE IF EXISTS "{escaped}"; CREATE DATABASE "{escaped}";"#
        ))
        .map_err(|err| format_postgres_error(&err))
}
