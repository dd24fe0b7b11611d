//! Apply the rental database migrations.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use ortho_config::OrthoConfig as _;
use rental::RentalSettings;
use rental::outbound::persistence::apply_migrations;
use rental::telemetry::init_tracing;
use tracing::info;

/// `rental-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rental-migrate",
    about = "Apply pending schema migrations to the rental database",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `RENTAL_DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Directory holding the Diesel migrations.
    #[arg(
        long = "migrations-dir",
        value_name = "path",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations")
    )]
    migrations_dir: PathBuf,
}

fn main() -> io::Result<()> {
    init_tracing();
    let args = CliArgs::try_parse().map_err(io::Error::other)?;

    let database_url = resolve_database_url(args.database_url)?;
    let applied = apply_migrations(&database_url, &args.migrations_dir)
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;

    info!(
        applied,
        migrations_dir = %args.migrations_dir.display(),
        "rental schema up to date"
    );
    Ok(())
}

fn resolve_database_url(cli_value: Option<String>) -> io::Result<String> {
    if let Some(url) = cli_value {
        return Ok(url);
    }

    let settings = RentalSettings::load_from_iter([OsString::from("rental-migrate")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let config = settings.pool_config().map_err(io::Error::other)?;
    Ok(config.database_url().to_owned())
}
