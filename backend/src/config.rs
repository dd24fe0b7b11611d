//! Rental settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::events::BroadcastEventChannel;
use crate::outbound::persistence::PoolConfig;

/// Errors raised when settings cannot be turned into adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No database URL was configured.
    #[error("database url is not configured; set RENTAL_DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Configuration values for wiring the rental adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RENTAL")]
pub struct RentalSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Capacity of the broadcast event channel.
    #[ortho_config(default = 64)]
    pub event_buffer: usize,
}

impl RentalSettings {
    /// Build a broadcast event channel buffering `event_buffer` events.
    pub fn broadcast_channel(&self) -> BroadcastEventChannel {
        BroadcastEventChannel::new(self.event_buffer)
    }

    /// Build the connection pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no URL is set.
    pub fn pool_config(&self) -> Result<PoolConfig, ConfigError> {
        let database_url = self
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        Ok(PoolConfig::new(database_url).with_max_size(self.pool_max_size))
    }
}
