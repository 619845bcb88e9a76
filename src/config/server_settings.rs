use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
use crate::config::errors::SettingsError;
use crate::config::EnvironmentProvider;

/// Infrastructure settings read once at startup
pub struct ServerSettings {
    database_url: String,
    database_timeout: Duration,
    server_host: String,
    server_port: u16,
    client_origin: String,
    sources: Vec<(&'static str, ConfigValueSource)>,
}

impl ServerSettings {
    /// Load server settings from environment variables using ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, SettingsError> {
        let mut sources = Vec::new();
        let mut record = |name: &'static str, loaded: ConfigValue| {
            sources.push((name, loaded.source));
            loaded.value
        };

        let database_url = record(
            "DATABASE_URL",
            ConfigSpec::new(env_provider.clone())
                .env_override("DATABASE_URL")
                .default_value("sqlite://items.db?mode=rwc")
                .min_length(1)
                .load_setting_with_source()?,
        );

        let timeout_value = record(
            "DATABASE_TIMEOUT_SECS",
            ConfigSpec::new(env_provider.clone())
                .env_override("DATABASE_TIMEOUT_SECS")
                .default_value("5")
                .load_setting_with_source()?,
        );
        let database_timeout = Duration::from_secs(ConfigSpec::parse_positive_integer(
            &timeout_value,
            "DATABASE_TIMEOUT_SECS",
        )?);

        let server_host = record(
            "HOST",
            ConfigSpec::new(env_provider.clone())
                .env_override("HOST")
                .default_value("0.0.0.0")
                .validator(ConfigSpec::validate_host_address)
                .load_setting_with_source()?,
        );

        let port_value = record(
            "PORT",
            ConfigSpec::new(env_provider.clone())
                .env_override("PORT")
                .default_value("5000")
                .load_setting_with_source()?,
        );
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let client_origin = record(
            "CLIENT_ORIGIN",
            ConfigSpec::new(env_provider)
                .env_override("CLIENT_ORIGIN")
                .default_value("http://localhost:5173")
                .min_length(1)
                .load_setting_with_source()?,
        );

        Ok(Self {
            database_url,
            database_timeout,
            server_host,
            server_port,
            client_origin,
            sources,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Connect and pool-acquire timeout for the database
    pub fn database_timeout(&self) -> Duration {
        self.database_timeout
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Origin allowed by CORS
    pub fn client_origin(&self) -> &str {
        &self.client_origin
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Where each setting was resolved from, in load order
    pub fn sources(&self) -> &[(&'static str, ConfigValueSource)] {
        &self.sources
    }
}

impl fmt::Debug for ServerSettings {
    // The database URL may carry credentials
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("database_timeout", &self.database_timeout)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("client_origin", &self.client_origin)
            .finish()
    }
}
