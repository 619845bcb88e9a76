use std::fmt;
use std::sync::Arc;

use crate::config::errors::SettingsError;
use crate::config::EnvironmentProvider;

/// Where a loaded value came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

impl fmt::Display for ConfigValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValueSource::EnvironmentVariable { name } => write!(f, "environment variable {}", name),
            ConfigValueSource::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the setting: environment variable first, then the default
    ///
    /// The resolved value is validated whichever source it came from.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, SettingsError> {
        let setting_name = self.setting_name();

        let loaded = self
            .env_override
            .as_deref()
            .and_then(|name| {
                self.env_provider.get_var(name).map(|value| ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: name.to_string(),
                    },
                })
            })
            .or_else(|| {
                self.default_value.clone().map(|value| ConfigValue {
                    value,
                    source: ConfigValueSource::Default,
                })
            })
            .ok_or_else(|| SettingsError::MissingSetting {
                setting_name: setting_name.clone(),
            })?;

        self.validate_value(&loaded.value, &setting_name)?;

        Ok(loaded)
    }

    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), SettingsError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(SettingsError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("must be at least {} characters", min),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| SettingsError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, SettingsError> {
        let port = value.trim().parse::<u16>().map_err(|e| SettingsError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected port number (1-65535), got '{}': {}", value, e),
        })?;

        if port == 0 {
            return Err(SettingsError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn parse_positive_integer(value: &str, setting_name: &str) -> Result<u64, SettingsError> {
        let parsed = value.trim().parse::<u64>().map_err(|e| SettingsError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected positive integer, got '{}': {}", value, e),
        })?;

        if parsed == 0 {
            return Err(SettingsError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(parsed)
    }

    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }
        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_load_setting_with_source_env_override() {
        let env = Arc::new(MockEnvironment::empty().with_var("HOST", "127.0.0.1"));
        let spec = ConfigSpec::new(env).env_override("HOST").default_value("0.0.0.0");

        let loaded = spec.load_setting_with_source().unwrap();
        assert_eq!(loaded.value, "127.0.0.1");
        assert_eq!(
            loaded.source,
            ConfigValueSource::EnvironmentVariable { name: "HOST".to_string() }
        );
    }

    #[test]
    fn test_load_setting_with_source_default() {
        let env = Arc::new(MockEnvironment::empty());
        let spec = ConfigSpec::new(env).env_override("HOST").default_value("0.0.0.0");

        let loaded = spec.load_setting_with_source().unwrap();
        assert_eq!(loaded.value, "0.0.0.0");
        assert_eq!(loaded.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_load_setting_missing_without_default() {
        let env = Arc::new(MockEnvironment::empty());
        let spec = ConfigSpec::new(env).env_override("DATABASE_URL");

        assert_eq!(
            spec.load_setting_with_source(),
            Err(SettingsError::MissingSetting { setting_name: "DATABASE_URL".to_string() })
        );
    }

    #[test]
    fn test_load_setting_with_source_validation() {
        let env = Arc::new(MockEnvironment::empty().with_var("HOST", "bad host"));
        let spec = ConfigSpec::new(env)
            .env_override("HOST")
            .validator(ConfigSpec::validate_host_address);

        assert!(matches!(
            spec.load_setting_with_source(),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_min_length_applies_to_env_values() {
        let env = Arc::new(MockEnvironment::empty().with_var("DATABASE_URL", ""));
        let spec = ConfigSpec::new(env)
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1);

        assert!(matches!(
            spec.load_setting_with_source(),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(ConfigSpec::parse_port("5000", "PORT"), Ok(5000));
        assert_eq!(ConfigSpec::parse_port(" 8080 ", "PORT"), Ok(8080));
        assert!(matches!(
            ConfigSpec::parse_port("0", "PORT"),
            Err(SettingsError::InvalidSetting { .. })
        ));
        assert!(matches!(
            ConfigSpec::parse_port("65536", "PORT"),
            Err(SettingsError::ParseError { .. })
        ));
        assert!(matches!(
            ConfigSpec::parse_port("http", "PORT"),
            Err(SettingsError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(ConfigSpec::parse_positive_integer("5", "DATABASE_TIMEOUT_SECS"), Ok(5));
        assert!(ConfigSpec::parse_positive_integer("0", "DATABASE_TIMEOUT_SECS").is_err());
        assert!(ConfigSpec::parse_positive_integer("-1", "DATABASE_TIMEOUT_SECS").is_err());
    }

    #[test]
    fn test_source_display() {
        let env_source = ConfigValueSource::EnvironmentVariable {
            name: "PORT".to_string(),
        };

        assert_eq!(env_source.to_string(), "environment variable PORT");
        assert_eq!(ConfigValueSource::Default.to_string(), "default");
    }
}
