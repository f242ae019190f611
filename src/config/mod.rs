mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{BrokerSettings, LoggingSettings, Settings};

/// Loads the configuration from the optional `config/default` file and
/// `MEMQ_`-prefixed environment variables (nested keys separated by `__`,
/// e.g. `MEMQ_BROKER__INBOUND_CAPACITY`), merged over built-in defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("MEMQ")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        broker: BrokerSettings {
            inbound_capacity: partial
                .broker
                .as_ref()
                .and_then(|b| b.inbound_capacity)
                .unwrap_or(default.broker.inbound_capacity),
            consumer_capacity: partial
                .broker
                .as_ref()
                .and_then(|b| b.consumer_capacity)
                .unwrap_or(default.broker.consumer_capacity),
        },
        logging: LoggingSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
    })
}

#[cfg(test)]
mod tests;
