use serde::Deserialize;

/// Top-level configuration settings for the queue.
///
/// Includes settings for both the broker buffers and logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub logging: LoggingSettings,
}

/// Configuration settings for the broker.
///
/// Controls the per-topic inbound buffer capacity and the default buffer
/// capacity consumers get at subscription time.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub inbound_capacity: usize,
    pub consumer_capacity: usize,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

/// Partial broker settings.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub inbound_capacity: Option<usize>,
    pub consumer_capacity: Option<usize>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the queue has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                inbound_capacity: 1000,
                consumer_capacity: 10,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}
