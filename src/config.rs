//! Server settings from the environment and from the client.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Default log filter when neither `NAKO_LSP_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "nako_lsp=info";

/// Key under which clients may nest our settings.
const SETTINGS_SECTION: &str = "nakoLsp";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Dump every computed semantic buffer to the client log.
    pub trace_semantic_tokens: bool,
}

/// Client-supplied settings; absent keys leave the current value alone.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsPatch {
    trace_semantic_tokens: Option<bool>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            trace_semantic_tokens: env_bool("NAKO_LSP_TRACE_SEMANTIC", false),
        }
    }

    /// Apply `initializationOptions` or `didChangeConfiguration` settings.
    ///
    /// Settings may be given directly or nested under `nakoLsp`. On error
    /// the configuration is left unchanged.
    pub fn apply_settings(&mut self, value: &Value) -> Result<(), ConfigError> {
        let section = match value {
            Value::Null => return Ok(()),
            Value::Object(map) => map.get(SETTINGS_SECTION).unwrap_or(value),
            other => other,
        };
        let patch = SettingsPatch::deserialize(section)?;
        if let Some(trace) = patch.trace_semantic_tokens {
            self.trace_semantic_tokens = trace;
        }
        Ok(())
    }
}

/// Log filter directive for the tracing subscriber.
pub fn log_filter() -> String {
    std::env::var("NAKO_LSP_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
        Err(_) => default,
    }
}
