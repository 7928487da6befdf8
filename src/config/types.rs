// Configuration types module
// Defines the dev-server configuration record and its built-in defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default listen port for the dev server
pub const DEFAULT_PORT: u16 = 5173;

/// Default listen host for the dev server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Main configuration structure
///
/// Built once at startup and treated as read-only for the lifetime of the
/// process. Equality is derived so reloads can be compared.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Proxy rules keyed by request path prefix
    #[serde(default = "default_proxy_rules")]
    pub proxy: BTreeMap<String, ProxyRule>,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path (optional, stdout/stderr if not set)
    #[serde(default)]
    pub log_file: Option<String>,
}

/// A single proxy rule
///
/// Requests whose path matches the rule's prefix are forwarded by the dev
/// server to `target`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    /// Backend URL the matching requests are forwarded to
    pub target: String,
    /// Rewrite the Origin/Host of forwarded requests to match the target
    #[serde(default)]
    pub rewrite_origin: bool,
    /// Skip TLS certificate verification on the proxied connection
    #[serde(default)]
    pub allow_insecure_tls: bool,
}

/// Built-in rule set: forward `/predict` to the local inference backend
pub fn default_proxy_rules() -> BTreeMap<String, ProxyRule> {
    let mut rules = BTreeMap::new();
    rules.insert(
        "/predict".to_string(),
        ProxyRule {
            target: "http://127.0.0.1:5000".to_string(),
            rewrite_origin: true,
            allow_insecure_tls: true,
        },
    );
    rules
}

#[allow(clippy::missing_const_for_fn)]
fn default_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            proxy: default_proxy_rules(),
        }
    }
}
