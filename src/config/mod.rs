// Configuration module entry point
// Loads the dev-server record from file, environment, and built-in defaults

mod types;
mod validate;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, LoggingConfig, ProxyRule, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use validate::ValidationError;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "devserver.toml" when no path specified
    ///
    /// A missing file is not an error: the built-in defaults reproduce the
    /// static record (port 5173, one `/predict` proxy rule). Environment
    /// variables prefixed with `DEVSERVER__` override file values, e.g.
    /// `DEVSERVER__SERVER__PORT=4000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DEVSERVER")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .build()?;

        settings.try_deserialize()
    }

    /// The address the dev server is expected to bind
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_config(dir: &Path, content: &str) -> String {
        let path = dir.join("devserver.toml");
        fs::write(&path, content).expect("write config file");
        dir.join("devserver").to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_without_file_yields_default_record() {
        let cfg = Config::load_from("no_such_config_dir/devserver").expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_reload_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = write_config(
            dir.path(),
            r#"
            [server]
            port = 4000

            [proxy."/predict"]
            target = "http://127.0.0.1:5000"
            rewrite_origin = true
            allow_insecure_tls = true
            "#,
        );

        let first = Config::load_from(&base).expect("first load");
        let second = Config::load_from(&base).expect("second load");
        assert_eq!(first, second);
        assert_eq!(first.server.port, 4000);
    }

    #[test]
    fn test_file_overrides_port_but_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = write_config(
            dir.path(),
            r#"
            [server]
            port = 8080
            "#,
        );

        let cfg = Config::load_from(&base).expect("load");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        // No proxy table in the file, so the built-in rule applies
        assert!(cfg.proxy.contains_key("/predict"));
        assert_eq!(cfg.proxy.len(), 1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = write_config(
            dir.path(),
            r#"
            [server]
            port = "not a number"
            "#,
        );

        assert!(Config::load_from(&base).is_err());
    }

    #[test]
    fn test_socket_addr_from_record() {
        let cfg = Config::default();
        let addr = cfg.get_socket_addr().expect("addr");
        assert_eq!(addr.to_string(), "127.0.0.1:5173");
    }
}
