//! Logger module
//!
//! Provides logging utilities for the configuration tool including:
//! - Config load/validation lifecycle logging
//! - Effective configuration summary
//! - File-based logging support

mod writer;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let quiet = matches!(config.logging.level.as_str(), "warn" | "error");
    writer::init(config.logging.log_file.as_deref(), quiet)
}

/// Write to info log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn log_config_loaded(source: &str, config: &Config) {
    write_info(&format!("[CONFIG] Loaded configuration from '{source}'"));
    write_info(&format!("[CONFIG] Log level: {}", config.logging.level));
    if let Some(ref path) = config.logging.log_file {
        write_info(&format!("[CONFIG] Log file: {path}"));
    }
}

/// Log the effective record the external dev server will consume
pub fn log_effective_config(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info(&format!("Dev server listen address: http://{addr}"));
    if config.proxy.is_empty() {
        write_info("No proxy rules configured");
    } else {
        write_info("Proxy rules:");
        for (prefix, rule) in &config.proxy {
            write_info(&format!(
                "  {prefix} -> {} (rewrite_origin: {}, allow_insecure_tls: {})",
                rule.target, rule.rewrite_origin, rule.allow_insecure_tls
            ));
        }
    }
    write_info("======================================");
}

pub fn log_validation_ok() {
    write_info("[CHECK] Configuration is valid");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}
