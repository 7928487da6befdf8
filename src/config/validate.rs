// Configuration validation module
// Checks the record invariants: valid listen port, well-formed proxy rules

use thiserror::Error;
use url::Url;

use super::types::Config;

/// Invariant violations found in a configuration record
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listen port must be in 1-65535")]
    InvalidPort,

    #[error("proxy rule prefix {prefix:?} must start with '/'")]
    InvalidPrefix { prefix: String },

    #[error("proxy rule {prefix:?} has a malformed target URL: {source}")]
    InvalidTargetUrl {
        prefix: String,
        #[source]
        source: url::ParseError,
    },

    #[error("proxy rule {prefix:?} has unsupported scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { prefix: String, scheme: String },
}

impl Config {
    /// Validate the record invariants
    ///
    /// Reports the first violation found; never mutates the record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.server.port == 0 {
            return Err(ValidationError::InvalidPort);
        }

        for (prefix, rule) in &self.proxy {
            if !prefix.starts_with('/') {
                return Err(ValidationError::InvalidPrefix {
                    prefix: prefix.clone(),
                });
            }

            let target = Url::parse(&rule.target).map_err(|source| {
                ValidationError::InvalidTargetUrl {
                    prefix: prefix.clone(),
                    source,
                }
            })?;

            // http/https URLs always carry a host once parsed, so scheme
            // checking is the last gate
            match target.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(ValidationError::UnsupportedScheme {
                        prefix: prefix.clone(),
                        scheme: other.to_string(),
                    })
                }
            }
        }

        Ok(())
    }
}
