//! Routing module
//!
//! Resolves which proxy rule, if any, applies to a request path.

mod matcher;

pub use matcher::match_proxy_rule;

use crate::config::{Config, ProxyRule};

impl Config {
    /// The proxy rule that applies to `path`, with its prefix
    ///
    /// Returns `None` when the path is not proxied.
    pub fn rule_for(&self, path: &str) -> Option<(&str, &ProxyRule)> {
        match_proxy_rule(path, &self.proxy)
    }
}
