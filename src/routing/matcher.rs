//! Proxy rule matching module
//!
//! Implements path-prefix matching against the proxy rule map.

use std::collections::BTreeMap;

use crate::config::ProxyRule;

/// Find the proxy rule matching a request path
///
/// A rule matches when the path starts with the rule's prefix. When several
/// prefixes match, the longest one wins (most specific rule).
pub fn match_proxy_rule<'a>(
    path: &str,
    rules: &'a BTreeMap<String, ProxyRule>,
) -> Option<(&'a str, &'a ProxyRule)> {
    rules
        .iter()
        .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(prefix, rule)| (prefix.as_str(), rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rules(prefixes: &[&str]) -> BTreeMap<String, ProxyRule> {
        prefixes
            .iter()
            .map(|prefix| {
                (
                    (*prefix).to_string(),
                    ProxyRule {
                        target: format!("http://127.0.0.1:5000{prefix}"),
                        rewrite_origin: false,
                        allow_insecure_tls: false,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_match_prefix() {
        let rules = make_rules(&["/predict"]);

        assert!(match_proxy_rule("/predict", &rules).is_some());
        assert!(match_proxy_rule("/predict/image", &rules).is_some());
        // Plain string-prefix semantics, same as the dev-server contract
        assert!(match_proxy_rule("/predictions", &rules).is_some());
    }

    #[test]
    fn test_no_match_for_other_paths() {
        let rules = make_rules(&["/predict"]);

        assert!(match_proxy_rule("/", &rules).is_none());
        assert!(match_proxy_rule("/api", &rules).is_none());
        assert!(match_proxy_rule("/pred", &rules).is_none());
        assert!(match_proxy_rule("predict", &rules).is_none());
    }

    #[test]
    fn test_longest_prefix_wins() {
        let rules = make_rules(&["/api", "/api/v1"]);

        let (prefix, _) = match_proxy_rule("/api/v1/users", &rules).expect("match");
        assert_eq!(prefix, "/api/v1");

        let (prefix, _) = match_proxy_rule("/api/v2/users", &rules).expect("match");
        assert_eq!(prefix, "/api");
    }

    #[test]
    fn test_empty_rule_map_proxies_nothing() {
        let rules = BTreeMap::new();
        assert!(match_proxy_rule("/predict", &rules).is_none());
    }
}
