//! CORS policy built from the configured origin whitelist.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use regex::Regex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// One whitelist entry: an exact origin or a `/pattern/` regex.
#[derive(Debug, Clone)]
enum OriginRule {
    Exact(String),
    Pattern(Regex),
}

/// Compiled origin whitelist.
#[derive(Debug, Clone, Default)]
pub struct OriginWhitelist {
    rules: Vec<OriginRule>,
}

impl OriginWhitelist {
    /// Compile whitelist entries.
    ///
    /// Entries wrapped in slashes are regular expressions that may match
    /// anywhere in the origin; invalid patterns are logged and skipped.
    pub fn new(entries: &[String]) -> Self {
        let rules = entries
            .iter()
            .filter_map(|entry| {
                let is_pattern = entry.len() >= 2 && entry.starts_with('/') && entry.ends_with('/');
                if !is_pattern {
                    return Some(OriginRule::Exact(entry.clone()));
                }
                match Regex::new(&entry[1..entry.len() - 1]) {
                    Ok(re) => Some(OriginRule::Pattern(re)),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS pattern {}: {}", entry, e);
                        None
                    }
                }
            })
            .collect();

        Self { rules }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.rules.iter().any(|rule| match rule {
            OriginRule::Exact(allowed) => allowed == origin,
            OriginRule::Pattern(re) => re.is_match(origin),
        })
    }
}

/// Build the CORS layer for the whitelist.
pub fn cors_layer(entries: &[String]) -> CorsLayer {
    let whitelist = Arc::new(OriginWhitelist::new(entries));

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request| {
                origin
                    .to_str()
                    .map(|o| whitelist.allows(o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist(entries: &[&str]) -> OriginWhitelist {
        OriginWhitelist::new(&entries.iter().map(|e| e.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_exact_entries_match_whole_origin() {
        let list = whitelist(&["http://localhost:4200"]);
        assert!(list.allows("http://localhost:4200"));
        assert!(!list.allows("http://localhost:4201"));
        assert!(!list.allows("http://evil.com/http://localhost:4200"));
    }

    #[test]
    fn test_pattern_entries_match_anywhere() {
        let list = whitelist(&["/example\\.com/"]);
        assert!(list.allows("https://app.example.com"));
        assert!(list.allows("http://example.com:8080"));
        assert!(!list.allows("https://example.org"));
    }

    #[test]
    fn test_empty_whitelist_allows_nothing() {
        assert!(!OriginWhitelist::default().allows("http://localhost"));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let list = whitelist(&["/([unclosed/", "http://ok.dev"]);
        assert!(list.allows("http://ok.dev"));
        assert!(!list.allows("([unclosed"));
    }
}
