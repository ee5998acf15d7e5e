//! Request configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound request:
//!     → proxied_entity.rs (X-ProxiedEntitiesChain)
//!     → bearer_token.rs / basic_auth.rs (Authorization)
//!     → merge_headers (later strategies win on the same name)
//!     → to_header_map (validated reqwest HeaderMap)
//!     → client
//! ```
//!
//! # Design Decisions
//! - Each strategy is a small value implementing [`RequestConfig`]
//! - Strategies are recomputed on every call; nothing is cached
//! - A failing strategy fails the whole request, no partial header set

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

pub mod basic_auth;
pub mod bearer_token;
pub mod proxied_entity;
pub mod types;

pub use basic_auth::BasicAuthRequestConfig;
pub use bearer_token::BearerTokenRequestConfig;
pub use proxied_entity::{ProxiedEntityRequestConfig, PROXIED_ENTITIES_CHAIN_HEADER};
pub use types::RequestConfigError;

/// Header name to header value.
pub type Headers = BTreeMap<String, String>;

/// A strategy contributing headers to an outbound request.
pub trait RequestConfig: Send + Sync {
    fn headers(&self) -> Result<Headers, RequestConfigError>;
}

/// Combine several strategies. On a name collision the later one wins;
/// names compare case-insensitively, as in HTTP.
pub fn merge_headers(configs: &[&dyn RequestConfig]) -> Result<Headers, RequestConfigError> {
    let mut merged = Headers::new();
    for config in configs {
        for (name, value) in config.headers()? {
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            merged.insert(name, value);
        }
    }
    Ok(merged)
}

/// Convert a header set into the client's header type.
pub fn to_header_map(headers: &Headers) -> Result<HeaderMap, RequestConfigError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            RequestConfigError::InvalidHeader {
                name: name.clone(),
                reason: "invalid header name".to_string(),
            }
        })?;
        let mut header_value = HeaderValue::from_str(value).map_err(|_| {
            RequestConfigError::InvalidHeader {
                name: name.clone(),
                reason: "invalid header value".to_string(),
            }
        })?;
        if header_name == AUTHORIZATION {
            header_value.set_sensitive(true);
        }
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static str);

    impl RequestConfig for Fixed {
        fn headers(&self) -> Result<Headers, RequestConfigError> {
            Ok(Headers::from([(self.0.to_string(), self.1.to_string())]))
        }
    }

    #[test]
    fn test_merge_later_wins() {
        let first = Fixed("Authorization", "Bearer one");
        let second = Fixed("Authorization", "Bearer two");
        let chain = ProxiedEntityRequestConfig::new(["alice"]);

        let merged = merge_headers(&[&first, &chain, &second]).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["Authorization"], "Bearer two");
        assert_eq!(merged[PROXIED_ENTITIES_CHAIN_HEADER], "<alice>");
    }

    #[test]
    fn test_merge_later_wins_ignoring_case() {
        let first = Fixed("authorization", "Bearer first");
        let second = Fixed("Authorization", "Bearer second");

        let merged = merge_headers(&[&first, &second]).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["Authorization"], "Bearer second");

        let map = to_header_map(&merged).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[AUTHORIZATION], "Bearer second");

        let merged = merge_headers(&[&second, &first]).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["authorization"], "Bearer first");
    }

    #[test]
    fn test_merge_nothing() {
        let empty = ProxiedEntityRequestConfig::new(Vec::<String>::new());
        assert!(merge_headers(&[]).unwrap().is_empty());
        assert!(merge_headers(&[&empty]).unwrap().is_empty());
    }

    #[test]
    fn test_merge_propagates_failure() {
        let ok = Fixed("X-Other", "1");
        let bad = ProxiedEntityRequestConfig::new(["alice", "bad\nname"]);
        assert!(matches!(
            merge_headers(&[&ok, &bad]),
            Err(RequestConfigError::Encode(_))
        ));
    }

    #[test]
    fn test_to_header_map() {
        let headers = merge_headers(&[
            &ProxiedEntityRequestConfig::new(["alice", "service-b"]),
            &BearerTokenRequestConfig::new("secret"),
        ])
        .unwrap();

        let map = to_header_map(&headers).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["x-proxiedentitieschain"], "<alice><service-b>");
        assert!(map[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_to_header_map_rejects_invalid() {
        let bad_name = Headers::from([("Bad Name".to_string(), "v".to_string())]);
        let err = to_header_map(&bad_name).unwrap_err();
        assert!(matches!(
            err,
            RequestConfigError::InvalidHeader { ref name, .. } if name == "Bad Name"
        ));

        let bad_value = Headers::from([("X-Test".to_string(), "a\r\nb".to_string())]);
        assert!(to_header_map(&bad_value).is_err());
    }
}
