//! Backend Origin Routing
//!
//! The portal talks to exactly two services. Which one serves a request
//! is a pure function of the request path: paths under the knowledge
//! prefix go to the knowledge-base service, everything else to the
//! user-directory service. Stateless, recomputed per request, never
//! cached.

use reqwest::Url;

use crate::config::ClientConfig;

/// True if `path` is served by the knowledge-base service
#[inline]
pub fn is_knowledge_path(config: &ClientConfig, path: &str) -> bool {
    path.starts_with(&config.knowledge_prefix)
}

/// Select the origin that serves `path`
pub fn select_origin<'a>(config: &'a ClientConfig, path: &str) -> &'a Url {
    if is_knowledge_path(config, path) {
        &config.knowledge_origin
    } else {
        &config.directory_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::localhost()
    }

    #[test]
    fn test_knowledge_paths_route_to_knowledge_origin() {
        let config = config();
        for path in [
            "/api/knowlege",
            "/api/knowlege/42",
            "/api/knowlege/42/blocks",
            "/api/knowlege/blocks/7",
        ] {
            assert_eq!(
                select_origin(&config, path),
                &config.knowledge_origin,
                "{path} should route to the knowledge origin"
            );
        }
    }

    #[test]
    fn test_other_paths_route_to_directory_origin() {
        let config = config();
        for path in ["/api/users/", "/api/users/me", "/api/auth/refresh", "/"] {
            assert_eq!(
                select_origin(&config, path),
                &config.directory_origin,
                "{path} should route to the directory origin"
            );
        }
    }

    #[test]
    fn test_prefix_match_is_plain_starts_with() {
        // Anything extending the prefix string routes to knowledge,
        // even without a separating slash. Matches the gateway's own
        // matching rule.
        let config = config();
        assert!(is_knowledge_path(&config, "/api/knowlegebase"));
        assert!(!is_knowledge_path(&config, "/api/knowleg"));
        assert!(!is_knowledge_path(&config, "/prefix/api/knowlege"));
    }
}
