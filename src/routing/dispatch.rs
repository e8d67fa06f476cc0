//! Per-request route dispatch.
//!
//! # Responsibilities
//! - Classify each request path into exactly one terminal action
//! - Keep the decision pure so it is testable without a server
//!
//! # Design Decisions
//! - Priority order: exact health path, then prefix match, then no-match.
//!   The health path is a sub-path of the service prefix, so the exact
//!   match must run first or probes would be forwarded to the backend.
//! - Encoded as one function instead of router registration order, which
//!   not every routing table keeps stable.

use crate::routing::prefix::ServicePrefix;
use crate::routing::rewrite::rewrite;

/// The terminal action for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Exact health-path match: answer locally, never forward.
    Health,

    /// Prefix match: forward to the backend on the rewritten path.
    Forward { path: String },

    /// Not our prefix: respond 404.
    NoMatch,
}

/// Classify a request path against the resolved service prefix.
pub fn dispatch(path: &str, prefix: &ServicePrefix) -> RouteDecision {
    if path == prefix.health_path() {
        return RouteDecision::Health;
    }

    match rewrite(path, prefix.as_str()) {
        Some(rewritten) => RouteDecision::Forward { path: rewritten },
        None => RouteDecision::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix() -> ServicePrefix {
        ServicePrefix::resolve("abc123", "api").unwrap()
    }

    #[test]
    fn health_path_answered_locally() {
        assert_eq!(
            dispatch("/abc123-api/x-suga-health", &prefix()),
            RouteDecision::Health
        );
    }

    #[test]
    fn dispatch_prefers_health_over_forward() {
        // The health path also starts with the service prefix; the exact
        // match must win.
        let decision = dispatch("/abc123-api/x-suga-health", &prefix());
        assert_ne!(
            decision,
            RouteDecision::Forward {
                path: "/x-suga-health".to_string()
            }
        );
        assert_eq!(decision, RouteDecision::Health);
    }

    #[test]
    fn sub_paths_of_health_are_forwarded() {
        assert_eq!(
            dispatch("/abc123-api/x-suga-health/extra", &prefix()),
            RouteDecision::Forward {
                path: "/x-suga-health/extra".to_string()
            }
        );
    }

    #[test]
    fn prefixed_path_forwards_rewritten() {
        assert_eq!(
            dispatch("/abc123-api/users/42", &prefix()),
            RouteDecision::Forward {
                path: "/users/42".to_string()
            }
        );
    }

    #[test]
    fn bare_prefix_forwards_root() {
        assert_eq!(
            dispatch("/abc123-api", &prefix()),
            RouteDecision::Forward {
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn unrelated_prefix_is_no_match() {
        let p = ServicePrefix::resolve("stack1", "svc1").unwrap();
        assert_eq!(dispatch("/unrelated-prefix/foo", &p), RouteDecision::NoMatch);
        assert_eq!(dispatch("/other", &p), RouteDecision::NoMatch);
    }
}
