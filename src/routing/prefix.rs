//! Service prefix resolution.
//!
//! # Responsibilities
//! - Derive the routing prefix from the stack id and service name
//! - Derive the well-known health probe path under that prefix
//!
//! # Design Decisions
//! - Identifiers are opaque: no character validation beyond non-empty
//! - Both derived strings are computed once and owned by the value,
//!   so the request hot path only ever borrows

use std::fmt;

use thiserror::Error;

/// Well-known sub-path probed by the ingress for liveness.
pub const HEALTH_SUFFIX: &str = "/x-suga-health";

/// Error type for prefix resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    #[error("stack id must not be empty")]
    EmptyStackId,

    #[error("service name must not be empty")]
    EmptyServiceName,
}

/// The path prefix identifying this service on the shared ingress.
///
/// Resolved once at startup as `/{stack_id}-{service_name}`; the health
/// path is derived alongside it and both are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePrefix {
    prefix: String,
    health_path: String,
}

impl ServicePrefix {
    /// Derive the routing prefix from the two deployment identifiers.
    ///
    /// Fails if either identifier is empty.
    pub fn resolve(stack_id: &str, service_name: &str) -> Result<Self, PrefixError> {
        if stack_id.is_empty() {
            return Err(PrefixError::EmptyStackId);
        }
        if service_name.is_empty() {
            return Err(PrefixError::EmptyServiceName);
        }

        let prefix = format!("/{stack_id}-{service_name}");
        let health_path = format!("{prefix}{HEALTH_SUFFIX}");

        Ok(Self {
            prefix,
            health_path,
        })
    }

    /// The routing prefix, e.g. `/abc123-api`.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// The health probe path, e.g. `/abc123-api/x-suga-health`.
    pub fn health_path(&self) -> &str {
        &self.health_path
    }
}

impl fmt::Display for ServicePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_prefix_from_identifiers() {
        let prefix = ServicePrefix::resolve("abc123", "api").unwrap();
        assert_eq!(prefix.as_str(), "/abc123-api");
        assert_eq!(prefix.health_path(), "/abc123-api/x-suga-health");
    }

    #[test]
    fn empty_stack_id_rejected() {
        assert_eq!(
            ServicePrefix::resolve("", "api"),
            Err(PrefixError::EmptyStackId)
        );
    }

    #[test]
    fn empty_service_name_rejected() {
        assert_eq!(
            ServicePrefix::resolve("abc123", ""),
            Err(PrefixError::EmptyServiceName)
        );
    }

    #[test]
    fn display_is_the_prefix() {
        let prefix = ServicePrefix::resolve("stack1", "svc1").unwrap();
        assert_eq!(prefix.to_string(), "/stack1-svc1");
    }
}
