//! Path rewriting.
//!
//! # Responsibilities
//! - Decide whether a request path belongs to this service
//! - Strip the routing prefix before the path goes to the backend
//!
//! # Design Decisions
//! - Pure string operation: no `.`/`..` normalization, no decoding
//! - The query string is not part of the path and is untouched here;
//!   the forwarder re-attaches it
//! - The rewritten path always starts with `/`, so a request for
//!   exactly the prefix forwards as `/`, never as an empty string

/// Strip `prefix` once from the start of `path`.
///
/// Returns `None` when `path` does not start with `prefix` (the caller
/// keeps the original path). Otherwise returns the remainder, with a
/// leading `/` prepended when the remainder lacks one.
pub fn rewrite(path: &str, prefix: &str) -> Option<String> {
    let stripped = path.strip_prefix(prefix)?;

    if stripped.starts_with('/') {
        Some(stripped.to_string())
    } else {
        Some(format!("/{stripped}"))
    }
}
