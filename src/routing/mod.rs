//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → dispatch.rs (classify against the service prefix)
//!     → rewrite.rs (strip prefix, normalize leading slash)
//!     → Return: Health | Forward { path } | NoMatch
//!
//! Prefix Resolution (at startup):
//!     (stack_id, service_name)
//!     → prefix.rs ("/{stack_id}-{service_name}" + derived health path)
//!     → Freeze as immutable ServicePrefix
//! ```
//!
//! # Design Decisions
//! - The prefix is resolved once at startup, immutable at runtime
//! - Dispatch is a pure function of (path, prefix): unit-testable
//!   without a network, and deterministic
//! - Exact health-path match is checked before the general prefix
//!   match; the health path lives under the service prefix, so the
//!   reverse order would forward probes to the backend

pub mod dispatch;
pub mod prefix;
pub mod rewrite;

pub use dispatch::{dispatch, RouteDecision};
pub use prefix::{PrefixError, ServicePrefix};
pub use rewrite::rewrite;
