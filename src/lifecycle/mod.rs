//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Init logging → Load config → Resolve prefix → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     ctrl-c or Shutdown::trigger → stop accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, the listener never binds
//! - Shutdown is a broadcast so embedders and tests can trigger it

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
