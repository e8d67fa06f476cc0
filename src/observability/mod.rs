//! Observability subsystem.
//!
//! Structured logging via `tracing`; the request ID generated in the HTTP
//! layer flows through every event so one request can be followed from
//! ingress to backend and back.

pub mod logging;
