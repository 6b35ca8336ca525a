//! Observability subsystem.
//!
//! Structured logging via tracing; per-request correlation comes from
//! the request-id middleware wired up in `http::server`.

pub mod logging;

pub use logging::init_logging;
