//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (route table, middleware: trace, timeout, limits, request ID)
//!     → handlers.rs (presence checks, store calls, status codes)
//!     → error.rs (failure → status + {"message"} body)
//!     → HTTP response
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
