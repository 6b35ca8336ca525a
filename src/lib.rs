//! Task management HTTP API.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │                 TASK API                  │
//!                    │                                           │
//!   Client Request   │  ┌─────────┐     ┌─────────────────────┐ │
//!   ─────────────────┼─▶│  http   │────▶│ handlers            │ │
//!                    │  │ server  │     │ (validate, dispatch)│ │
//!                    │  └─────────┘     └──────────┬──────────┘ │
//!                    │                             │            │
//!                    │                             ▼            │
//!   Client Response  │                  ┌─────────────────────┐ │
//!   ◀────────────────┼──────────────────│    record store     │ │
//!                    │                  │  (mutex + snapshot) │ │
//!                    │                  └─────────────────────┘ │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns       │ │
//!                    │  │  config · observability · lifecycle │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────┘
//! ```
//!
//! Five endpoints over a single flat record type: create, list (with
//! substring search), update, complete, and delete tasks. The store is
//! in-memory with an optional JSON snapshot per table.

// Core subsystems
pub mod config;
pub mod http;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::TaskStore;
