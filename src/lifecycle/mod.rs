//! Process lifecycle subsystem: shutdown coordination and OS signals.

pub mod shutdown;

pub use shutdown::{wait_for_signal, Shutdown};
