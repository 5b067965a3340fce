//! Danwa chat relay server library.
//!
//! A single-process group-chat relay: clients join a shared room over
//! WebSocket, exchange messages, and see transient typing indicators.
//! The server tracks connected sessions, fans events out to the correct
//! subset of peers, and expires stale typing state autonomously.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
