//! Shared utilities for the Danwa chat relay.
//!
//! Provides the tracing logger setup and JST time helpers used by
//! both the server and its integration tests.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
pub use time::{get_jst_timestamp, timestamp_to_jst_rfc3339};
