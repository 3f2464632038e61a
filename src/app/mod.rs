//! Core modules for alarm status lookup.
//!
//! - [`data_plane`] - AWS data plane queries (CloudWatch alarm status)
//! - [`config`] - TOML configuration and AWS SDK config loading
//! - [`logging`] - File-based tracing setup

pub mod config;
pub mod data_plane;
pub mod logging;
