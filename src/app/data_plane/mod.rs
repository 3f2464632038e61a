//! Data Plane Services Module
//!
//! AWS data plane integrations: queries that read live state from AWS
//! resources, as opposed to resource discovery and management.
//!
//! ## Available Services
//!
//! - **CloudWatch Alarms**: Current state of every alarm attached to a set of
//!   resource tags
//!
//! ## Architecture
//!
//! Each service keeps the same layout:
//!
//! ```text
//! src/app/data_plane/{service}/
//!   client.rs  - traits over the AWS calls + SDK implementations
//!   types.rs   - raw and normalized records
//!   error.rs   - typed failures
//! ```

pub mod cloudwatch_alarms;

pub use cloudwatch_alarms::{AlarmStatus, AlarmStatusError, CloudWatchAlarms};
