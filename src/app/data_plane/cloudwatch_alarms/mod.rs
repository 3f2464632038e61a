//! CloudWatch Alarm Status Module
//!
//! Resolves the current status of every CloudWatch alarm attached to a set of
//! resource tags.
//!
//! ## Flow
//!
//! ```text
//! tags ──► SearchResources (paged) ──► alarm names ──► DescribeAlarms (paged) ──► AlarmStatus
//! ```
//!
//! Discovery runs to completion before any alarm is described. Composite and
//! metric alarms are normalized into the same [`AlarmStatus`] shape.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alarmstatus::app::data_plane::cloudwatch_alarms::CloudWatchAlarms;
//! use std::collections::HashMap;
//!
//! # async fn example(aws_config: aws_config::SdkConfig) -> anyhow::Result<()> {
//! let alarms = CloudWatchAlarms::from_conf(&aws_config);
//!
//! let tags = HashMap::from([("copilot-environment".to_string(), "test".to_string())]);
//! for status in alarms.get_alarms_with_tags(&tags).await? {
//!     println!("{} [{}] {}", status.name, status.alarm_type, status.status);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod arn;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod service;
pub mod types;

pub use client::{AlarmDescribeClient, ResourceSearchClient};
pub use error::{AlarmStatusError, AlarmStatusResult, ArnError, TransportError};
pub use fetcher::fetch_alarm_statuses;
pub use normalize::normalize;
pub use query::{SearchQuery, TagFilter, CLOUDWATCH_ALARM_RESOURCE_TYPE, RESOURCE_QUERY_TYPE};
pub use resolver::resolve_alarm_names;
pub use service::CloudWatchAlarms;
pub use types::{
    AlarmKind, AlarmState, AlarmStatus, CompositeAlarm, DescribePage, MetricAlarm, RawAlarm,
    ResourceIdentifier, SearchPage,
};
