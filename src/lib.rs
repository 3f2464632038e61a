//! alarmstatus - CloudWatch alarm status for tagged AWS resources
//!
//! Given a set of resource tags (for example the tags identifying a deployed
//! service), this crate discovers every CloudWatch alarm carrying those tags
//! through the Resource Groups API and reports each alarm's current state.
//!
//! # Architecture Overview
//!
//! - **Discovery** ([`app::data_plane::cloudwatch_alarms::resolver`]): pages
//!   through `SearchResources` and extracts alarm names from the returned ARNs
//! - **Describe** ([`app::data_plane::cloudwatch_alarms::fetcher`]): pages
//!   through `DescribeAlarms` for the discovered names
//! - **Normalization** ([`app::data_plane::cloudwatch_alarms::normalize`]):
//!   folds composite and metric alarms into one
//!   [`AlarmStatus`](app::data_plane::cloudwatch_alarms::AlarmStatus) shape
//! - **Configuration** ([`app::config`]) and **logging** ([`app::logging`])
//!   for the `alarmstatus` binary
//!
//! Both remote calls sit behind small async traits
//! ([`ResourceSearchClient`](app::data_plane::cloudwatch_alarms::ResourceSearchClient),
//! [`AlarmDescribeClient`](app::data_plane::cloudwatch_alarms::AlarmDescribeClient))
//! implemented for the AWS SDK clients.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
