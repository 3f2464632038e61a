//! End-to-end alarm lookup: tag discovery followed by describe

#![warn(clippy::all, rust_2018_idioms)]

use aws_sdk_cloudwatch as cloudwatch;
use aws_sdk_resourcegroups as resourcegroups;
use std::collections::HashMap;
use std::time::Instant;

use super::client::{AlarmDescribeClient, ResourceSearchClient};
use super::error::AlarmStatusResult;
use super::fetcher::fetch_alarm_statuses;
use super::resolver::resolve_alarm_names;
use super::types::AlarmStatus;

/// Looks up CloudWatch alarm status for tagged resources
pub struct CloudWatchAlarms<S, D> {
    search_client: S,
    describe_client: D,
}

impl CloudWatchAlarms<resourcegroups::Client, cloudwatch::Client> {
    /// Create Resource Groups and CloudWatch clients from one AWS config
    pub fn from_conf(aws_config: &aws_config::SdkConfig) -> Self {
        log_debug!(
            "Creating CloudWatch alarm clients for region {:?}",
            aws_config.region()
        );
        Self::new(
            resourcegroups::Client::new(aws_config),
            cloudwatch::Client::new(aws_config),
        )
    }
}

impl<S, D> CloudWatchAlarms<S, D>
where
    S: ResourceSearchClient,
    D: AlarmDescribeClient,
{
    pub fn new(search_client: S, describe_client: D) -> Self {
        Self {
            search_client,
            describe_client,
        }
    }

    /// Get all the CloudWatch alarms that carry every tag in `tags`.
    ///
    /// Discovery finishes before any alarm is described. Either stage
    /// failing returns its error and no statuses.
    pub async fn get_alarms_with_tags(
        &self,
        tags: &HashMap<String, String>,
    ) -> AlarmStatusResult<Vec<AlarmStatus>> {
        let start = Instant::now();

        let alarm_names = resolve_alarm_names(&self.search_client, tags)
            .await
            .inspect_err(|e| {
                log_error!("Alarm discovery for {} tags failed: {}", tags.len(), e);
            })?;

        let statuses = fetch_alarm_statuses(&self.describe_client, &alarm_names)
            .await
            .inspect_err(|e| {
                log_error!(
                    "Describing {} discovered alarms failed: {}",
                    alarm_names.len(),
                    e
                );
            })?;

        log_info!(
            "Found {} alarm statuses for {} tags in {:?}",
            statuses.len(),
            tags.len(),
            start.elapsed()
        );

        Ok(statuses)
    }
}
