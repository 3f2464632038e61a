//! Search and describe client traits, with AWS SDK implementations
//!
//! The lookup only talks to AWS through [`ResourceSearchClient`] and
//! [`AlarmDescribeClient`], so tests can swap in in-memory fakes.

#![warn(clippy::all, rust_2018_idioms)]

use async_trait::async_trait;
use aws_sdk_cloudwatch as cloudwatch;
use aws_sdk_resourcegroups as resourcegroups;
use aws_smithy_types::error::display::DisplayErrorContext;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::error::TransportError;
use super::query::RESOURCE_QUERY_TYPE;
use super::types::{
    AlarmState, CompositeAlarm, DescribePage, MetricAlarm, ResourceIdentifier, SearchPage,
};

/// Resource Groups `SearchResources`
#[async_trait]
pub trait ResourceSearchClient: Send + Sync {
    /// Fetch one page of resources matching an encoded tag query
    async fn search(
        &self,
        query: &str,
        next_token: Option<String>,
    ) -> Result<SearchPage, TransportError>;
}

/// CloudWatch `DescribeAlarms`
#[async_trait]
pub trait AlarmDescribeClient: Send + Sync {
    /// Fetch one page of composite and metric alarms by name
    async fn describe(
        &self,
        alarm_names: &[String],
        next_token: Option<String>,
    ) -> Result<DescribePage, TransportError>;
}

#[async_trait]
impl<T: ResourceSearchClient + ?Sized> ResourceSearchClient for Arc<T> {
    async fn search(
        &self,
        query: &str,
        next_token: Option<String>,
    ) -> Result<SearchPage, TransportError> {
        (**self).search(query, next_token).await
    }
}

#[async_trait]
impl<T: AlarmDescribeClient + ?Sized> AlarmDescribeClient for Arc<T> {
    async fn describe(
        &self,
        alarm_names: &[String],
        next_token: Option<String>,
    ) -> Result<DescribePage, TransportError> {
        (**self).describe(alarm_names, next_token).await
    }
}

#[async_trait]
impl ResourceSearchClient for resourcegroups::Client {
    async fn search(
        &self,
        query: &str,
        next_token: Option<String>,
    ) -> Result<SearchPage, TransportError> {
        let resource_query = resourcegroups::types::ResourceQuery::builder()
            .r#type(resourcegroups::types::QueryType::from(RESOURCE_QUERY_TYPE))
            .query(query)
            .build()
            .map_err(transport_error)?;

        let response = self
            .search_resources()
            .resource_query(resource_query)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(transport_error)?;

        let resource_identifiers = response
            .resource_identifiers()
            .iter()
            .map(|identifier| ResourceIdentifier {
                resource_arn: identifier.resource_arn().map(str::to_string),
                resource_type: identifier.resource_type().map(str::to_string),
            })
            .collect();

        Ok(SearchPage {
            resource_identifiers,
            next_token: response.next_token().map(str::to_string),
        })
    }
}

#[async_trait]
impl AlarmDescribeClient for cloudwatch::Client {
    async fn describe(
        &self,
        alarm_names: &[String],
        next_token: Option<String>,
    ) -> Result<DescribePage, TransportError> {
        // Without explicit alarm types CloudWatch only returns metric alarms
        let response = self
            .describe_alarms()
            .set_alarm_names(Some(alarm_names.to_vec()))
            .alarm_types(cloudwatch::types::AlarmType::CompositeAlarm)
            .alarm_types(cloudwatch::types::AlarmType::MetricAlarm)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(transport_error)?;

        let composite_alarms = response
            .composite_alarms()
            .iter()
            .map(|alarm| CompositeAlarm {
                state: AlarmState {
                    alarm_arn: alarm.alarm_arn().map(str::to_string),
                    alarm_name: alarm.alarm_name().map(str::to_string),
                    state_value: alarm.state_value().map(|v| v.as_str().to_string()),
                    state_reason: alarm.state_reason().map(str::to_string),
                    state_updated_timestamp: alarm.state_updated_timestamp().and_then(to_utc),
                },
                alarm_rule: alarm.alarm_rule().map(str::to_string),
            })
            .collect();

        let metric_alarms = response
            .metric_alarms()
            .iter()
            .map(|alarm| MetricAlarm {
                state: AlarmState {
                    alarm_arn: alarm.alarm_arn().map(str::to_string),
                    alarm_name: alarm.alarm_name().map(str::to_string),
                    state_value: alarm.state_value().map(|v| v.as_str().to_string()),
                    state_reason: alarm.state_reason().map(str::to_string),
                    state_updated_timestamp: alarm.state_updated_timestamp().and_then(to_utc),
                },
                namespace: alarm.namespace().map(str::to_string),
                metric_name: alarm.metric_name().map(str::to_string),
            })
            .collect();

        Ok(DescribePage {
            composite_alarms,
            metric_alarms,
            next_token: response.next_token().map(str::to_string),
        })
    }
}

/// Flatten an SDK error and its causes into one message.
///
/// `SdkError` displays only "service error"; the AWS error code and message
/// live further down the source chain.
fn transport_error<E>(err: E) -> TransportError
where
    E: std::error::Error + Send + Sync + 'static,
{
    DisplayErrorContext(err).to_string().into()
}

fn to_utc(timestamp: &aws_smithy_types::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}
