//! Alarm status retrieval through CloudWatch `DescribeAlarms`

#![warn(clippy::all, rust_2018_idioms)]

use super::client::AlarmDescribeClient;
use super::error::{AlarmStatusError, AlarmStatusResult};
use super::normalize::normalize;
use super::types::{AlarmStatus, RawAlarm};

/// Describe `alarm_names` and normalize every returned alarm.
///
/// Each page contributes its composite alarms first, then its metric
/// alarms. The describe call is issued even when `alarm_names` is empty.
pub async fn fetch_alarm_statuses<D>(
    client: &D,
    alarm_names: &[String],
) -> AlarmStatusResult<Vec<AlarmStatus>>
where
    D: AlarmDescribeClient + ?Sized,
{
    let mut statuses = Vec::new();
    let mut next_token: Option<String> = None;
    let mut page_count = 0usize;

    loop {
        let page = client
            .describe(alarm_names, next_token.take())
            .await
            .map_err(AlarmStatusError::Describe)?;
        page_count += 1;

        trace_debug!(
            "Describe page {} returned {} composite and {} metric alarms (more: {})",
            page_count,
            page.composite_alarms.len(),
            page.metric_alarms.len(),
            page.next_token.is_some()
        );

        statuses.extend(
            page.composite_alarms
                .into_iter()
                .map(RawAlarm::Composite)
                .chain(page.metric_alarms.into_iter().map(RawAlarm::Metric))
                .map(normalize),
        );

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    log_debug!(
        "Fetched {} alarm statuses for {} names across {} describe pages",
        statuses.len(),
        alarm_names.len(),
        page_count
    );

    Ok(statuses)
}
