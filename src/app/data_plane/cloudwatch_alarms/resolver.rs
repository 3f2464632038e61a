//! Tag-based alarm discovery through Resource Groups

#![warn(clippy::all, rust_2018_idioms)]

use std::collections::HashMap;

use super::arn::alarm_name_from_arn;
use super::client::ResourceSearchClient;
use super::error::{AlarmStatusError, AlarmStatusResult};
use super::query::{SearchQuery, CLOUDWATCH_ALARM_RESOURCE_TYPE};

/// Find the names of every CloudWatch alarm carrying all of `tags`.
///
/// Pages through `SearchResources` until no continuation token is returned.
/// An identifier that is not an alarm ARN aborts the whole lookup.
pub async fn resolve_alarm_names<S>(
    client: &S,
    tags: &HashMap<String, String>,
) -> AlarmStatusResult<Vec<String>>
where
    S: ResourceSearchClient + ?Sized,
{
    let query = SearchQuery::for_alarms_with_tags(tags).encode()?;
    trace_debug!("Searching alarm resources with query {}", query);

    let mut alarm_names = Vec::new();
    let mut next_token: Option<String> = None;
    let mut page_count = 0usize;

    loop {
        let page = client
            .search(&query, next_token.take())
            .await
            .map_err(AlarmStatusError::Search)?;
        page_count += 1;

        trace_debug!(
            "Search page {} returned {} identifiers (more: {})",
            page_count,
            page.resource_identifiers.len(),
            page.next_token.is_some()
        );

        for identifier in page.resource_identifiers {
            if let Some(resource_type) = identifier.resource_type.as_deref() {
                if resource_type != CLOUDWATCH_ALARM_RESOURCE_TYPE {
                    log_warn!(
                        "Search returned unexpected resource type {} for {:?}",
                        resource_type,
                        identifier.resource_arn
                    );
                }
            }

            let arn = identifier.resource_arn.unwrap_or_default();
            let name = alarm_name_from_arn(&arn)?;
            trace_trace!("Resolved alarm {} from {}", name, arn);
            alarm_names.push(name);
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    log_debug!(
        "Resolved {} alarm names across {} search pages",
        alarm_names.len(),
        page_count
    );

    Ok(alarm_names)
}
