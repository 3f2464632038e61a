//! Resource Groups tag query construction

use serde::Serialize;
use std::collections::HashMap;

use super::error::{AlarmStatusError, AlarmStatusResult};

/// Resource query type understood by `SearchResources`
pub const RESOURCE_QUERY_TYPE: &str = "TAG_FILTERS_1_0";

/// CloudFormation-style resource type of a CloudWatch alarm
pub const CLOUDWATCH_ALARM_RESOURCE_TYPE: &str = "AWS::CloudWatch::Alarm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagFilter {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchQuery {
    pub resource_type_filters: Vec<String>,
    pub tag_filters: Vec<TagFilter>,
}

impl SearchQuery {
    /// Query matching CloudWatch alarms that carry every tag in `tags`.
    ///
    /// Filters are sorted by key so the encoded query is stable.
    pub fn for_alarms_with_tags(tags: &HashMap<String, String>) -> Self {
        let mut tag_filters: Vec<TagFilter> = tags
            .iter()
            .map(|(key, value)| TagFilter {
                key: key.clone(),
                values: vec![value.clone()],
            })
            .collect();
        tag_filters.sort_by(|a, b| a.key.cmp(&b.key));

        Self {
            resource_type_filters: vec![CLOUDWATCH_ALARM_RESOURCE_TYPE.to_string()],
            tag_filters,
        }
    }

    /// JSON form passed as the `Query` of a `TAG_FILTERS_1_0` resource query
    pub fn encode(&self) -> AlarmStatusResult<String> {
        serde_json::to_string(self).map_err(AlarmStatusError::QueryConstruction)
    }
}
