//! CloudWatch Alarm Data Types
//!
//! Raw records handed back by the search and describe clients, and the
//! normalized [`AlarmStatus`] returned to callers.

#![warn(clippy::all, rust_2018_idioms)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which CloudWatch alarm family a status record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmKind {
    Composite,
    Metric,
}

impl AlarmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmKind::Composite => "Composite",
            AlarmKind::Metric => "Metric",
        }
    }
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized status of a single alarm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmStatus {
    pub arn: String,
    pub name: String,
    /// State reason text, passed through verbatim
    pub reason: String,
    /// State value (`OK`, `ALARM`, `INSUFFICIENT_DATA`), passed through verbatim
    pub status: String,
    #[serde(rename = "Type")]
    pub alarm_type: AlarmKind,
    /// Last state transition (Unix seconds, 0 when unknown)
    pub updated_times: i64,
}

impl AlarmStatus {
    /// Last state transition as a UTC timestamp
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.updated_times, 0)
    }
}

/// State fields shared by composite and metric alarms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmState {
    pub alarm_arn: Option<String>,
    pub alarm_name: Option<String>,
    pub state_value: Option<String>,
    pub state_reason: Option<String>,
    pub state_updated_timestamp: Option<DateTime<Utc>>,
}

/// A composite alarm as described by CloudWatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeAlarm {
    pub state: AlarmState,
    /// Rule expression over child alarms
    pub alarm_rule: Option<String>,
}

/// A metric alarm as described by CloudWatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricAlarm {
    pub state: AlarmState,
    pub namespace: Option<String>,
    pub metric_name: Option<String>,
}

/// An alarm record of either family, prior to normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAlarm {
    Composite(CompositeAlarm),
    Metric(MetricAlarm),
}

impl RawAlarm {
    pub fn kind(&self) -> AlarmKind {
        match self {
            RawAlarm::Composite(_) => AlarmKind::Composite,
            RawAlarm::Metric(_) => AlarmKind::Metric,
        }
    }

    /// Drop the kind specific fields, keeping the shared state
    pub fn into_state(self) -> AlarmState {
        match self {
            RawAlarm::Composite(alarm) => alarm.state,
            RawAlarm::Metric(alarm) => alarm.state,
        }
    }
}

impl From<CompositeAlarm> for RawAlarm {
    fn from(alarm: CompositeAlarm) -> Self {
        RawAlarm::Composite(alarm)
    }
}

impl From<MetricAlarm> for RawAlarm {
    fn from(alarm: MetricAlarm) -> Self {
        RawAlarm::Metric(alarm)
    }
}

/// A resource returned by the tag search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceIdentifier {
    pub resource_arn: Option<String>,
    pub resource_type: Option<String>,
}

impl ResourceIdentifier {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: Some(resource_arn.into()),
            resource_type: None,
        }
    }
}

/// One page of `SearchResources` results
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub resource_identifiers: Vec<ResourceIdentifier>,
    pub next_token: Option<String>,
}

/// One page of `DescribeAlarms` results
#[derive(Debug, Clone, Default)]
pub struct DescribePage {
    pub composite_alarms: Vec<CompositeAlarm>,
    pub metric_alarms: Vec<MetricAlarm>,
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_status_serializes_with_pascal_case_fields() {
        let status = AlarmStatus {
            arn: "arn:aws:cloudwatch:us-west-2:1234567890:alarm:MyAlarm".to_string(),
            name: "MyAlarm".to_string(),
            reason: "threshold not breached".to_string(),
            status: "OK".to_string(),
            alarm_type: AlarmKind::Metric,
            updated_times: 1_700_000_000,
        };

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["Arn"], "arn:aws:cloudwatch:us-west-2:1234567890:alarm:MyAlarm");
        assert_eq!(json["Name"], "MyAlarm");
        assert_eq!(json["Reason"], "threshold not breached");
        assert_eq!(json["Status"], "OK");
        assert_eq!(json["Type"], "Metric");
        assert_eq!(json["UpdatedTimes"], 1_700_000_000);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_raw_alarm_kind_follows_variant() {
        let composite: RawAlarm = CompositeAlarm::default().into();
        let metric: RawAlarm = MetricAlarm::default().into();

        assert_eq!(composite.kind(), AlarmKind::Composite);
        assert_eq!(metric.kind(), AlarmKind::Metric);
        assert_eq!(AlarmKind::Composite.to_string(), "Composite");
    }

    #[test]
    fn test_into_state_drops_kind_specific_fields() {
        let state = AlarmState {
            alarm_name: Some("service-health".to_string()),
            ..AlarmState::default()
        };
        let alarm = RawAlarm::Composite(CompositeAlarm {
            state: state.clone(),
            alarm_rule: Some("ALARM(cpu)".to_string()),
        });

        assert_eq!(alarm.into_state(), state);
    }

    #[test]
    fn test_updated_at_round_trips_epoch_seconds() {
        let status = AlarmStatus {
            arn: String::new(),
            name: String::new(),
            reason: String::new(),
            status: String::new(),
            alarm_type: AlarmKind::Composite,
            updated_times: 86_400,
        };

        let updated = status.updated_at().unwrap();
        assert_eq!(updated.to_rfc3339(), "1970-01-02T00:00:00+00:00");
    }
}
