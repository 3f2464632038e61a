//! Composite and metric alarms folded into one status record

use super::types::{AlarmKind, AlarmState, AlarmStatus, RawAlarm};

/// Convert a described alarm into its status record.
///
/// Missing fields become empty strings and a missing transition time
/// becomes 0. The type tag comes from the variant, not from the record.
pub fn normalize(alarm: RawAlarm) -> AlarmStatus {
    let kind = alarm.kind();
    status_from_state(alarm.into_state(), kind)
}

fn status_from_state(state: AlarmState, kind: AlarmKind) -> AlarmStatus {
    AlarmStatus {
        arn: state.alarm_arn.unwrap_or_default(),
        name: state.alarm_name.unwrap_or_default(),
        reason: state.state_reason.unwrap_or_default(),
        status: state.state_value.unwrap_or_default(),
        alarm_type: kind,
        updated_times: state
            .state_updated_timestamp
            .map(|t| t.timestamp())
            .unwrap_or(0),
    }
}

impl From<RawAlarm> for AlarmStatus {
    fn from(alarm: RawAlarm) -> Self {
        normalize(alarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::data_plane::cloudwatch_alarms::types::{CompositeAlarm, MetricAlarm};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn state(name: &str, value: &str) -> AlarmState {
        AlarmState {
            alarm_arn: Some(format!("arn:aws:cloudwatch:us-west-2:1234567890:alarm:{name}")),
            alarm_name: Some(name.to_string()),
            state_value: Some(value.to_string()),
            state_reason: Some("Threshold Crossed: 1 datapoint [2.0] was greater than 1.0".to_string()),
            state_updated_timestamp: Some(Utc.with_ymd_and_hms(2020, 3, 13, 19, 50, 30).unwrap()),
        }
    }

    #[test]
    fn test_metric_alarm_status() {
        let status = normalize(RawAlarm::Metric(MetricAlarm {
            state: state("mockAlarmName", "ALARM"),
            namespace: Some("AWS/ECS".to_string()),
            metric_name: Some("CPUUtilization".to_string()),
        }));

        assert_eq!(
            status,
            AlarmStatus {
                arn: "arn:aws:cloudwatch:us-west-2:1234567890:alarm:mockAlarmName".to_string(),
                name: "mockAlarmName".to_string(),
                reason: "Threshold Crossed: 1 datapoint [2.0] was greater than 1.0".to_string(),
                status: "ALARM".to_string(),
                alarm_type: AlarmKind::Metric,
                updated_times: 1584129030,
            }
        );
    }

    #[test]
    fn test_composite_alarm_uses_composite_type() {
        let status: AlarmStatus = RawAlarm::Composite(CompositeAlarm {
            state: state("service-health", "OK"),
            alarm_rule: Some("ALARM(cpu) OR ALARM(mem)".to_string()),
        })
        .into();

        assert_eq!(status.alarm_type, AlarmKind::Composite);
        assert_eq!(status.name, "service-health");
        assert_eq!(status.status, "OK");
    }

    #[test]
    fn test_missing_fields_become_empty_values() {
        let status = normalize(RawAlarm::Metric(MetricAlarm::default()));

        assert_eq!(status.arn, "");
        assert_eq!(status.name, "");
        assert_eq!(status.reason, "");
        assert_eq!(status.status, "");
        assert_eq!(status.updated_times, 0);
        assert_eq!(status.alarm_type, AlarmKind::Metric);
    }
}
