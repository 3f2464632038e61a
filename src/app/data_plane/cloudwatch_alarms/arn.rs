//! ARN parsing and alarm name extraction

use super::error::{AlarmStatusError, AlarmStatusResult, ArnError};

const ARN_PREFIX: &str = "arn:";
const ARN_SECTIONS: usize = 6;

/// Sections of a parsed ARN, borrowed from the input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn<'a> {
    pub partition: &'a str,
    pub service: &'a str,
    pub region: &'a str,
    pub account_id: &'a str,
    /// Everything after the account section; may itself contain `:`
    pub resource: &'a str,
}

impl<'a> Arn<'a> {
    pub fn parse(arn: &'a str) -> Result<Self, ArnError> {
        if !arn.starts_with(ARN_PREFIX) {
            return Err(ArnError::InvalidPrefix);
        }

        let sections: Vec<&str> = arn.splitn(ARN_SECTIONS, ':').collect();
        if sections.len() != ARN_SECTIONS {
            return Err(ArnError::NotEnoughSections);
        }

        Ok(Self {
            partition: sections[1],
            service: sections[2],
            region: sections[3],
            account_id: sections[4],
            resource: sections[5],
        })
    }
}

/// Get the alarm name from an alarm ARN.
///
/// `arn:aws:cloudwatch:us-west-2:1234567890:alarm:SDc-ReadCapacityUnitsLimit-BasicAlarm`
/// yields `SDc-ReadCapacityUnitsLimit-BasicAlarm`.
pub fn alarm_name_from_arn(alarm_arn: &str) -> AlarmStatusResult<String> {
    let parsed = Arn::parse(alarm_arn).map_err(|reason| AlarmStatusError::ArnParse {
        arn: alarm_arn.to_string(),
        reason,
    })?;

    let segments: Vec<&str> = parsed.resource.split(':').collect();
    match segments.as_slice() {
        [_, name] => Ok((*name).to_string()),
        _ => Err(AlarmStatusError::MalformedResourceIdentifier {
            resource: parsed.resource.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_all_sections() {
        let arn = Arn::parse("arn:aws:cloudwatch:us-west-2:1234567890:alarm:MyAlarm").unwrap();

        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.service, "cloudwatch");
        assert_eq!(arn.region, "us-west-2");
        assert_eq!(arn.account_id, "1234567890");
        assert_eq!(arn.resource, "alarm:MyAlarm");
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert_eq!(
            Arn::parse("aws:cloudwatch:us-west-2:1234567890:alarm:MyAlarm"),
            Err(ArnError::InvalidPrefix)
        );
        assert_eq!(Arn::parse(""), Err(ArnError::InvalidPrefix));
    }

    #[test]
    fn test_parse_rejects_short_arn() {
        assert_eq!(
            Arn::parse("arn:aws:cloudwatch:us-west-2"),
            Err(ArnError::NotEnoughSections)
        );
    }

    #[test]
    fn test_alarm_name_from_arn() {
        let name = alarm_name_from_arn(
            "arn:aws:cloudwatch:us-west-2:1234567890:alarm:SDc-ReadCapacityUnitsLimit-BasicAlarm",
        )
        .unwrap();

        assert_eq!(name, "SDc-ReadCapacityUnitsLimit-BasicAlarm");
    }

    #[test]
    fn test_alarm_name_keeps_china_partition() {
        let name =
            alarm_name_from_arn("arn:aws-cn:cloudwatch:cn-north-1:1234567890:alarm:cpu-high").unwrap();

        assert_eq!(name, "cpu-high");
    }

    #[test]
    fn test_resource_without_name_is_malformed() {
        let err = alarm_name_from_arn("arn:aws:cloudwatch:us-west-2:1234567890:alarm").unwrap_err();

        match err {
            AlarmStatusError::MalformedResourceIdentifier { resource } => {
                assert_eq!(resource, "alarm")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resource_with_extra_segment_is_malformed() {
        let err = alarm_name_from_arn("arn:aws:cloudwatch:us-west-2:1234567890:a:b:c").unwrap_err();

        assert_eq!(err.to_string(), "cannot parse alarm ARN resource a:b:c");
    }

    #[test]
    fn test_invalid_arn_reports_offending_string() {
        let err = alarm_name_from_arn("alarm:MyAlarm").unwrap_err();

        assert!(matches!(
            err,
            AlarmStatusError::ArnParse { ref arn, reason: ArnError::InvalidPrefix } if arn == "alarm:MyAlarm"
        ));
    }
}
