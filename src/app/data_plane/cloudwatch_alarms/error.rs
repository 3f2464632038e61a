//! Failures of the alarm status lookup
//!
//! Each variant's message already carries the underlying cause, so none of
//! them report a separate `source()`. Error reports built on top (anyhow
//! chains in the binary) then print every cause once.

use thiserror::Error;

/// Error returned by a search or describe client implementation
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a string could not be parsed as an ARN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    #[error("arn: invalid prefix")]
    InvalidPrefix,

    #[error("arn: not enough sections")]
    NotEnoughSections,
}

#[derive(Debug, Error)]
pub enum AlarmStatusError {
    #[error("construct search resource query: {0}")]
    QueryConstruction(serde_json::Error),

    #[error("search CloudWatch alarm resources: {0}")]
    Search(TransportError),

    #[error("parse alarm ARN {arn}: {reason}")]
    ArnParse { arn: String, reason: ArnError },

    #[error("cannot parse alarm ARN resource {resource}")]
    MalformedResourceIdentifier { resource: String },

    #[error("describe CloudWatch alarms: {0}")]
    Describe(TransportError),
}

pub type AlarmStatusResult<T> = Result<T, AlarmStatusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::error::Error as _;

    #[test]
    fn test_search_error_message_includes_transport_error() {
        let err = AlarmStatusError::Search("ThrottlingException: Rate exceeded".into());

        assert_eq!(
            err.to_string(),
            "search CloudWatch alarm resources: ThrottlingException: Rate exceeded"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_arn_parse_error_names_offending_string() {
        let err = AlarmStatusError::ArnParse {
            arn: "not-an-arn".to_string(),
            reason: ArnError::InvalidPrefix,
        };

        assert_eq!(err.to_string(), "parse alarm ARN not-an-arn: arn: invalid prefix");
    }

    #[test]
    fn test_error_report_prints_each_cause_once() {
        let result: Result<(), AlarmStatusError> =
            Err(AlarmStatusError::Describe("AccessDenied: not authorized".into()));

        let report = format!("{:#}", result.context("Failed to get alarm status").unwrap_err());

        assert_eq!(
            report,
            "Failed to get alarm status: describe CloudWatch alarms: AccessDenied: not authorized"
        );
    }
}
