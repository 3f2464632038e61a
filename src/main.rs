#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{bail, Context, Result};
use std::collections::HashMap;

use alarmstatus::app::config::AlarmStatusConfig;
use alarmstatus::app::data_plane::cloudwatch_alarms::CloudWatchAlarms;
use alarmstatus::app::logging::init_logging;

fn setup_panic_handler() {
    // Installed first so panics before logging is up are still reported
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "alarmstatus crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        tracing::error!("{}", crash_msg);
        eprintln!("\n{}", crash_msg);
    }));
}

/// Parse `KEY=VALUE` arguments into a tag map
fn parse_tags(args: &[String]) -> Result<HashMap<String, String>> {
    let mut tags = HashMap::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                tags.insert(key.to_string(), value.to_string());
            }
            _ => bail!("Invalid tag {:?}, expected KEY=VALUE", arg),
        }
    }
    Ok(tags)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_handler();

    let config = AlarmStatusConfig::load().context("Failed to load configuration")?;

    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("Logging disabled: {:#}", e);
    }
    tracing::info!(
        "alarmstatus {} ({}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_COMMIT")
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tags = parse_tags(&args)?;

    let aws_config = config.load_sdk_config().await;
    let alarms = CloudWatchAlarms::from_conf(&aws_config);

    let statuses = alarms
        .get_alarms_with_tags(&tags)
        .await
        .context("Failed to get alarm status")?;

    println!("{}", serde_json::to_string_pretty(&statuses)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_splits_on_first_equals() {
        let args = vec![
            "copilot-environment=test".to_string(),
            "query=a=b".to_string(),
        ];

        let tags = parse_tags(&args).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags["copilot-environment"], "test");
        assert_eq!(tags["query"], "a=b");
    }

    #[test]
    fn test_parse_tags_rejects_missing_key() {
        assert!(parse_tags(&["=value".to_string()]).is_err());
        assert!(parse_tags(&["no-separator".to_string()]).is_err());
    }
}
