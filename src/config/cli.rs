use crate::config::metadata_config::MetadataConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "svc-utils")]
#[command(about = "Shared service utilities: checked addition and video metadata lookup")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two operands. Each is read as JSON, otherwise as a string.
    Add {
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        a: serde_json::Value,
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        b: serde_json::Value,
    },

    /// Fetch metadata for a video URL.
    Metadata {
        url: String,

        /// Path to a TOML metadata config file
        #[arg(short, long)]
        config: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        #[arg(long)]
        retries: Option<u32>,
    },
}

/// `2` and `2.5` become numbers, `"2"` stays a string, and anything that is
/// not JSON at all (like `a`) is taken as a plain string. Numbers too large
/// for an `f64` (like `1e400`) are rejected as arguments.
pub fn parse_operand(raw: &str) -> std::result::Result<serde_json::Value, String> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(e) if e.to_string().starts_with("number out of range") => {
            Err(format!("number out of range: {}", raw))
        }
        Err(_) => Ok(serde_json::Value::String(raw.to_string())),
    }
}

/// Builds the metadata config for the `metadata` subcommand: file (or
/// defaults) first, command-line overrides on top.
pub fn metadata_config_from_args(
    config: Option<&str>,
    endpoint: Option<&str>,
    timeout: Option<u64>,
    retries: Option<u32>,
) -> Result<MetadataConfig> {
    let mut metadata_config = match config {
        Some(path) => MetadataConfig::from_file(path)?,
        None => MetadataConfig::default(),
    };

    if let Some(endpoint) = endpoint {
        metadata_config.endpoint = endpoint.to_string();
    }
    if let Some(timeout) = timeout {
        metadata_config.timeout_seconds = timeout;
    }
    if let Some(retries) = retries {
        metadata_config.retry_attempts = retries;
    }

    Ok(metadata_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("2").unwrap(), json!(2));
        assert_eq!(parse_operand("-1.5").unwrap(), json!(-1.5));
        assert_eq!(parse_operand("a").unwrap(), json!("a"));
        assert_eq!(parse_operand("\"2\"").unwrap(), json!("2"));
        assert_eq!(parse_operand("null").unwrap(), json!(null));
    }

    #[test]
    fn test_out_of_range_operand_is_rejected() {
        let err = parse_operand("1e400").unwrap_err();
        assert!(err.contains("number out of range"));
        assert!(parse_operand("-1e400").is_err());
        assert!(CliConfig::try_parse_from(["svc-utils", "add", "1e400", "1"]).is_err());
    }

    #[test]
    fn test_parse_add_command() {
        let cli = CliConfig::try_parse_from(["svc-utils", "add", "2", "3"]).unwrap();
        match cli.command {
            Command::Add { a, b } => {
                assert_eq!(a, json!(2));
                assert_eq!(b, json!(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_negative_operand() {
        let cli = CliConfig::try_parse_from(["svc-utils", "add", "-4", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Add { ref a, .. } if *a == json!(-4)));
    }

    #[test]
    fn test_parse_metadata_command() {
        let cli = CliConfig::try_parse_from([
            "svc-utils",
            "--log-format",
            "json",
            "metadata",
            "https://example.com/video.mp4",
            "--retries",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Command::Metadata { url, retries, .. } => {
                assert_eq!(url, "https://example.com/video.mp4");
                assert_eq!(retries, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_metadata_overrides() {
        let config =
            metadata_config_from_args(None, Some("http://localhost:1/m"), Some(10), Some(1))
                .unwrap();
        assert_eq!(config.endpoint, "http://localhost:1/m");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.retry_attempts, 1);
        assert_eq!(config.retry_delay_ms, 1000);
    }
}
