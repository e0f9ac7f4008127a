use clap::Parser;
use svc_utils::config::cli::metadata_config_from_args;
use svc_utils::config::{CliConfig, Command, LogFormat};
use svc_utils::utils::error::{ErrorSeverity, SvcError};
use svc_utils::utils::{logger, validation::Validate};
use svc_utils::{add, VideoMetadataClient, VideoRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let outcome = match config.command {
        Command::Add { a, b } => add(&a, &b).map(|sum| println!("{}", sum)),
        Command::Metadata {
            url,
            config,
            endpoint,
            timeout,
            retries,
        } => {
            run_metadata(
                &url,
                config.as_deref(),
                endpoint.as_deref(),
                timeout,
                retries,
            )
            .await
        }
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run_metadata(
    url: &str,
    config_path: Option<&str>,
    endpoint: Option<&str>,
    timeout: Option<u64>,
    retries: Option<u32>,
) -> Result<(), SvcError> {
    let metadata_config = metadata_config_from_args(config_path, endpoint, timeout, retries)?;
    metadata_config.validate()?;

    let request = VideoRequest::new(url)?;
    let client = VideoMetadataClient::new(metadata_config)?;
    let metadata = client.fetch_metadata(&request).await?;

    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
