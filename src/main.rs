// src/main.rs

use clap::Parser;
use futures::future::join_all;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use managed_records::{AppError, CommandLineInput, PageSummary, RecordRetriever, RetrieveConfig};
use std::fs;
use std::path::Path;

const LOG_FILE_NAME: &str = "managed_records.log";
const TIMESTAMPED_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}";
const PLAIN_PATTERN: &str = "[{l}] {m}{n}";

/// HTTP stack crates that are only interesting when something breaks.
const QUIET_TARGETS: [&str; 3] = ["hyper_util", "reqwest", "rustls"];

/// Builds the logging configuration.
///
/// The root logger passes everything from `Debug` up; each appender picks its
/// own threshold. stderr shows warnings (everything with `verbose`) so stdout
/// carries only the JSON summaries, and the file keeps `Info` and above.
fn build_log_config(verbose: bool, log_file: &Path) -> Result<Config, AppError> {
    let (console_level, console_pattern) = if verbose {
        (LevelFilter::Debug, TIMESTAMPED_PATTERN)
    } else {
        (LevelFilter::Warn, PLAIN_PATTERN)
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(console_pattern)))
        .build();
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(TIMESTAMPED_PATTERN)))
        .build(log_file)?;

    let mut builder = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("stderr", Box::new(stderr)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Info)))
                .build("file", Box::new(file)),
        );
    for target in QUIET_TARGETS {
        builder = builder.logger(Logger::builder().build(target, LevelFilter::Warn));
    }

    builder
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Installs the global logger, writing the log file under the temp dir.
fn setup_logging(verbose: bool) -> Result<(), AppError> {
    let log_dir = std::env::temp_dir();
    fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join(LOG_FILE_NAME);

    let config = build_log_config(verbose, &log_file)?;
    log4rs::init_config(config).map_err(|e| AppError::Logging(e.to_string()))?;
    log::debug!("Logging to {}", log_file.display());
    Ok(())
}

/// Retrieves every requested page concurrently and prints each summary in
/// request order. Stops at the first failed page after printing the ones
/// before it.
async fn execute(config: &RetrieveConfig) -> Result<(), AppError> {
    let retriever = RecordRetriever::from_config(config)?;
    log::info!(
        "Retrieving {} page(s) from {}",
        config.requests.len(),
        config.endpoint
    );

    let results = join_all(
        config
            .requests
            .iter()
            .map(|request| retriever.retrieve(Some(request))),
    )
    .await;

    for result in results {
        print_summary(&result?, config.pretty)?;
    }

    Ok(())
}

fn print_summary(summary: &PageSummary, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };
    println!("{}", rendered);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = RetrieveConfig::resolve(cli)?;

    if let Err(e) = execute(&config).await {
        log::error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builds_for_both_modes() {
        let log_file = std::env::temp_dir().join("managed_records_config_test.log");
        for verbose in [false, true] {
            let config = build_log_config(verbose, &log_file).unwrap();
            assert_eq!(config.root().level(), LevelFilter::Debug);
            assert_eq!(config.appenders().len(), 2);
            assert!(config
                .loggers()
                .iter()
                .all(|logger| logger.level() == LevelFilter::Warn));
        }
        let _ = fs::remove_file(&log_file);
    }
}
