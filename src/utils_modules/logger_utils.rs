use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = "Custom log line format: timestamp, level, source location, message"]
fn custom_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = "Function that initializes the global logger"]
/// Files rotate daily under `LOG_DIR`; warnings and errors are also echoed to stderr.
///
/// # Returns
/// * anyhow::Result<LoggerHandle> - keep alive until the end of `main`
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_level: String = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let handle: LoggerHandle = Logger::try_with_str(&log_level)
        .map_err(|e| anyhow!("[set_global_logger] invalid log spec '{}': {}", log_level, e))?
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIR.as_str())
                .basename("opensearch_curator"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] Logger initialization failed: {}", e))?;

    Ok(handle)
}
