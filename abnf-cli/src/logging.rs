//! CLI 日志系统初始化
//!
//! 基于 `abnf-log`，日志写到 stderr，不干扰 stdout 上的 token 输出。
//! 配置了日志文件时同时追加写入该文件。

use abnf_api::LogLevel;
use abnf_log::{LogConfig, Logger};
use std::path::Path;
use std::sync::Arc;

/// 按级别创建日志器
pub fn init_logger(level: LogLevel, log_file: Option<&Path>) -> Arc<Logger> {
    let (logger, _) = log_config(level, log_file).init();
    logger
}

fn log_config(level: LogLevel, log_file: Option<&Path>) -> LogConfig {
    let config = LogConfig::new(level.into()).with_stderr();
    match log_file {
        Some(path) => config.with_file(path),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abnf_log::{info, Level, OutputConfig};
    use std::path::PathBuf;

    #[test]
    fn test_log_config_targets_stderr() {
        let config = log_config(LogLevel::Debug, None);
        assert_eq!(config.level, Level::Debug);
        assert_eq!(config.outputs, vec![OutputConfig::Stderr]);
    }

    #[test]
    fn test_log_config_adds_file() {
        let config = log_config(LogLevel::Info, Some(Path::new("lex.log")));
        assert_eq!(
            config.outputs,
            vec![
                OutputConfig::Stderr,
                OutputConfig::File(PathBuf::from("lex.log")),
            ]
        );
    }

    #[test]
    fn test_logger_writes_log_file() {
        let path = std::env::temp_dir().join(format!("abnf-cli-log-{}.log", std::process::id()));
        std::fs::remove_file(&path).ok();

        let logger = init_logger(LogLevel::Info, Some(&path));
        info!(logger, "grammar loaded");
        drop(logger);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("grammar loaded"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_logger_level() {
        assert_eq!(init_logger(LogLevel::Error, None).level(), Level::Error);
        assert!(init_logger(LogLevel::Trace, None).is_enabled(Level::Trace));
    }
}
