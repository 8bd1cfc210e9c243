//! 一次调用完成日志器配置

use crate::{warn, FileSink, Level, LogRingBuffer, Logger, StderrSink};
use std::path::PathBuf;
use std::sync::Arc;

/// 日志输出目标
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    Stderr,
    /// 追加写入文件；打不开时跳过并记录一条警告
    File(PathBuf),
    /// 内存捕获，参数为容量
    RingBuffer(usize),
}

/// 日志配置
///
/// ```
/// use abnf_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(1000)
///     .init();
/// assert_eq!(logger.level(), Level::Debug);
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 尚无输出目标
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// 静默（只有 Error 级别，无输出）
    pub fn test() -> Self {
        LogConfig::new(Level::Error)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 构建日志器。返回最后一个配置的环形缓冲区，供之后读取。
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;
        let mut failed_files = Vec::new();

        for output in self.outputs {
            match output {
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                OutputConfig::File(path) => match FileSink::new(&path) {
                    Ok(sink) => logger.add_sink(sink),
                    Err(err) => failed_files.push((path, err)),
                },
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        // 其余输出已就绪，失败的文件可以报告出去
        for (path, err) in failed_files {
            warn!(logger, "Cannot open log file '{}': {}", path.display(), err);
        }

        (logger, ring_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_test_preset_is_silent() {
        let config = LogConfig::test();
        assert_eq!(config.level, Level::Error);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_with_stderr_is_idempotent() {
        let config = LogConfig::test().with_stderr().with_stderr();
        assert_eq!(config.outputs, vec![OutputConfig::Stderr]);
    }

    #[test]
    fn test_init_returns_ring_buffer() {
        let (logger, ring) = LogConfig::new(Level::Info).with_ring_buffer(8).init();
        info!(logger, "captured");

        let ring = ring.unwrap();
        assert_eq!(ring.capacity(), 8);
        assert_eq!(ring.dump_records()[0].message, "captured");
    }

    #[test]
    fn test_init_without_ring_buffer() {
        let (logger, ring) = LogConfig::test().with_level(Level::Warn).init();
        assert!(ring.is_none());
        assert_eq!(logger.level(), Level::Warn);
    }

    #[test]
    fn test_unopenable_file_is_reported() {
        let bad = std::env::temp_dir()
            .join("abnf_log_missing_dir")
            .join("x")
            .join("log.txt");
        let (logger, ring) = LogConfig::new(Level::Info)
            .with_file(bad)
            .with_ring_buffer(4)
            .init();
        info!(logger, "still logged");

        let records = ring.unwrap().dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Warn);
        assert!(records[0].message.contains("Cannot open log file"));
        assert_eq!(records[1].message, "still logged");
    }

    #[test]
    fn test_file_output_receives_records() {
        let path = std::env::temp_dir().join(format!("abnf_log_config_{}.log", std::process::id()));
        let (logger, _) = LogConfig::new(Level::Debug).with_file(&path).init();
        info!(logger, "written to file");
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("written to file"));

        std::fs::remove_file(&path).ok();
    }
}
