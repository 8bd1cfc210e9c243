//! abnf-log - 结构化日志系统
//!
//! 为 ABNF 词法分析器各 crate 提供日志：
//! - **显式传递**：没有全局日志器，组件接收 `Arc<Logger>`
//! - **环形缓冲**：保留最近 N 条记录，满时丢弃最旧的
//! - **惰性格式化**：宏先检查级别再构造消息
//!
//! # 快速开始
//!
//! ```
//! use abnf_log::{LogConfig, debug};
//!
//! let (logger, ring) = LogConfig::test().with_ring_buffer(16).init();
//! debug!(logger, "tokenizer ready");
//! assert!(ring.is_some());
//! ```
//!
//! 在测试中捕获日志：
//!
//! ```
//! use abnf_log::{Logger, Level, LogRingBuffer, info};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! info!(logger, "loaded {} bytes", 42);
//! assert_eq!(ring.len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, SpanGuard, StderrSink};
pub use record::{Level, Record};
pub use ring_buffer::LogRingBuffer;

/// 日志操作的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

/// 日志错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 打开日志文件失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
