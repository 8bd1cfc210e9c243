//! ABNF Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all abnf-lex crates,
//! and describes the content of an `abnf.json` project file.

use serde::Deserialize;

/// 日志级别（项目文件与命令行共用同一套解析）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// 解析级别名，不区分大小写；`silent` 表示只输出错误
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        LogLevel::parse(&value).ok_or_else(|| {
            format!(
                "unknown log level '{}', expected silent, error, warn, info, debug or trace",
                value
            )
        })
    }
}

/// 词法分析器配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// 记录软诊断（未识别字符、未闭合的字符串和规则名）
    pub collect_diagnostics: bool,
    /// 以 debug 级别记录每个产出的 token
    pub trace_tokens: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            collect_diagnostics: true,
            trace_tokens: false,
        }
    }
}

/// CLI 输出 token 流的格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// 每行一个 token：`line:column KIND "value"`
    #[default]
    Text,
    /// JSON 数组
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OutputFormat::parse(&value)
            .ok_or_else(|| format!("unknown format '{}', expected text or json", value))
    }
}

/// 输出选项
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// 先打印带行号的源码
    pub show_source: bool,
    /// 报告词法分析耗时
    pub show_timing: bool,
}

/// 项目文件（`abnf.json`）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// 语法文件，相对于项目文件所在目录
    pub entry: Option<String>,
    pub log_level: Option<LogLevel>,
    /// 日志额外追加到该文件，相对于项目文件所在目录
    pub log_file: Option<String>,
    pub lexer: LexerConfig,
    pub output: OutputConfig,
    /// 出现任何诊断即视为失败
    pub strict: bool,
}
