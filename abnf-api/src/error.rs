//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use abnf_core::LexDiagnostic;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// abnf-lex 错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 读取文件失败
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 项目文件解析失败
    #[error("invalid project file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 既没有命令行参数也没有 `entry` 字段
    #[error("no grammar file given and the project file has no 'entry'")]
    MissingEntry,

    /// 严格模式下出现诊断
    #[error("{} lexical problem(s), first: {}", diagnostics.len(), first_message(diagnostics))]
    Rejected { diagnostics: Vec<LexDiagnostic> },
}

fn first_message(diagnostics: &[LexDiagnostic]) -> String {
    diagnostics
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl ApiError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            ApiError::Config { source, .. } if source.line() > 0 => Some(source.line()),
            ApiError::Rejected { diagnostics } => diagnostics.first().map(|d| d.line),
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            ApiError::Config { source, .. } if source.line() > 0 => Some(source.column()),
            ApiError::Rejected { diagnostics } => diagnostics.first().map(|d| d.column),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            ApiError::Io { .. } => "io",
            ApiError::Config { .. } | ApiError::MissingEntry => "config",
            ApiError::Rejected { .. } => "lexer",
        }
    }

    /// 转换为结构化错误报告
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            message: self.to_string(),
        }
    }
}

/// 结构化错误报告
///
/// CLI 直接打印，JSON 输出模式下序列化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: io, config, lexer
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}
