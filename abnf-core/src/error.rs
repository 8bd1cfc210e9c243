//! 扫描器错误与分词诊断
//!
//! 分词器本身不会失败，畸形输入以数据形式报告。[`LexDiagnostic`] 记录容忍了
//! 什么问题以及位置，由调用方决定是否作为用户可见的错误。

use serde::Serialize;

/// [`Scanner::previous`](crate::Scanner::previous) 的误用
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("cannot step back: no character has been scanned yet")]
    NotStarted,
    #[error("cannot step back more than one character")]
    AlreadyRewound,
}

/// 分词器容忍的问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "char", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// 产出 `UNKNOWN` token
    UnrecognizedCharacter(char),
    /// 字符串字面量被行尾或输入结束截断
    UnterminatedString,
    /// `<rule>` 被行尾或输入结束截断
    UnterminatedRuleName,
}

/// 位于某位置（从 1 开始）的非致命词法问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("[{line}:{column}] {message}")]
pub struct LexDiagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl LexDiagnostic {
    pub fn at(kind: DiagnosticKind, line: usize, column: usize) -> Self {
        let message = Self::format_message(&kind);
        Self {
            kind,
            line,
            column,
            message,
        }
    }

    fn format_message(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnrecognizedCharacter(c) => {
                format!("Unrecognized character '{}'", c.escape_debug())
            }
            DiagnosticKind::UnterminatedString => "Unterminated string literal".to_string(),
            DiagnosticKind::UnterminatedRuleName => {
                "Unterminated rule name, expected '>'".to_string()
            }
        }
    }
}
