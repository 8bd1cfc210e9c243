//! Token 类型

use serde::Serialize;
use std::fmt;

/// Token 种类（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Unknown,
    EndOfLine,
    EndOfInput,
    StringLiteral,
    RuleName,
    Alternative,
    TerminalValue,
    Comment,
    Equals,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Unknown,
        TokenKind::EndOfLine,
        TokenKind::EndOfInput,
        TokenKind::StringLiteral,
        TokenKind::RuleName,
        TokenKind::Alternative,
        TokenKind::TerminalValue,
        TokenKind::Comment,
        TokenKind::Equals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::EndOfLine => "END_OF_LINE",
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::RuleName => "RULE_NAME",
            TokenKind::Alternative => "ALTERNATIVE",
            TokenKind::TerminalValue => "TERMINAL_VALUE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Equals => "EQUALS",
        }
    }

    /// 值为一段已消费字符的种类
    pub fn carries_text(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::RuleName
                | TokenKind::TerminalValue
                | TokenKind::Comment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 带分类和位置的词法单元
///
/// `line`/`column` 从 1 开始，指向词素的第一个字符，包含起始定界符
/// （`;`、`%`、`"`、`<`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.column, self.kind, self.value)
    }
}
