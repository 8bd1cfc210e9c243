//! 分词器
//!
//! 拉取式：每次调用 [`Tokenizer::next_token`] 先让扫描器前进一步，跳过行内空白，
//! 再按落点字符分类。到达输入结束后每次调用都会再产出一个 `END_OF_INPUT`，
//! 何时停止由调用方决定。
//!
//! # 示例
//!
//! ```
//! use abnf_core::{TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.set_input("CRLF = CR LF");
//! let kinds: Vec<_> = tokenizer.tokens().map(|t| t.kind).collect();
//! assert_eq!(kinds.first(), Some(&TokenKind::RuleName));
//! assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
//! ```

use crate::error::{DiagnosticKind, LexDiagnostic};
use crate::scanner::{CharValue, ScannedChar, Scanner};
use crate::token::{Token, TokenKind};
use abnf_config::LexerConfig;
use abnf_log::{debug, trace, warn, Logger};
use std::iter::FusedIterator;
use std::sync::Arc;

/// Token 起始字符的类别
///
/// 变体按分派优先级排列，[`LeadClass::of`] 以相同顺序判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadClass {
    EndOfLine,
    /// `;`
    Comment,
    /// `%`
    TerminalValue,
    /// `"`
    StringLiteral,
    /// ASCII 字母
    BareRuleName,
    /// `<`
    AngleRuleName,
    /// `/`
    Alternative,
    /// `=`
    Equals,
    EndOfInput,
    Unknown,
}

impl LeadClass {
    pub fn of(value: CharValue) -> Self {
        match value {
            CharValue::EndOfLine => LeadClass::EndOfLine,
            CharValue::Char(';') => LeadClass::Comment,
            CharValue::Char('%') => LeadClass::TerminalValue,
            CharValue::Char('"') => LeadClass::StringLiteral,
            CharValue::Char(c) if is_alpha(c) => LeadClass::BareRuleName,
            CharValue::Char('<') => LeadClass::AngleRuleName,
            CharValue::Char('/') => LeadClass::Alternative,
            CharValue::Char('=') => LeadClass::Equals,
            CharValue::EndOfInput => LeadClass::EndOfInput,
            CharValue::Char(_) => LeadClass::Unknown,
        }
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 终结值主体，如 `x0A` 或 `d13.10`
fn is_terminal_body(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// 把扫描器的字符流分类为 [`Token`]
pub struct Tokenizer {
    scanner: Scanner,
    config: LexerConfig,
    diagnostics: Vec<LexDiagnostic>,
    logger: Arc<Logger>,
}

impl Tokenizer {
    /// 默认配置，空日志器
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self::with_config(LexerConfig::default(), logger)
    }

    pub fn with_config(config: LexerConfig, logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating new Tokenizer: {:?}", config);
        Self {
            scanner: Scanner::with_logger(logger.clone()),
            config,
            diagnostics: Vec::new(),
            logger,
        }
    }

    /// 载入新文本，重置游标并清空之前的诊断
    pub fn set_input(&mut self, input: &str) {
        self.scanner.set_input(input);
        self.diagnostics.clear();
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<LexDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// 产出下一个 token
    pub fn next_token(&mut self) -> Token {
        trace!(self.logger, "Requesting next token");

        self.scanner.next();
        self.skip_whitespace();
        let start = self.current();

        let token = match LeadClass::of(start.value) {
            LeadClass::EndOfLine => self.token_at(TokenKind::EndOfLine, "", start),
            LeadClass::Comment => {
                let value = self.consume_until(|v| v.is_end_of_line(), true);
                self.rescan_current();
                self.token_at(TokenKind::Comment, value, start)
            }
            LeadClass::TerminalValue => {
                let value = self.consume_while(is_terminal_body, true);
                self.rescan_current();
                self.token_at(TokenKind::TerminalValue, value, start)
            }
            LeadClass::StringLiteral => {
                let value = self.consume_delimited('"', DiagnosticKind::UnterminatedString, start);
                self.token_at(TokenKind::StringLiteral, value, start)
            }
            LeadClass::BareRuleName => {
                let value = self.consume_while(is_alpha, false);
                self.rescan_current();
                self.token_at(TokenKind::RuleName, value, start)
            }
            LeadClass::AngleRuleName => {
                let value =
                    self.consume_delimited('>', DiagnosticKind::UnterminatedRuleName, start);
                self.token_at(TokenKind::RuleName, value, start)
            }
            LeadClass::Alternative => self.token_at(TokenKind::Alternative, "/", start),
            LeadClass::Equals => self.token_at(TokenKind::Equals, "=", start),
            LeadClass::EndOfInput => self.token_at(TokenKind::EndOfInput, "", start),
            LeadClass::Unknown => {
                if let Some(c) = start.value.as_char() {
                    warn!(
                        self.logger,
                        "Unrecognized character {:?} at {}:{}", c, start.line, start.column
                    );
                    self.report(DiagnosticKind::UnrecognizedCharacter(c), start);
                }
                self.token_at(TokenKind::Unknown, "", start)
            }
        };

        if self.config.trace_tokens {
            debug!(
                self.logger,
                "Produced token: kind={}, value={:?}, line={}, column={}",
                token.kind,
                token.value,
                token.line,
                token.column
            );
        }
        token
    }

    /// 迭代到第一个 `END_OF_INPUT`（包含）
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// 可选先前进一步，然后在 `accept` 成立时收集字符。
    /// 遇到第一个不接受的字符时停止且不消费它，哨兵永远不被接受。
    fn consume_while(&mut self, accept: impl Fn(char) -> bool, advance_first: bool) -> String {
        if advance_first {
            self.scanner.next();
        }

        let mut buffer = String::new();
        while let Some(c) = self.current().value.as_char().filter(|&c| accept(c)) {
            buffer.push(c);
            self.scanner.next();
        }
        buffer
    }

    /// 可选先前进一步，然后收集字符直到 `stop` 成立。
    /// 输入结束总会停止，停止字符不计入结果。
    fn consume_until(&mut self, stop: impl Fn(CharValue) -> bool, advance_first: bool) -> String {
        if advance_first {
            self.scanner.next();
        }

        let mut buffer = String::new();
        loop {
            let value = self.current().value;
            if value.is_end_of_input() || stop(value) {
                break;
            }
            if let Some(c) = value.as_char() {
                buffer.push(c);
            }
            self.scanner.next();
        }
        buffer
    }

    /// 起始字符与 `close` 之间的文本。缺少闭合符时以行尾或输入结束为界，
    /// 并让该字符重新参与扫描。
    fn consume_delimited(
        &mut self,
        close: char,
        unterminated: DiagnosticKind,
        start: ScannedChar,
    ) -> String {
        let value = self.consume_until(|v| v.is(close) || v.is_end_of_line(), true);
        if !self.current().value.is(close) {
            self.report(unterminated, start);
            self.rescan_current();
        }
        value
    }

    fn skip_whitespace(&mut self) {
        while self.current().value.is_whitespace() {
            self.scanner.next();
        }
    }

    /// 回退一步，让结束本段的字符成为下一个 token 的起点
    fn rescan_current(&mut self) {
        if let Err(err) = self.scanner.previous() {
            warn!(self.logger, "Lookahead not re-scanned: {}", err);
        }
    }

    fn current(&self) -> ScannedChar {
        // `next_token` 总是先前进，这里只是兜底
        self.scanner.current().unwrap_or(ScannedChar {
            value: CharValue::EndOfInput,
            line: 1,
            column: 1,
        })
    }

    fn token_at(&self, kind: TokenKind, value: impl Into<String>, start: ScannedChar) -> Token {
        Token::new(kind, value, start.line, start.column)
    }

    fn report(&mut self, kind: DiagnosticKind, at: ScannedChar) {
        if self.config.collect_diagnostics {
            self.diagnostics.push(LexDiagnostic::at(kind, at.line, at.column));
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// 见 [`Tokenizer::tokens`]
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.tokenizer.next_token();
        self.done = token.is_end_of_input();
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
