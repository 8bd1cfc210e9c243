//! 字符扫描器
//!
//! 把语法源码转换为带位置的逻辑字符，每次 [`Scanner::next`] 产出一个。
//! 换行符（`\n`、`\r\n`、单独的 `\r`）在这里统一折叠成
//! [`CharValue::EndOfLine`] 哨兵，调用方不再比较原始换行字符。

use crate::error::ScanError;
use abnf_log::{trace, Logger};
use std::sync::Arc;

/// 逻辑字符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharValue {
    Char(char),
    EndOfLine,
    EndOfInput,
}

impl CharValue {
    pub fn as_char(&self) -> Option<char> {
        match self {
            CharValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_end_of_line(&self) -> bool {
        matches!(self, CharValue::EndOfLine)
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, CharValue::EndOfInput)
    }

    /// 行内空白；换行哨兵不算空白
    pub fn is_whitespace(&self) -> bool {
        matches!(self, CharValue::Char(c) if c.is_whitespace())
    }

    /// 是否为给定的原始字符
    pub fn is(&self, expected: char) -> bool {
        *self == CharValue::Char(expected)
    }
}

/// 字符及其产出时的位置（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedChar {
    pub value: CharValue,
    pub line: usize,
    pub column: usize,
}

/// 每次前进前保存的游标状态，由 [`Scanner::previous`] 恢复
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    offset: usize,
    line: usize,
    column: usize,
    current: Option<ScannedChar>,
}

/// 跟踪位置的源码游标
pub struct Scanner {
    chars: Vec<char>,
    offset: usize,
    /// 行号（从 0 开始）
    line: usize,
    /// 当前行已消费的字符数
    column: usize,
    current: Option<ScannedChar>,
    snapshot: Option<Snapshot>,
    /// `previous` 置位，`next` 清除
    rewound: bool,
    logger: Arc<Logger>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            chars: Vec::new(),
            offset: 0,
            line: 0,
            column: 0,
            current: None,
            snapshot: None,
            rewound: false,
            logger,
        }
    }

    /// 替换输入并把游标重置到开头
    pub fn set_input(&mut self, input: &str) {
        self.chars = input.chars().collect();
        self.offset = 0;
        self.line = 0;
        self.column = 0;
        self.current = None;
        self.snapshot = None;
        self.rewound = false;
        trace!(self.logger, "Scanner input set: {} chars", self.chars.len());
    }

    pub fn is_ready(&self) -> bool {
        !self.chars.is_empty()
    }

    /// 首次 `next` 之前，以及产出输入结束之后为 true
    pub fn is_at_end(&self) -> bool {
        self.current.map_or(true, |c| c.value.is_end_of_input())
    }

    pub fn current(&self) -> Option<ScannedChar> {
        self.current
    }

    /// 前进一个逻辑字符并设为当前字符
    ///
    /// 到达末尾后继续调用会在同一位置重复返回输入结束哨兵。
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ScannedChar {
        self.snapshot = Some(Snapshot {
            offset: self.offset,
            line: self.line,
            column: self.column,
            current: self.current,
        });
        self.rewound = false;

        let scanned = match self.chars.get(self.offset).copied() {
            None => self.make(CharValue::EndOfInput),
            Some(c @ ('\n' | '\r')) => {
                let width = if c == '\r' && self.chars.get(self.offset + 1) == Some(&'\n') {
                    2
                } else {
                    1
                };
                let scanned = self.make(CharValue::EndOfLine);
                self.offset += width;
                self.line += 1;
                self.column = 0;
                scanned
            }
            Some(c) => {
                let scanned = self.make(CharValue::Char(c));
                self.offset += 1;
                self.column += 1;
                scanned
            }
        };

        self.current = Some(scanned);
        scanned
    }

    /// 撤销上一次 [`next`](Self::next)，恢复偏移、行、列和之前的当前字符。
    /// 可以跨越行边界，但只能回退一步。
    pub fn previous(&mut self) -> Result<(), ScanError> {
        if self.rewound {
            return Err(ScanError::AlreadyRewound);
        }
        let snapshot = self.snapshot.ok_or(ScanError::NotStarted)?;

        self.offset = snapshot.offset;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.current = snapshot.current;
        self.rewound = true;
        trace!(
            self.logger,
            "Scanner rewound to {}:{}",
            self.line + 1,
            self.column + 1
        );
        Ok(())
    }

    fn make(&self, value: CharValue) -> ScannedChar {
        ScannedChar {
            value,
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
