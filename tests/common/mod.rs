//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use abnf_workspace::{Token, TokenKind, Tokenizer};

/// 端到端测试共用的语法
pub const SAMPLE_GRAMMAR: &str = "
LF = %x0A ;Hello World
CR = %x0D
DECIMAL = %d13.10
CRLF = CR LF
command = \"command string\"
<rule> = <CRLF> / DECIMAL
";

/// 词法分析到 END_OF_INPUT（包含）
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_input(source);
    tokenizer.tokens().collect()
}

/// 只保留种类
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// `(kind, value)` 对
pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

/// `(kind, line, column)` 三元组
pub fn positions(tokens: &[Token]) -> Vec<(TokenKind, usize, usize)> {
    tokens.iter().map(|t| (t.kind, t.line, t.column)).collect()
}

/// 每个测试独立的临时目录，drop 时删除
pub struct TempDir {
    pub path: std::path::PathBuf,
}

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("abnf-it-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn write(&self, file: &str, content: &str) -> std::path::PathBuf {
        let path = self.path.join(file);
        std::fs::write(&path, content).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.path).ok();
    }
}
