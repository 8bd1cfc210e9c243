//! ABNF Core - grammar lexer (pure logic, no IO)
//!
//! Contains the character scanner and the tokenizer built on top of it.
//! Only operates on in-memory text, no file IO or terminal output.
//!
//! Configuration and the logger are passed explicitly, not via global state.

pub mod error;
pub mod scanner;
pub mod token;
pub mod tokenizer;

pub use error::{DiagnosticKind, LexDiagnostic, ScanError};
pub use scanner::{CharValue, ScannedChar, Scanner};
pub use token::{Token, TokenKind};
pub use tokenizer::{LeadClass, Tokenizer, Tokens};

// 从 abnf-config 重新导出配置类型
pub use abnf_config::LexerConfig;

/// 使用默认配置对 `source` 分词，结果包含末尾的 `END_OF_INPUT`
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_input(source);
    tokenizer.tokens().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_ends_with_end_of_input() {
        let tokens = tokenize("a = b\n");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.last().is_some_and(Token::is_end_of_input));
        assert_eq!(tokens.iter().filter(|t| t.is_end_of_input()).count(), 1);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(
            tokenize(""),
            vec![Token::new(TokenKind::EndOfInput, "", 1, 1)]
        );
    }
}
