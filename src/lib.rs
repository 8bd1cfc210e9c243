//! ABNF Lex - lexer for ABNF-like grammar notation
//!
//! Splits grammar text into rule names, `=`, `/`, terminal values, string
//! literals, comments and line ends, each tagged with a 1-based position.
//!
//! # Architecture
//!
//! ```text
//! abnf-config/  - Pure configuration data (abnf.json)
//! abnf-log/     - Logging with explicit Arc<Logger> passing
//! abnf-core/    - Scanner and tokenizer (no IO)
//! abnf-api/     - Orchestration, project files, errors
//! abnf-cli/     - `abnf-lex` binary
//! ```
//!
//! # Quick Start
//!
//! ```
//! use abnf_workspace::{quick_tokenize, TokenKind};
//!
//! let output = quick_tokenize("CRLF = CR LF\n").unwrap();
//! assert_eq!(output.count(TokenKind::RuleName), 3);
//! ```

// 重导出常用类型
pub use abnf_api::{
    init_config, load_project, quick_tokenize, read_source, resolve_entry, tokenize,
    tokenize_with_config, ApiError, ErrorReport, RunConfig, TokenizeOutput,
};
pub use abnf_config::{LexerConfig, LogLevel, OutputConfig, OutputFormat, ProjectConfig};
pub use abnf_core::{
    CharValue, DiagnosticKind, LexDiagnostic, ScanError, ScannedChar, Scanner, Token, TokenKind,
    Tokenizer,
};
pub use abnf_log::{LogConfig, Logger};
