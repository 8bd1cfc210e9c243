//! ABNF API - Tokenize orchestration layer
//!
//! Provides the unified entry points around the core tokenizer:
//! - Run flow (pull tokens to end of input, timing, strict mode)
//! - Configuration abstraction (RunConfig)
//! - Project files and source loading
//! - Unified error handling (ApiError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `tokenize_with_config(source, &config)` API.

use abnf_core::Tokenizer;
use abnf_log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

// 重新导出配置
pub mod config;
pub use config::{
    config as get_config, config_or_default, init as init_config, is_initialized, RunConfig,
};

// 从 abnf_config 重新导出配置类型
pub use abnf_config::{LexerConfig, LogLevel, OutputConfig, OutputFormat, ProjectConfig};

// 重新导出错误与类型
pub mod error;
pub mod types;
pub use error::{ApiError, ErrorReport};
pub use types::TokenizeOutput;

// 重新导出核心类型
pub use abnf_core::{DiagnosticKind, LexDiagnostic, Token, TokenKind};

/// 使用显式配置分词
///
/// 库用户推荐使用此 API。
pub fn tokenize_with_config(source: &str, config: &RunConfig) -> Result<TokenizeOutput, ApiError> {
    let _span = config.logger.enter_span("tokenize");
    info!(config.logger, "Starting tokenize: {} bytes", source.len());

    let started = Instant::now();
    let mut tokenizer = Tokenizer::with_config(config.lexer.clone(), config.logger.clone());
    tokenizer.set_input(source);
    let tokens: Vec<_> = tokenizer.tokens().collect();
    let diagnostics = tokenizer.take_diagnostics();
    let elapsed = started.elapsed();

    info!(
        config.logger,
        "Tokenize completed: {} tokens, {} diagnostics in {:?}",
        tokens.len(),
        diagnostics.len(),
        elapsed
    );

    if config.strict && !diagnostics.is_empty() {
        warn!(config.logger, "Strict mode: rejecting input");
        return Err(ApiError::Rejected { diagnostics });
    }

    Ok(TokenizeOutput {
        tokens,
        diagnostics,
        elapsed,
    })
}

/// 加载 `abnf.json` 项目文件
pub fn load_project(path: impl AsRef<Path>) -> Result<ProjectConfig, ApiError> {
    let path = path.as_ref();
    let text = read_source(path)?;
    serde_json::from_str(&text).map_err(|source| ApiError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// 读取语法文件（或项目文件）为字符串
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ApiError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// 相对于项目文件所在目录解析 `entry`
pub fn resolve_entry(
    project_path: impl AsRef<Path>,
    entry: Option<&str>,
) -> Result<PathBuf, ApiError> {
    let entry = entry.ok_or(ApiError::MissingEntry)?;
    let entry = Path::new(entry);
    if entry.is_absolute() {
        return Ok(entry.to_path_buf());
    }
    let base = project_path
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new(""));
    Ok(base.join(entry))
}

// ==================== 旧版 API（使用全局配置） ====================

/// 分词（使用全局配置）
///
/// # Panics
/// 全局配置未初始化时 panic
pub fn tokenize(source: &str) -> Result<TokenizeOutput, ApiError> {
    let config = get_config();
    debug!(config.logger, "Tokenize with global config");
    tokenize_with_config(source, config)
}

/// 使用默认配置快速分词（必要时自动初始化）
pub fn quick_tokenize(source: &str) -> Result<TokenizeOutput, ApiError> {
    tokenize_with_config(source, config_or_default())
}
