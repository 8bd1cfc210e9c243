//! API 层配置
//!
//! 包含运行配置 RunConfig 和全局单例（供 CLI 使用）

use abnf_config::{LexerConfig, ProjectConfig};
use abnf_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// 分词运行配置
#[derive(Clone)]
pub struct RunConfig {
    /// 分词器行为
    pub lexer: LexerConfig,
    /// 出现任何诊断时拒绝输入
    pub strict: bool,
    pub logger: Arc<Logger>,
}

impl RunConfig {
    /// 由已解析的项目文件构建
    pub fn from_project(project: &ProjectConfig, logger: Arc<Logger>) -> Self {
        Self {
            lexer: project.lexer.clone(),
            strict: project.strict,
            logger,
        }
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("lexer", &self.lexer)
            .field("strict", &self.strict)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lexer: LexerConfig::default(),
            strict: false,
            logger: Logger::noop(),
        }
    }
}

// 全局配置单例（供 CLI 使用）
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// 初始化全局配置（必须在任何操作之前调用一次）
///
/// # Panics
/// 配置已初始化时 panic
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// 获取全局配置引用
///
/// # Panics
/// 配置未初始化时 panic
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// 全局配置，首次使用时以默认值初始化
pub fn config_or_default() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// 配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
