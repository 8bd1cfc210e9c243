//! CLI 配置
//!
//! 把项目文件（abnf.json）与命令行参数合并成一次运行的设置。
//! 命令行参数优先。

use abnf_api::{load_project, resolve_entry, ApiError, LogLevel, OutputFormat, ProjectConfig};
use abnf_config::LexerConfig;
use std::path::{Path, PathBuf};

/// 未指定 `--config` 时查找的项目文件
pub const DEFAULT_PROJECT_FILE: &str = "abnf.json";

/// 命令行上给出的覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grammar: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub strict: bool,
    pub show_source: bool,
    pub timing: bool,
}

/// 合并后的运行设置
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grammar: PathBuf,
    pub format: OutputFormat,
    pub log_level: LogLevel,
    /// 额外的日志文件（stderr 之外）
    pub log_file: Option<PathBuf>,
    pub lexer: LexerConfig,
    pub strict: bool,
    pub show_source: bool,
    pub show_timing: bool,
}

impl Settings {
    /// 加载项目文件（显式指定，或未给出语法文件时使用 `./abnf.json`），
    /// 再叠加命令行参数
    pub fn resolve(overrides: &Overrides) -> Result<Self, ApiError> {
        let project_path = match (&overrides.config, &overrides.grammar) {
            (Some(path), _) => Some(path.clone()),
            (None, None) => Some(PathBuf::from(DEFAULT_PROJECT_FILE)),
            (None, Some(_)) => None,
        };

        let project = match &project_path {
            Some(path) => load_project(path)?,
            None => ProjectConfig::default(),
        };

        let grammar = match (&overrides.grammar, &project_path) {
            (Some(grammar), _) => grammar.clone(),
            (None, Some(path)) => resolve_entry(path, project.entry.as_deref())?,
            (None, None) => return Err(ApiError::MissingEntry),
        };

        let mut settings = Self::merge(grammar, &project, overrides);
        if overrides.log_file.is_none() {
            if let (Some(path), Some(file)) = (&project_path, project.log_file.as_deref()) {
                settings.log_file = Some(resolve_entry(path, Some(file))?);
            }
        }
        Ok(settings)
    }

    /// 命令行优先；布尔开关只能打开选项
    pub fn merge(grammar: PathBuf, project: &ProjectConfig, overrides: &Overrides) -> Self {
        Self {
            grammar,
            format: overrides.format.unwrap_or(project.output.format),
            log_level: overrides
                .log_level
                .or(project.log_level)
                .unwrap_or_default(),
            log_file: overrides
                .log_file
                .clone()
                .or_else(|| project.log_file.as_ref().map(PathBuf::from)),
            lexer: project.lexer.clone(),
            strict: overrides.strict || project.strict,
            show_source: overrides.show_source || project.output.show_source,
            show_timing: overrides.timing || project.output.show_timing,
        }
    }

    pub fn grammar(&self) -> &Path {
        &self.grammar
    }
}
