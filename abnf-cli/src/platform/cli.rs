//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示、JSON 错误报告和源码上下文打印。

use abnf_api::{ApiError, LexDiagnostic};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &ApiError, source: &str) {
    eprintln!("❌ {}", e);

    match e {
        ApiError::Rejected { diagnostics } => print_diagnostics(diagnostics, source),
        _ => {
            if let (Some(line), Some(col)) = (e.line(), e.column()) {
                eprint!("{}", render_source_context(source, line, col));
            }
        }
    }
}

/// 把错误渲染为 `{ "error": ErrorReport }` 形式的 JSON
pub fn render_error_json(e: &ApiError) -> String {
    let value = serde_json::json!({ "error": e.to_report() });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// 打印每条诊断及其源码位置
pub fn print_diagnostics(diagnostics: &[LexDiagnostic], source: &str) {
    for diagnostic in diagnostics {
        eprintln!("⚠️  {}", diagnostic);
        eprint!(
            "{}",
            render_source_context(source, diagnostic.line, diagnostic.column)
        );
    }
}

/// 按扫描器的规则切分行：`\n`、`\r\n` 和单独的 `\r` 都是行结束
pub fn source_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&source[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&source[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }
    lines
}

/// 渲染源代码上下文（错误行前后几行，错误列下方画 `^`）
///
/// 位置超出源码范围时返回空字符串。
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines = source_lines(source);
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{}|--\n", separator);
    for line_idx in start_line..=end_line {
        out.push_str(&format!(
            "{:>width$} | {}\n",
            line_idx,
            lines[line_idx - 1],
            width = width
        ));
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{} | {}^\n", " ".repeat(width), marker));
        }
    }
    out.push_str(&format!("{}|--\n", separator));
    out
}
