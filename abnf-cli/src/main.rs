//! ABNF Lex CLI - Command line interface
//!
//! Tokenizes a grammar file and prints the token stream. Settings come from
//! an optional `abnf.json` project file, overridden by command line flags.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{Overrides, Settings};
use crate::platform::{print_diagnostics, print_error_with_source, render_error_json, source_lines};
use abnf_api::{
    init_config, read_source, tokenize, ApiError, LogLevel, OutputFormat, RunConfig,
    TokenizeOutput,
};
use abnf_log::info;

#[derive(Parser)]
#[command(
    name = "abnf-lex",
    about = "Tokenize ABNF-like grammar files",
    version = "0.1.0"
)]
struct Cli {
    /// Grammar file (default: the project file's `entry`)
    #[arg(value_name = "GRAMMAR")]
    grammar: Option<PathBuf>,

    /// Project file path (default: ./abnf.json when no GRAMMAR is given)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Also append log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Fail when the grammar produced any lexical diagnostic
    #[arg(long)]
    strict: bool,

    /// Print the numbered source before the tokens
    #[arg(long)]
    show_source: bool,

    /// Report how long tokenization took
    #[arg(long)]
    timing: bool,
}

impl Cli {
    fn overrides(self) -> Overrides {
        Overrides {
            grammar: self.grammar,
            config: self.config,
            format: self.format,
            log_level: self.log_level,
            log_file: self.log_file,
            strict: self.strict,
            show_source: self.show_source,
            timing: self.timing,
        }
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{}', expected text or json", s))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() {
    let overrides = Cli::parse().overrides();

    let settings = match Settings::resolve(&overrides) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let logger = logging::init_logger(settings.log_level, settings.log_file.as_deref());
    info!(logger, "Grammar: {}", settings.grammar().display());

    let source = match read_source(settings.grammar()) {
        Ok(s) => s,
        Err(e) => exit_with_error(&e, "", settings.format),
    };

    // 初始化 API 配置（全局单例）
    init_config(RunConfig {
        lexer: settings.lexer.clone(),
        strict: settings.strict,
        logger,
    });

    if settings.show_source && settings.format == OutputFormat::Text {
        println!("[Source]");
        for (i, line) in source_lines(&source).iter().enumerate() {
            println!("{:3} | {}", i + 1, line);
        }
        println!("[Tokens]");
    }

    match tokenize(&source) {
        Ok(output) => match settings.format {
            OutputFormat::Text => print_text(&output, &source, &settings),
            OutputFormat::Json => print_json(&output, &settings),
        },
        Err(e) => exit_with_error(&e, &source, settings.format),
    }
}

/// JSON 模式下错误报告写到 stdout，否则带源码上下文写到 stderr
fn exit_with_error(e: &ApiError, source: &str, format: OutputFormat) -> ! {
    match format {
        OutputFormat::Json => println!("{}", render_error_json(e)),
        OutputFormat::Text => print_error_with_source(e, source),
    }
    process::exit(1);
}

fn print_text(output: &TokenizeOutput, source: &str, settings: &Settings) {
    for token in &output.tokens {
        println!("{}", token);
    }

    print_diagnostics(&output.diagnostics, source);

    if settings.show_timing {
        println!(
            "[Timing] {} tokens in {:?}",
            output.tokens.len(),
            output.elapsed
        );
    }
}

fn print_json(output: &TokenizeOutput, settings: &Settings) {
    let mut value = serde_json::json!({
        "tokens": output.tokens,
        "diagnostics": output.diagnostics,
    });
    if settings.show_timing {
        value["elapsed_us"] = serde_json::json!(output.elapsed.as_micros() as u64);
    }

    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            process::exit(1);
        }
    }
}
