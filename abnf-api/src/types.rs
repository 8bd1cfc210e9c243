//! API 类型定义
//!
//! 词法分析的输出类型。

use abnf_core::{LexDiagnostic, Token, TokenKind};
use std::collections::BTreeMap;
use std::time::Duration;

/// 词法分析输出
#[derive(Debug, Clone)]
pub struct TokenizeOutput {
    /// 全部 token，最后一个为 END_OF_INPUT
    pub tokens: Vec<Token>,
    /// 软诊断（未识别字符、未闭合字符串等）
    pub diagnostics: Vec<LexDiagnostic>,
    /// 耗时
    pub elapsed: Duration,
}

impl TokenizeOutput {
    /// 指定种类的 token 数量
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// 各种类的 token 数量，按种类排序
    pub fn kind_counts(&self) -> BTreeMap<TokenKind, usize> {
        let mut counts = BTreeMap::new();
        for token in &self.tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
