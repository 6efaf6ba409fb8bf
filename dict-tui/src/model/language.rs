//! 词典语言对

use std::fmt;

use serde::Deserialize;

/// 编译期内置的语言对列表
const LANGUAGE_PAIRS: &[(&str, &str)] = &[
    ("en", "en"),
    ("en", "pt_br"),
    ("en", "dk"),
    ("dk", "en"),
    ("dk", "pt_br"),
    ("pt_br", "en"),
    ("pt_br", "pt_br"),
];

/// 语言对：源语言 -> 目标语言
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// 紧凑标签，用于状态栏和过滤匹配，如 `en>pt_br`
    pub fn label(&self) -> String {
        format!("{}>{}", self.source, self.target)
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "en")
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// 获取所有可选的语言对
pub fn get_all_language_pairs() -> Vec<LanguagePair> {
    LANGUAGE_PAIRS
        .iter()
        .map(|(source, target)| LanguagePair::new(*source, *target))
        .collect()
}

/// 按子串过滤语言对
pub fn filter_language_pairs(filter: &str) -> Vec<LanguagePair> {
    get_all_language_pairs()
        .into_iter()
        .filter(|pair| pair.label().contains(filter))
        .collect()
}

/// 释义面板和翻译面板各自的词典
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    pub meaning: LanguagePair,
    pub translate: LanguagePair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_display() {
        let pair = LanguagePair::new("en", "pt_br");
        assert_eq!(pair.label(), "en>pt_br");
        assert_eq!(pair.to_string(), "en -> pt_br");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_language_pairs("").len(), get_all_language_pairs().len());
    }

    #[test]
    fn test_filter_by_substring() {
        let pairs = filter_language_pairs("dk>");
        assert_eq!(
            pairs,
            vec![LanguagePair::new("dk", "en"), LanguagePair::new("dk", "pt_br")]
        );
    }

    #[test]
    fn test_filter_without_match() {
        assert!(filter_language_pairs("zz").is_empty());
    }
}
