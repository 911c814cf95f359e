//! Named bilingual pattern sets, one per content signal.
//!
//! Each set holds per-language alternatives that are joined into a single
//! regex on first use. Supporting another language means adding variants to
//! the sets here; the checks only ever ask a set whether it matches.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Script-neutral syntax such as digits, currency or punctuation.
    Any,
    English,
    Chinese,
}

#[derive(Debug)]
pub struct LanguagePattern {
    pub language: Language,
    pub pattern: &'static str,
}

const fn variant(language: Language, pattern: &'static str) -> LanguagePattern {
    LanguagePattern { language, pattern }
}

#[derive(Debug)]
pub struct PatternSet {
    pub name: &'static str,
    case_insensitive: bool,
    variants: &'static [LanguagePattern],
    compiled: OnceLock<Regex>,
}

impl PatternSet {
    const fn new(
        name: &'static str,
        case_insensitive: bool,
        variants: &'static [LanguagePattern],
    ) -> Self {
        Self {
            name,
            case_insensitive,
            variants,
            compiled: OnceLock::new(),
        }
    }

    pub fn source(&self) -> String {
        let alternatives = self
            .variants
            .iter()
            .map(|variant| format!("(?:{})", variant.pattern))
            .collect::<Vec<_>>()
            .join("|");
        if self.case_insensitive {
            format!("(?i){alternatives}")
        } else {
            alternatives
        }
    }

    pub fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            debug!(set = self.name, languages = ?self.languages(), "compiling pattern set");
            Regex::new(&self.source())
                .unwrap_or_else(|e| panic!("pattern set {} should compile: {e}", self.name))
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut languages = Vec::new();
        for variant in self.variants {
            if !languages.contains(&variant.language) {
                languages.push(variant.language);
            }
        }
        languages
    }
}

/// Copula and definition markers ("X is ...", "X 是 ...").
pub static DEFINITION: PatternSet = PatternSet::new(
    "definition",
    false,
    &[
        variant(Language::Chinese, "是|为|指"),
        variant(Language::English, "means|is|refers to|defined as"),
    ],
);

/// Section headings phrased as a question.
pub static QUESTION_HEADING: PatternSet = PatternSet::new(
    "question_heading",
    false,
    &[
        variant(Language::Any, "[?？]"),
        variant(Language::English, "^(?:What|How|Why|When|Which)"),
        variant(Language::Chinese, "^(?:是什么|为什么|如何|怎么)"),
    ],
);

/// Low-friction call-to-action vocabulary.
pub static CALL_TO_ACTION: PatternSet = PatternSet::new(
    "call_to_action",
    true,
    &[
        variant(
            Language::Chinese,
            "下载|获取|免费|模板|清单|指南|工具|立即|开始|试用",
        ),
        variant(
            Language::English,
            "Download|Get|Free|Template|Checklist|Guide|Tool|Now|Start|Try",
        ),
    ],
);

/// First-hand experience phrasing.
pub static EXPERIENCE: PatternSet = PatternSet::new(
    "experience",
    true,
    &[
        variant(
            Language::Chinese,
            "我们发现|我们的经验|在.*实践中|经过.*测试|通过.*验证",
        ),
        variant(
            Language::English,
            "In our experience|We found|We discovered|After.*projects",
        ),
    ],
);

/// Percentages, multipliers, currency amounts and audience sizes.
pub static QUANTITATIVE: PatternSet = PatternSet::new(
    "quantitative",
    false,
    &[
        variant(Language::Any, r"\d+%|\d+\s*[x×]|\$[\d,]+"),
        variant(Language::English, r"[\d,]+\s*(?:users|customers)"),
        variant(Language::Chinese, r"\d+\s*倍|[\d,]+\s*(?:用户|客户)"),
    ],
);

/// Attributed sourcing.
pub static CITATION: PatternSet = PatternSet::new(
    "citation",
    false,
    &[
        variant(Language::English, "According to|Source:"),
        variant(Language::Chinese, "根据|研究表明|数据显示|来源:"),
    ],
);

#[cfg(test)]
pub fn all() -> [&'static PatternSet; 6] {
    [
        &DEFINITION,
        &QUESTION_HEADING,
        &CALL_TO_ACTION,
        &EXPERIENCE,
        &QUANTITATIVE,
        &CITATION,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_set_compiles() {
        for set in all() {
            assert!(!set.regex().as_str().is_empty(), "{} is empty", set.name);
        }
    }

    #[test]
    fn every_pattern_set_covers_both_languages() {
        for set in all() {
            let languages = set.languages();
            assert!(languages.contains(&Language::English), "{}", set.name);
            assert!(languages.contains(&Language::Chinese), "{}", set.name);
        }
    }

    #[test]
    fn source_wraps_each_variant_and_applies_case_flag() {
        assert_eq!(CITATION.source(), "(?:According to|Source:)|(?:根据|研究表明|数据显示|来源:)");
        assert!(CALL_TO_ACTION.source().starts_with("(?i)"));
    }

    #[test]
    fn definition_matches_either_language() {
        assert!(DEFINITION.is_match("GEO refers to shaping content"));
        assert!(DEFINITION.is_match("GEO 是一种优化方法"));
        assert!(!DEFINITION.is_match("Shaping content for answer engines"));
    }

    #[test]
    fn question_heading_anchors_interrogatives_at_start() {
        assert!(QUESTION_HEADING.is_match("How does GEO work"));
        assert!(QUESTION_HEADING.is_match("为什么需要 GEO"));
        assert!(QUESTION_HEADING.is_match("GEO vs SEO?"));
        assert!(QUESTION_HEADING.is_match("GEO 的价值？"));
        assert!(!QUESTION_HEADING.is_match("Knowing How it works"));
        assert!(!QUESTION_HEADING.is_match("how it works"));
    }

    #[test]
    fn call_to_action_is_case_insensitive() {
        assert!(CALL_TO_ACTION.is_match("DOWNLOAD the kit"));
        assert!(CALL_TO_ACTION.is_match("领取免费模板"));
        assert!(!CALL_TO_ACTION.is_match("A plain sentence."));
    }

    #[test]
    fn experience_matches_bilingual_phrasing() {
        assert!(EXPERIENCE.is_match("we found that answers improve"));
        assert!(EXPERIENCE.is_match("After 40 client projects, results held"));
        assert!(EXPERIENCE.is_match("我们在电商实践中总结"));
        assert!(!EXPERIENCE.is_match("Answers improve."));
    }

    #[test]
    fn quantitative_matches_numbers_with_units() {
        assert!(QUANTITATIVE.is_match("30% faster"));
        assert!(QUANTITATIVE.is_match("a 3x lift"));
        assert!(QUANTITATIVE.is_match("costs $1,200"));
        assert!(QUANTITATIVE.is_match("10,000 users"));
        assert!(QUANTITATIVE.is_match("提升 3 倍"));
        assert!(QUANTITATIVE.is_match("5000用户"));
        assert!(!QUANTITATIVE.is_match("thirty percent faster"));
    }

    #[test]
    fn citation_is_case_sensitive() {
        assert!(CITATION.is_match("According to Gartner"));
        assert!(CITATION.is_match("根据行业报告"));
        assert!(!CITATION.is_match("according to gartner"));
    }
}
