use super::{AuditParams, Check};
use crate::scan::patterns::QUESTION_HEADING;
use crate::types::report::CheckResult;
use crate::types::scoring::Points;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

const IDEAL_SECTIONS: RangeInclusive<usize> = 3..=7;
const LISTED_TITLES: usize = 5;

static HEADINGS: OnceLock<[Regex; 3]> = OnceLock::new();

fn heading_patterns() -> &'static [Regex; 3] {
    HEADINGS.get_or_init(|| {
        [1, 2, 3].map(|level| {
            Regex::new(&format!(r"(?m)^#{{{level}}}\s+(.+)$"))
                .expect("heading pattern should compile")
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    fn pattern(self) -> &'static Regex {
        let [h1, h2, h3] = heading_patterns();
        match self {
            HeadingLevel::H1 => h1,
            HeadingLevel::H2 => h2,
            HeadingLevel::H3 => h3,
        }
    }
}

/// Titles of every heading at `level`, in document order.
pub fn headings_at(content: &str, level: HeadingLevel) -> Vec<String> {
    level
        .pattern()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub struct HeadingStructureCheck;

impl Check for HeadingStructureCheck {
    fn name(&self) -> &'static str {
        "heading_structure"
    }

    fn max_points(&self) -> Points {
        20
    }

    fn detail_key(&self) -> Option<&'static str> {
        Some("structure")
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        let h1 = headings_at(content, HeadingLevel::H1);
        let h2 = headings_at(content, HeadingLevel::H2);
        let h3 = headings_at(content, HeadingLevel::H3);

        result.detail("h1_count", h1.len());
        result.detail("h2_count", h2.len());
        result.detail("h3_count", h3.len());
        result.detail(
            "h2_titles",
            h2.iter().take(LISTED_TITLES).cloned().collect::<Vec<_>>(),
        );

        match h1.len() {
            1 => result.award(5),
            0 => result.issue("Missing an H1 title."),
            count => result.issue(format!(
                "Found {count} H1 titles; a document should have exactly one."
            )),
        }

        let sections = h2.len();
        if IDEAL_SECTIONS.contains(&sections) {
            result.award(10);
        } else if sections < *IDEAL_SECTIONS.start() {
            result.award(5);
            result.suggest(format!(
                "Only {sections} H2 sections; aim for 3-7 main sections."
            ));
        } else {
            result.award(8);
            result.suggest(format!(
                "{sections} H2 sections is a lot; consider regrouping the content."
            ));
        }

        let questions = h2
            .iter()
            .filter(|title| QUESTION_HEADING.is_match(title))
            .count();
        if questions > 0 {
            result.award(5);
            result.detail("question_h2s", questions);
        }

        result
    }
}
