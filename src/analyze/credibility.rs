use super::{AuditParams, Check};
use crate::scan::patterns::{PatternSet, CITATION, EXPERIENCE, QUANTITATIVE};
use crate::types::report::CheckResult;
use crate::types::scoring::Points;

const SIGNAL_POINTS: Points = 5;

/// Each signal is scored on its own; a missing one only produces a suggestion.
fn signals() -> [(&'static PatternSet, &'static str); 3] {
    [
        (
            &EXPERIENCE,
            "Add first-hand experience, e.g. \"In our work on project X we found ...\".",
        ),
        (&QUANTITATIVE, "Back claims with concrete numbers or statistics."),
        (&CITATION, "Cite authoritative sources to strengthen credibility."),
    ]
}

pub struct CredibilitySignalsCheck;

impl Check for CredibilitySignalsCheck {
    fn name(&self) -> &'static str {
        "credibility_signals"
    }

    fn max_points(&self) -> Points {
        SIGNAL_POINTS * signals().len() as Points
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        for (signal, hint) in signals() {
            if signal.is_match(content) {
                result.award(SIGNAL_POINTS);
            } else {
                result.suggest(hint);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(content: &str) -> CheckResult {
        CredibilitySignalsCheck.evaluate(content, &AuditParams::default())
    }

    #[test]
    fn max_points_is_fifteen() {
        assert_eq!(CredibilitySignalsCheck.max_points(), 15);
    }

    #[test]
    fn no_signals_yields_three_suggestions_and_no_issues() {
        let result = evaluate("Plain prose without any support.");
        assert_eq!(result.points, 0);
        assert!(result.issues.is_empty());
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn signals_are_scored_independently() {
        let data_only = evaluate("Pages load 30% faster.");
        assert_eq!(data_only.points, 5);
        assert_eq!(data_only.suggestions.len(), 2);
        assert!(data_only.suggestions[0].contains("first-hand experience"));
        assert!(data_only.suggestions[1].contains("Cite"));

        let all = evaluate("We found pages load 30% faster. Source: internal benchmark.");
        assert_eq!(all.points, 15);
        assert!(all.suggestions.is_empty());
    }

    #[test]
    fn chinese_signals_are_recognised() {
        let result = evaluate("我们发现转化率提升 2 倍，根据行业报告。");
        assert_eq!(result.points, 15);
    }
}
