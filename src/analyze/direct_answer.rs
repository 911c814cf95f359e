use super::{AuditParams, Check};
use crate::scan::metrics::{count_words, first_paragraph};
use crate::scan::patterns::DEFINITION;
use crate::types::report::CheckResult;
use crate::types::scoring::Points;

const CONCISE_LIMIT: usize = 60;
const EXTRACTABLE_LIMIT: usize = 100;

/// Rewards an opening paragraph short enough to be quoted as an answer.
pub struct DirectAnswerCheck;

impl Check for DirectAnswerCheck {
    fn name(&self) -> &'static str {
        "direct_answer"
    }

    fn max_points(&self) -> Points {
        20
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        let paragraph = first_paragraph(content);
        let words = count_words(&paragraph);

        if words <= CONCISE_LIMIT {
            result.award(15);
        } else if words <= EXTRACTABLE_LIMIT {
            result.award(10);
            result.suggest(format!(
                "First paragraph has {words} words; trim it to {CONCISE_LIMIT} or fewer so answer engines can lift it."
            ));
        } else {
            result.award(5);
            result.issue(format!(
                "First paragraph is too long ({words} words) for answer engines to extract a direct answer."
            ));
        }

        if DEFINITION.is_match(&paragraph) {
            result.award(5);
        } else {
            result.suggest(
                "Open with a definition sentence such as \"X is ...\" or \"X refers to ...\".",
            );
        }

        result
    }
}
