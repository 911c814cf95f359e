use super::{AuditParams, Check};
use crate::scan::patterns::CALL_TO_ACTION;
use crate::types::report::CheckResult;
use crate::types::scoring::Points;

pub struct CallToActionCheck;

impl Check for CallToActionCheck {
    fn name(&self) -> &'static str {
        "call_to_action"
    }

    fn max_points(&self) -> Points {
        5
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        if CALL_TO_ACTION.is_match(content) {
            result.award(5);
        } else {
            result.suggest(
                "Add a low-friction call to action such as a template download, checklist or free tool.",
            );
        }
        result
    }
}
