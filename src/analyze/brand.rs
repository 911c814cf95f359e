use super::{AuditParams, Check};
use crate::types::report::CheckResult;
use crate::types::scoring::Points;
use regex::RegexBuilder;
use tracing::warn;

const STRONG_BINDING: usize = 3;

/// Case-insensitive count of literal `brand` occurrences.
pub fn count_mentions(content: &str, brand: &str) -> usize {
    if brand.is_empty() {
        return 0;
    }
    match RegexBuilder::new(&regex::escape(brand))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern.find_iter(content).count(),
        Err(e) => {
            // Only reachable when the escaped brand exceeds the regex size limit.
            warn!(error = %e, "brand pattern rejected; falling back to lowercase search");
            content.to_lowercase().matches(&brand.to_lowercase()).count()
        }
    }
}

/// Opt-in: scores nothing and reports nothing without a brand.
pub struct BrandBindingCheck;

impl Check for BrandBindingCheck {
    fn name(&self) -> &'static str {
        "brand_binding"
    }

    fn max_points(&self) -> Points {
        10
    }

    fn evaluate(&self, content: &str, params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        let Some(brand) = params.brand() else {
            return result;
        };

        let mentions = count_mentions(content, brand);
        if mentions >= STRONG_BINDING {
            result.award(10);
        } else if mentions >= 1 {
            result.award(5);
            result.suggest(format!(
                "Brand \"{brand}\" appears only {mentions} time(s); tie it to your methods or frameworks where it fits naturally."
            ));
        } else {
            result.issue(format!(
                "Content never mentions the brand \"{brand}\", so answer engines cannot attribute it."
            ));
        }

        result
    }
}
