pub mod brand;
pub mod credibility;
pub mod cta;
pub mod direct_answer;
pub mod elements;
pub mod headings;
pub mod links;

use crate::types::report::{AuditResult, CheckResult, CheckSummary, Details};
use crate::types::scoring::{is_passing, normalize, Points, MAX_SCORE};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Caller-supplied knobs for a single audit.
#[derive(Debug, Clone, Default)]
pub struct AuditParams {
    pub brand: Option<String>,
}

impl AuditParams {
    pub fn with_brand(brand: Option<&str>) -> Self {
        Self {
            brand: brand.map(str::to_string),
        }
    }

    /// The brand to bind, if one was given and it is non-empty.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|brand| !brand.is_empty())
    }
}

/// One independent heuristic. Implementations must be pure functions of
/// `(content, params)` and must not award more than `max_points`.
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;

    fn max_points(&self) -> Points;

    /// Key under which this check's details are published, if it has any.
    fn detail_key(&self) -> Option<&'static str> {
        None
    }

    fn evaluate(&self, content: &str, params: &AuditParams) -> CheckResult;
}

/// The built-in checks in reporting order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(direct_answer::DirectAnswerCheck),
        Box::new(headings::HeadingStructureCheck),
        Box::new(elements::ListsAndTablesCheck),
        Box::new(brand::BrandBindingCheck),
        Box::new(cta::CallToActionCheck),
        Box::new(links::InternalLinksCheck),
        Box::new(credibility::CredibilitySignalsCheck),
    ]
}

pub struct Auditor {
    checks: Vec<Box<dyn Check>>,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::with_checks(default_checks())
    }
}

impl Auditor {
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    #[cfg(test)]
    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| check.as_ref())
    }

    pub fn audit(&self, content: &str, params: &AuditParams) -> AuditResult {
        let mut raw_score: Points = 0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();
        let mut details: BTreeMap<String, Details> = BTreeMap::new();
        let mut checks = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let result = check.evaluate(content, params);
            let max_points = check.max_points();
            let points = if result.points > max_points {
                warn!(
                    check = check.name(),
                    points = result.points,
                    max_points,
                    "check exceeded its maximum; clamping"
                );
                max_points
            } else {
                result.points
            };
            debug!(
                check = check.name(),
                points,
                max_points,
                issues = result.issues.len(),
                suggestions = result.suggestions.len(),
                "check evaluated"
            );

            raw_score += points;
            issues.extend(result.issues.iter().cloned());
            suggestions.extend(result.suggestions.iter().cloned());
            if let (Some(key), Some(payload)) = (check.detail_key(), result.details) {
                details.insert(key.to_string(), payload);
            }
            checks.push(CheckSummary {
                name: check.name().to_string(),
                points,
                max_points,
                issues: result.issues,
                suggestions: result.suggestions,
            });
        }

        let score = normalize(raw_score);
        debug!(raw_score, score, "audit aggregated");

        AuditResult {
            passed: is_passing(score),
            score,
            max_score: MAX_SCORE,
            raw_score,
            issues,
            suggestions,
            details,
            checks,
        }
    }
}

#[cfg(test)]
pub fn audit(content: &str, params: &AuditParams) -> AuditResult {
    Auditor::default().audit(content, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::PASS_THRESHOLD;

    const FULL_ARTICLE: &str = r#"---
title: Generative Engine Optimization
author: Acme Editorial
---
# Generative Engine Optimization

GEO is the practice of shaping content so AI answer engines can quote it.

## What is GEO?

Acme treats GEO as an editorial discipline.

## Why it matters

- Answers are extracted, not ranked
- Citations drive attribution

## How Acme measures it

| Metric | Before | After |
| --- | --- | --- |
| Citations | 2 | 9 |

In our experience, pages built with the Acme method load 30% faster.

## Tooling

Download the Acme checklist to get started.

## Further reading

See [the basics](/guides/geo-basics), [our method](/method), [case studies](/cases) and [pricing](/pricing).
"#;

    struct Greedy;

    impl Check for Greedy {
        fn name(&self) -> &'static str {
            "greedy"
        }

        fn max_points(&self) -> Points {
            5
        }

        fn detail_key(&self) -> Option<&'static str> {
            Some("greedy")
        }

        fn evaluate(&self, _content: &str, _params: &AuditParams) -> CheckResult {
            let mut result = CheckResult::empty();
            result.award(50);
            result.issue("greedy issue");
            result.detail("calls", 1);
            result
        }
    }

    #[test]
    fn default_registry_order_and_maximums() {
        let auditor = Auditor::default();
        let names = auditor.checks().map(|check| check.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "direct_answer",
                "heading_structure",
                "lists_and_tables",
                "brand_binding",
                "call_to_action",
                "internal_links",
                "credibility_signals",
            ]
        );
        let total: Points = auditor.checks().map(|check| check.max_points()).sum();
        assert_eq!(total, 85);
    }

    #[test]
    fn title_only_document_scores_baseline() {
        let result = audit("# Title", &AuditParams::default());

        let structure = &result.details["structure"];
        assert_eq!(structure["h1_count"], 1);
        assert_eq!(structure["h2_count"], 0);
        assert_eq!(result.checks[0].points, 15);
        assert_eq!(result.checks[1].points, 10);
        assert!(result.raw_score >= 25);
        assert_eq!(result.score, normalize(result.raw_score));
        assert!(!result.passed);
    }

    #[test]
    fn full_article_clamps_to_max_score() {
        let result = audit(FULL_ARTICLE, &AuditParams::with_brand(Some("Acme")));

        assert!(result.raw_score >= 80, "raw score was {}", result.raw_score);
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert!(result.issues.is_empty(), "issues: {:?}", result.issues);
        assert_eq!(result.details["links"]["internal_links"], 4);
        assert_eq!(result.details["elements"]["has_tables"], true);
    }

    #[test]
    fn details_are_published_under_fixed_keys_only() {
        let result = audit(FULL_ARTICLE, &AuditParams::default());
        let keys = result.details.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["elements", "links", "structure"]);
    }

    #[test]
    fn brand_absence_is_neutral() {
        let result = audit(FULL_ARTICLE, &AuditParams::default());
        let brand = &result.checks[3];
        assert_eq!(brand.name, "brand_binding");
        assert_eq!(brand.points, 0);
        assert!(brand.issues.is_empty());
        assert!(brand.suggestions.is_empty());
    }

    #[test]
    fn issues_and_suggestions_follow_registration_order() {
        let content = "# A\n# B\n\nplain words\n";
        let result = audit(content, &AuditParams::with_brand(Some("Acme")));

        let expected_issues = result
            .checks
            .iter()
            .flat_map(|check| check.issues.clone())
            .collect::<Vec<_>>();
        let expected_suggestions = result
            .checks
            .iter()
            .flat_map(|check| check.suggestions.clone())
            .collect::<Vec<_>>();
        assert_eq!(result.issues, expected_issues);
        assert_eq!(result.suggestions, expected_suggestions);
        assert!(result.issues[0].contains("H1"));
        assert!(result.issues[1].contains("Acme"));
    }

    #[test]
    fn score_bounds_hold_for_assorted_content() {
        let samples = [
            "",
            "\n\n\n",
            "# Title",
            "---\n---",
            "## Only sections?\n## Two\n",
            "纯中文内容，没有标题。",
            FULL_ARTICLE,
        ];
        for sample in samples {
            for brand in [None, Some("Acme"), Some("")] {
                let result = audit(sample, &AuditParams::with_brand(brand));
                assert!(result.score <= MAX_SCORE);
                assert_eq!(result.passed, result.score >= PASS_THRESHOLD);
                for (check, summary) in Auditor::default().checks().zip(&result.checks) {
                    assert!(summary.points <= check.max_points());
                }
            }
        }
    }

    #[test]
    fn audit_is_idempotent() {
        let params = AuditParams::with_brand(Some("Acme"));
        let first = serde_json::to_string(&audit(FULL_ARTICLE, &params)).expect("serialize");
        let second = serde_json::to_string(&audit(FULL_ARTICLE, &params)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_checks_are_clamped_and_merged() {
        let auditor = Auditor::with_checks(vec![Box::new(Greedy)]);
        let result = auditor.audit("anything", &AuditParams::default());
        assert_eq!(result.raw_score, 5);
        assert_eq!(result.score, normalize(5));
        assert_eq!(result.issues, vec!["greedy issue"]);
        assert_eq!(result.details["greedy"]["calls"], 1);
    }
}
