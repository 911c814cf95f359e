use super::RenderOptions;
use crate::types::report::{AuditReport, DocumentReport};

const RULE_WIDTH: usize = 50;

pub fn to_text(report: &AuditReport, options: RenderOptions) -> String {
    let mut output = String::new();
    for document in &report.documents {
        push_document(&mut output, document, options);
    }
    output
}

fn push_document(output: &mut String, document: &DocumentReport, options: RenderOptions) {
    let result = &document.result;
    let rule = "=".repeat(RULE_WIDTH);
    let status = if result.passed {
        "PASSED"
    } else {
        "NEEDS IMPROVEMENT"
    };

    output.push_str(&format!("{rule}\nGEO Content Audit: {}\n{rule}\n", document.path));
    output.push_str(&format!(
        "\nScore: {}/{} {status}\n",
        result.score, result.max_score
    ));

    if !result.issues.is_empty() {
        output.push_str(&format!("\nIssues ({}):\n", result.issues.len()));
        for issue in &result.issues {
            output.push_str(&format!("  - {issue}\n"));
        }
    }

    if !options.summary_only {
        if !result.suggestions.is_empty() {
            output.push_str(&format!("\nSuggestions ({}):\n", result.suggestions.len()));
            for suggestion in &result.suggestions {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !result.details.is_empty() {
            output.push_str("\nDetails:\n");
            if result.details.contains_key("structure") {
                output.push_str(&format!(
                    "  - H1: {}, H2: {}, H3: {}\n",
                    result.detail_count("structure", "h1_count"),
                    result.detail_count("structure", "h2_count"),
                    result.detail_count("structure", "h3_count"),
                ));
            }
            if result.details.contains_key("elements") {
                output.push_str(&format!(
                    "  - Lists: {} items, Tables: {}, Code blocks: {}\n",
                    result.detail_count("elements", "list_items"),
                    result.detail_flag("elements", "has_tables"),
                    result.detail_count("elements", "code_blocks"),
                ));
            }
            if result.details.contains_key("links") {
                output.push_str(&format!(
                    "  - Internal links: {}, External links: {}\n",
                    result.detail_count("links", "internal_links"),
                    result.detail_count("links", "external_links"),
                ));
            }
        }
    }

    output.push_str(&format!("\n{rule}\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{report_for, SAMPLE};

    #[test]
    fn text_report_shows_score_and_status() {
        let rendered = to_text(&report_for("# Title", None), RenderOptions::default());
        assert!(rendered.contains("GEO Content Audit: docs/guide.md"));
        assert!(rendered.contains("Score: 33/100 NEEDS IMPROVEMENT"));
        assert!(rendered.contains("Suggestions ("));
        assert!(rendered.contains("  - H1: 1, H2: 0, H3: 0"));
    }

    #[test]
    fn summary_mode_keeps_issues_only() {
        let options = RenderOptions { summary_only: true };
        let rendered = to_text(&report_for(SAMPLE, Some("Nobody")), options);
        assert!(rendered.contains("Issues (1):"));
        assert!(!rendered.contains("Suggestions"));
        assert!(!rendered.contains("Details:"));
    }
}
