use super::RenderOptions;
use crate::types::report::{AuditReport, AuditResult};

pub fn to_markdown(report: &AuditReport, options: RenderOptions) -> String {
    let mut output = String::new();
    output.push_str("# GEO Audit Report\n\n");
    output.push_str(&format!(
        "Documents: {} ({} passed)\n\n",
        report.documents.len(),
        report
            .documents
            .iter()
            .filter(|document| document.result.passed)
            .count()
    ));

    for document in &report.documents {
        output.push_str(&format!("## {}\n\n", document.path));
        push_document(&mut output, &document.result, options);
    }

    output
}

fn push_document(output: &mut String, result: &AuditResult, options: RenderOptions) {
    output.push_str(&format!(
        "Score: {}/{} ({}), raw {}\n\n",
        result.score,
        result.max_score,
        if result.passed {
            "passed"
        } else {
            "needs improvement"
        },
        result.raw_score
    ));

    output.push_str("### Checks\n\n");
    output.push_str("| Check | Points | Max |\n| --- | --- | --- |\n");
    for check in &result.checks {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            check.name, check.points, check.max_points
        ));
    }
    output.push('\n');

    output.push_str("### Issues\n\n");
    push_list(output, &result.issues);

    if options.summary_only {
        return;
    }

    output.push_str("### Suggestions\n\n");
    push_list(output, &result.suggestions);

    output.push_str("### Details\n\n");
    output.push_str(&format!(
        "- headings: H1 {}, H2 {}, H3 {}\n- lists: {} items, tables: {}, code blocks: {}\n- links: {} internal, {} external\n\n",
        result.detail_count("structure", "h1_count"),
        result.detail_count("structure", "h2_count"),
        result.detail_count("structure", "h3_count"),
        result.detail_count("elements", "list_items"),
        result.detail_flag("elements", "has_tables"),
        result.detail_count("elements", "code_blocks"),
        result.detail_count("links", "internal_links"),
        result.detail_count("links", "external_links"),
    ));
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}
