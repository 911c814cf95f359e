use crate::types::report::AuditReport;
use serde_json::json;

pub fn to_sarif(report: &AuditReport) -> Result<String, serde_json::Error> {
    let mut results = Vec::new();
    for document in &report.documents {
        for check in &document.result.checks {
            let rule_id = format!("geo.{}", check.name);
            let findings = check
                .issues
                .iter()
                .map(|message| ("error", message))
                .chain(check.suggestions.iter().map(|message| ("note", message)));
            for (level, message) in findings {
                results.push(json!({
                    "ruleId": rule_id,
                    "level": level,
                    "message": { "text": message },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": { "uri": document.path }
                        }
                    }],
                }));
            }
        }
    }

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": report.tool,
                    "version": report.version,
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
