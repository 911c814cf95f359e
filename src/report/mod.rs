pub mod json;
pub mod md;
pub mod sarif;
pub mod text;

use crate::analyze::{AuditParams, Auditor};
use crate::error::AuditError;
use crate::scan::input::Document;
use crate::types::report::{AuditReport, DocumentReport};
use chrono::Utc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
    Sarif,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Omit suggestions and details from human-readable output.
    pub summary_only: bool,
}

/// Audits every document independently and wraps the results for rendering.
pub fn build_report(
    auditor: &Auditor,
    documents: &[Document],
    params: &AuditParams,
) -> AuditReport {
    let documents = documents
        .iter()
        .map(|document| {
            let result = auditor.audit(&document.content, params);
            info!(
                path = %document.path.display(),
                score = result.score,
                passed = result.passed,
                "document audited"
            );
            DocumentReport {
                path: document.path.display().to_string(),
                content_sha256: document.sha256(),
                result,
            }
        })
        .collect();

    AuditReport {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        documents,
    }
}

pub fn render(
    report: &AuditReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, options)),
        OutputFormat::Text => Ok(text::to_text(report, options)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(AuditError::Json),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::analyze::{audit, AuditParams};
    use crate::types::report::{AuditReport, DocumentReport};

    pub const SAMPLE: &str = "# GEO Guide\n\nGEO is answer-first writing.\n\n## What is GEO?\n\n- point\n\n[guide](/guide)\n";

    pub fn report_for(content: &str, brand: Option<&str>) -> AuditReport {
        AuditReport {
            tool: "geo-audit".to_string(),
            version: "0.0.0".to_string(),
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            documents: vec![DocumentReport {
                path: "docs/guide.md".to_string(),
                content_sha256: "deadbeef".to_string(),
                result: audit(content, &AuditParams::with_brand(brand)),
            }],
        }
    }
}
