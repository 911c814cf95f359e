use crate::error::AuditError;
use serde::Deserialize;

/// JSON-LD author types accepted for `Article.author`.
pub const AUTHOR_TYPES: [&str; 2] = ["Organization", "Person"];

pub fn is_supported_author_type(value: &str) -> bool {
    AUTHOR_TYPES.contains(&value)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    pub audit: Option<AuditSection>,
    pub report: Option<ReportSection>,
    pub schema: Option<SchemaSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditSection {
    pub brand: Option<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string(), "mdx".to_string()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
    Text,
    Sarif,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    pub format: Option<ReportFormatSetting>,
    #[serde(default)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaSection {
    pub author: Option<String>,
    pub author_type: Option<String>,
    pub author_url: Option<String>,
    pub publisher: Option<String>,
    pub publisher_logo: Option<String>,
}

impl AuditConfig {
    pub fn brand(&self) -> Option<&str> {
        self.audit
            .as_ref()
            .and_then(|audit| audit.brand.as_deref())
    }

    pub fn extensions(&self) -> Vec<String> {
        match &self.audit {
            Some(audit) => audit
                .extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            None => default_extensions(),
        }
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn summary_only(&self) -> bool {
        self.report.as_ref().map(|report| report.quiet).unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if let Some(audit) = &self.audit {
            if let Some(brand) = &audit.brand {
                if brand.trim().is_empty() {
                    return Err(AuditError::ConfigParse(
                        "audit.brand must not be blank when set".to_string(),
                    ));
                }
            }
            if audit.extensions.is_empty() {
                return Err(AuditError::ConfigParse(
                    "audit.extensions must list at least one extension".to_string(),
                ));
            }
            if audit
                .extensions
                .iter()
                .any(|ext| ext.trim().trim_start_matches('.').is_empty())
            {
                return Err(AuditError::ConfigParse(
                    "audit.extensions entries must be non-empty".to_string(),
                ));
            }
        }

        if let Some(author_type) = self
            .schema
            .as_ref()
            .and_then(|schema| schema.author_type.as_deref())
        {
            if !is_supported_author_type(author_type) {
                return Err(AuditError::ConfigParse(format!(
                    "unsupported schema.author_type: {author_type}"
                )));
            }
        }

        Ok(())
    }
}
