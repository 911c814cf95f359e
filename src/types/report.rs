use super::scoring::Points;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Structured facts a check exposes for reporting (counts, flags, titles).
pub type Details = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckResult {
    pub points: Points,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: Option<Details>,
}

impl CheckResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn award(&mut self, points: Points) {
        self.points += points;
    }

    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    pub fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    pub fn detail(&mut self, key: &str, value: impl Into<Value>) {
        self.details
            .get_or_insert_with(Details::new)
            .insert(key.to_string(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSummary {
    pub name: String,
    pub points: Points,
    pub max_points: Points,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub passed: bool,
    pub score: Points,
    pub max_score: Points,
    pub raw_score: Points,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: BTreeMap<String, Details>,
    pub checks: Vec<CheckSummary>,
}

impl AuditResult {
    pub fn detail_count(&self, group: &str, key: &str) -> u64 {
        self.details
            .get(group)
            .and_then(|details| details.get(key))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    pub fn detail_flag(&self, group: &str, key: &str) -> bool {
        self.details
            .get(group)
            .and_then(|details| details.get(key))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub content_sha256: String,
    pub result: AuditResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub tool: String,
    pub version: String,
    pub generated_at: String,
    pub documents: Vec<DocumentReport>,
}

impl AuditReport {
    pub fn all_passed(&self) -> bool {
        self.documents.iter().all(|document| document.result.passed)
    }
}
