use super::{AuditParams, Check};
use crate::types::report::CheckResult;
use crate::types::scoring::Points;
use regex::Regex;
use std::sync::OnceLock;

/// Header, separator and at least one data row.
const MIN_TABLE_ROWS: usize = 3;

static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
static TABLE_ROW: OnceLock<Regex> = OnceLock::new();
static CODE_BLOCK: OnceLock<Regex> = OnceLock::new();

fn list_item() -> &'static Regex {
    LIST_ITEM.get_or_init(|| {
        Regex::new(r"(?m)^\s*[-*+]\s+.+$|^\d+\.\s+.+$").expect("list pattern should compile")
    })
}

fn table_row() -> &'static Regex {
    TABLE_ROW.get_or_init(|| Regex::new(r"\|.+\|").expect("table pattern should compile"))
}

fn code_block() -> &'static Regex {
    CODE_BLOCK.get_or_init(|| Regex::new(r"```[\s\S]*?```").expect("code pattern should compile"))
}

pub struct ListsAndTablesCheck;

impl Check for ListsAndTablesCheck {
    fn name(&self) -> &'static str {
        "lists_and_tables"
    }

    fn max_points(&self) -> Points {
        10
    }

    fn detail_key(&self) -> Option<&'static str> {
        Some("elements")
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        let list_items = list_item().find_iter(content).count();
        let table_rows = table_row().find_iter(content).count();
        let has_tables = table_rows >= MIN_TABLE_ROWS;
        let code_blocks = code_block().find_iter(content).count();

        result.detail("list_items", list_items);
        result.detail("has_tables", has_tables);
        result.detail("table_rows", table_rows);
        result.detail("code_blocks", code_blocks);

        if list_items > 0 {
            result.award(5);
        } else {
            result.suggest("Add bulleted or numbered lists so key points are easy to scan and extract.");
        }

        if has_tables {
            result.award(5);
        } else {
            result.suggest("Present comparisons in a table.");
        }

        result
    }
}
