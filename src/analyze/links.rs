use super::{AuditParams, Check};
use crate::types::report::CheckResult;
use crate::types::scoring::Points;
use regex::Regex;
use std::sync::OnceLock;

const EXTERNAL_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];
const WELL_LINKED: usize = 3;

static MARKDOWN_LINK: OnceLock<Regex> = OnceLock::new();

fn markdown_link() -> &'static Regex {
    MARKDOWN_LINK.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern should compile")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub target: String,
}

impl Link {
    pub fn is_external(&self) -> bool {
        EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| self.target.starts_with(scheme))
    }
}

pub fn extract_links(content: &str) -> Vec<Link> {
    markdown_link()
        .captures_iter(content)
        .map(|caps| Link {
            text: caps[1].to_string(),
            target: caps[2].to_string(),
        })
        .collect()
}

pub struct InternalLinksCheck;

impl Check for InternalLinksCheck {
    fn name(&self) -> &'static str {
        "internal_links"
    }

    fn max_points(&self) -> Points {
        5
    }

    fn detail_key(&self) -> Option<&'static str> {
        Some("links")
    }

    fn evaluate(&self, content: &str, _params: &AuditParams) -> CheckResult {
        let mut result = CheckResult::empty();
        let (external, internal): (Vec<Link>, Vec<Link>) = extract_links(content)
            .into_iter()
            .partition(Link::is_external);

        result.detail("internal_links", internal.len());
        result.detail("external_links", external.len());

        match internal.len() {
            count if count >= WELL_LINKED => result.award(5),
            0 => result.suggest("No internal links; add 3-5 links to related articles."),
            count => {
                result.award(3);
                result.suggest(format!(
                    "Only {count} internal link(s); aim for 3-5 related links."
                ));
            }
        }

        result
    }
}
