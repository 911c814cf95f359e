//! JSON-LD structured data for articles, FAQs, how-tos and breadcrumbs.
//!
//! Inputs deserialize into all-optional structs so that a missing required
//! field is reported by name instead of as a generic parse error.

use crate::error::{AuditError, Result};
use crate::types::config::{is_supported_author_type, SchemaSection, AUTHOR_TYPES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
const HEADLINE_LIMIT: usize = 110;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub author_type: Option<String>,
    pub author_url: Option<String>,
    pub publisher_name: Option<String>,
    pub publisher_logo: Option<String>,
    pub image_url: Option<String>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub canonical_url: Option<String>,
    pub primary_entity: Option<String>,
    pub secondary_entities: Option<Vec<String>>,
}

impl ArticleInput {
    /// Fills unset author and publisher fields from `[schema]` config.
    pub fn with_defaults(mut self, defaults: Option<&SchemaSection>) -> Self {
        if let Some(defaults) = defaults {
            self.author_name = self.author_name.or_else(|| defaults.author.clone());
            self.author_type = self.author_type.or_else(|| defaults.author_type.clone());
            self.author_url = self.author_url.or_else(|| defaults.author_url.clone());
            self.publisher_name = self.publisher_name.or_else(|| defaults.publisher.clone());
            self.publisher_logo = self
                .publisher_logo
                .or_else(|| defaults.publisher_logo.clone());
        }
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqInput {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HowToStepInput {
    pub name: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HowToInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<HowToStepInput>>,
    pub total_time: Option<String>,
    pub image_url: Option<String>,
    pub tools: Option<Vec<String>>,
    pub supplies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreadcrumbInput {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CombinedInput {
    pub article: Option<ArticleInput>,
    pub faqs: Option<Vec<FaqInput>>,
    pub breadcrumbs: Option<Vec<BreadcrumbInput>>,
    pub howto: Option<HowToInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Named {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl Named {
    fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub author: Author,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_published: String,
    pub date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Named>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Named>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowTo {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub step: Vec<HowToStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<Vec<Named>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Vec<Named>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Article(Article),
    FaqPage(FaqPage),
    HowTo(HowTo),
    BreadcrumbList(BreadcrumbList),
}

impl SchemaNode {
    /// Drops `@context`, which only the enclosing graph carries.
    fn into_graph_member(self) -> Self {
        match self {
            Self::Article(node) => Self::Article(Article {
                context: None,
                ..node
            }),
            Self::FaqPage(node) => Self::FaqPage(FaqPage {
                context: None,
                ..node
            }),
            Self::HowTo(node) => Self::HowTo(HowTo {
                context: None,
                ..node
            }),
            Self::BreadcrumbList(node) => Self::BreadcrumbList(BreadcrumbList {
                context: None,
                ..node
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: Vec<SchemaNode>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn non_empty_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values.filter(|values| !values.is_empty())
}

fn require(value: Option<String>, field: &str) -> Result<String> {
    non_empty(value).ok_or_else(|| AuditError::MissingField(field.to_string()))
}

fn validate_date(value: Option<String>, field: &str) -> Result<Option<String>> {
    match non_empty(value) {
        Some(date) => NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map(|_| Some(date.clone()))
            .map_err(|e| AuditError::InvalidArgument(format!("{field} '{date}': {e}"))),
        None => Ok(None),
    }
}

fn validate_author_type(value: Option<String>) -> Result<String> {
    match non_empty(value) {
        Some(kind) if is_supported_author_type(&kind) => Ok(kind),
        Some(kind) => Err(AuditError::InvalidArgument(format!(
            "author_type '{kind}': expected one of {}",
            AUTHOR_TYPES.join(", ")
        ))),
        None => Ok(AUTHOR_TYPES[0].to_string()),
    }
}

pub fn article(input: ArticleInput, today: NaiveDate) -> Result<Article> {
    let title = require(input.title, "title")?;
    let description = require(input.description, "description")?;
    let author_name = require(input.author_name, "author_name")?;
    let author_type = validate_author_type(input.author_type)?;
    let date_published = validate_date(input.date_published, "date_published")?;
    let date_modified = validate_date(input.date_modified, "date_modified")?;

    let today = today.format(DATE_FORMAT).to_string();
    let published = date_published.unwrap_or_else(|| today.clone());
    let modified = date_modified.unwrap_or_else(|| published.clone());

    Ok(Article {
        context: Some(SCHEMA_CONTEXT),
        kind: "Article",
        headline: title.chars().take(HEADLINE_LIMIT).collect(),
        description,
        author: Author {
            kind: author_type,
            name: author_name,
            url: non_empty(input.author_url),
        },
        publisher: non_empty(input.publisher_name).map(|name| Publisher {
            kind: "Organization",
            name,
            logo: non_empty(input.publisher_logo).map(|url| ImageObject {
                kind: "ImageObject",
                url,
            }),
        }),
        image: non_empty(input.image_url),
        date_published: published,
        date_modified: modified,
        main_entity_of_page: non_empty(input.canonical_url).map(|id| WebPage {
            kind: "WebPage",
            id,
        }),
        about: non_empty(input.primary_entity).map(|name| Named::new("Thing", name)),
        mentions: non_empty_list(input.secondary_entities).map(|entities| {
            entities
                .into_iter()
                .map(|name| Named::new("Thing", name))
                .collect()
        }),
    })
}

pub fn faq(faqs: Vec<FaqInput>) -> Result<FaqPage> {
    let main_entity = faqs
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Ok(Question {
                kind: "Question",
                name: require(entry.question, &format!("faqs[{index}].question"))?,
                accepted_answer: Answer {
                    kind: "Answer",
                    text: require(entry.answer, &format!("faqs[{index}].answer"))?,
                },
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FaqPage {
        context: Some(SCHEMA_CONTEXT),
        kind: "FAQPage",
        main_entity,
    })
}

pub fn howto(input: HowToInput) -> Result<HowTo> {
    let name = require(input.title, "title")?;
    let description = require(input.description, "description")?;
    let steps = input
        .steps
        .ok_or_else(|| AuditError::MissingField("steps".to_string()))?;

    let step = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            Ok(HowToStep {
                kind: "HowToStep",
                name: non_empty(step.name).unwrap_or_else(|| format!("Step {}", index + 1)),
                text: require(step.text, &format!("steps[{index}].text"))?,
                image: non_empty(step.image),
                url: non_empty(step.url),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HowTo {
        context: Some(SCHEMA_CONTEXT),
        kind: "HowTo",
        name,
        description,
        step,
        total_time: non_empty(input.total_time),
        image: non_empty(input.image_url),
        tool: non_empty_list(input.tools).map(|tools| {
            tools
                .into_iter()
                .map(|name| Named::new("HowToTool", name))
                .collect()
        }),
        supply: non_empty_list(input.supplies).map(|supplies| {
            supplies
                .into_iter()
                .map(|name| Named::new("HowToSupply", name))
                .collect()
        }),
    })
}

pub fn breadcrumbs(items: Vec<BreadcrumbInput>) -> Result<BreadcrumbList> {
    let item_list_element = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Ok(ListItem {
                kind: "ListItem",
                position: index + 1,
                name: require(item.name, &format!("breadcrumbs[{index}].name"))?,
                item: require(item.url, &format!("breadcrumbs[{index}].url"))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BreadcrumbList {
        context: Some(SCHEMA_CONTEXT),
        kind: "BreadcrumbList",
        item_list_element,
    })
}

pub fn combined(input: CombinedInput, today: NaiveDate) -> Result<Graph> {
    let mut graph = Vec::new();

    if let Some(article_input) = input.article {
        graph.push(SchemaNode::Article(article(article_input, today)?));
    }
    if let Some(faqs) = input.faqs.filter(|faqs| !faqs.is_empty()) {
        graph.push(SchemaNode::FaqPage(faq(faqs)?));
    }
    if let Some(items) = input.breadcrumbs.filter(|items| !items.is_empty()) {
        graph.push(SchemaNode::BreadcrumbList(breadcrumbs(items)?));
    }
    if let Some(howto_input) = input.howto {
        graph.push(SchemaNode::HowTo(howto(howto_input)?));
    }

    Ok(Graph {
        context: SCHEMA_CONTEXT,
        graph: graph
            .into_iter()
            .map(SchemaNode::into_graph_member)
            .collect(),
    })
}
