pub mod schema;

use crate::cli::{SchemaCommand, SchemaType};
use crate::error::{AuditError, Result};
use crate::types::config::AuditConfig;
use chrono::NaiveDate;
use schema::{ArticleInput, BreadcrumbInput, CombinedInput, FaqInput, HowToInput, HowToStepInput};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A how-to input file: either a bare step list or an object with `steps`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HowToFile {
    Steps(Vec<HowToStepInput>),
    Document {
        steps: Option<Vec<HowToStepInput>>,
        #[serde(rename = "totalTime")]
        total_time: Option<String>,
        tools: Option<Vec<String>>,
        supplies: Option<Vec<String>>,
    },
}

pub fn execute_schema(
    cmd: &SchemaCommand,
    config: Option<&AuditConfig>,
    today: NaiveDate,
) -> Result<String> {
    let defaults = config.and_then(|cfg| cfg.schema.as_ref());
    debug!(kind = ?cmd.kind, "generating schema");

    match cmd.kind {
        SchemaType::Article => {
            let input = ArticleInput {
                title: cmd.title.clone(),
                description: cmd.description.clone(),
                author_name: cmd.author.clone(),
                author_type: cmd.author_type.clone(),
                author_url: cmd.author_url.clone(),
                publisher_name: cmd.publisher.clone(),
                publisher_logo: cmd.publisher_logo.clone(),
                image_url: cmd.image.clone(),
                date_published: cmd.date_published.clone(),
                date_modified: cmd.date_modified.clone(),
                canonical_url: cmd.url.clone(),
                primary_entity: cmd.entity.clone(),
                secondary_entities: cmd.secondary_entities.as_deref().map(split_entities),
            }
            .with_defaults(defaults);
            to_output(&schema::article(input, today)?, cmd.pretty)
        }
        SchemaType::Faq => {
            let faqs: Vec<FaqInput> = read_json(required_path(&cmd.input, "--input")?)?;
            to_output(&schema::faq(faqs)?, cmd.pretty)
        }
        SchemaType::Howto => {
            let file: HowToFile = read_json(required_path(&cmd.input, "--input")?)?;
            let input = match file {
                HowToFile::Steps(steps) => HowToInput {
                    steps: Some(steps),
                    ..HowToInput::default()
                },
                HowToFile::Document {
                    steps,
                    total_time,
                    tools,
                    supplies,
                } => HowToInput {
                    steps,
                    total_time,
                    tools,
                    supplies,
                    ..HowToInput::default()
                },
            };
            let input = HowToInput {
                title: cmd.title.clone(),
                description: cmd.description.clone(),
                image_url: cmd.image.clone(),
                ..input
            };
            to_output(&schema::howto(input)?, cmd.pretty)
        }
        SchemaType::Breadcrumb => {
            let items: Vec<BreadcrumbInput> = read_json(required_path(&cmd.input, "--input")?)?;
            to_output(&schema::breadcrumbs(items)?, cmd.pretty)
        }
        SchemaType::Combined => {
            let mut input: CombinedInput = read_json(required_path(&cmd.config, "--config")?)?;
            input.article = input.article.map(|article| article.with_defaults(defaults));
            to_output(&schema::combined(input, today)?, cmd.pretty)
        }
    }
}

fn split_entities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entity| !entity.is_empty())
        .map(str::to_string)
        .collect()
}

fn required_path<'a>(path: &'a Option<std::path::PathBuf>, flag: &str) -> Result<&'a Path> {
    path.as_deref()
        .ok_or_else(|| AuditError::MissingField(flag.to_string()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AuditError::InputUnavailable(format!("{}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&raw)?)
}

fn to_output<T: Serialize>(schema: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(schema)?
    } else {
        serde_json::to_string(schema)?
    };
    Ok(rendered)
}
