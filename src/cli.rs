use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "geo-audit",
    version,
    about = "Generative engine optimization (GEO) content audit CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score Markdown content for answer-engine readiness
    Audit(AuditCommand),
    /// Generate JSON-LD structured data
    Schema(SchemaCommand),
}

#[derive(Args)]
pub struct AuditCommand {
    /// Markdown file, or a directory to audit recursively
    pub path: PathBuf,
    /// Brand name that the content should be bound to
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Print only the score and issues
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
    Sarif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaType {
    Article,
    Faq,
    Howto,
    Breadcrumb,
    Combined,
}

#[derive(Args)]
pub struct SchemaCommand {
    #[arg(long = "type", value_enum)]
    pub kind: SchemaType,
    /// JSON file for --type combined
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    /// Organization or Person
    #[arg(long)]
    pub author_type: Option<String>,
    #[arg(long)]
    pub author_url: Option<String>,
    #[arg(long)]
    pub publisher: Option<String>,
    #[arg(long)]
    pub publisher_logo: Option<String>,
    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,
    /// Canonical URL
    #[arg(long)]
    pub url: Option<String>,
    /// Publish date (YYYY-MM-DD)
    #[arg(long)]
    pub date_published: Option<String>,
    /// Modified date (YYYY-MM-DD)
    #[arg(long)]
    pub date_modified: Option<String>,
    /// Primary entity name
    #[arg(long)]
    pub entity: Option<String>,
    /// Comma-separated secondary entities
    #[arg(long)]
    pub secondary_entities: Option<String>,
    /// JSON file with FAQs, how-to steps or breadcrumbs
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}
