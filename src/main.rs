mod analyze;
mod cli;
mod config;
mod error;
mod generator;
mod report;
mod scan;
mod types;

use crate::error::AuditError;
use crate::types::config::ReportFormatSetting;
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NEEDS_IMPROVEMENT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geo_audit={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(
    flag: Option<cli::ReportFormat>,
    configured: Option<ReportFormatSetting>,
) -> report::OutputFormat {
    match (flag, configured) {
        (Some(cli::ReportFormat::Json), _) => report::OutputFormat::Json,
        (Some(cli::ReportFormat::Md), _) => report::OutputFormat::Md,
        (Some(cli::ReportFormat::Text), _) => report::OutputFormat::Text,
        (Some(cli::ReportFormat::Sarif), _) => report::OutputFormat::Sarif,
        (None, Some(ReportFormatSetting::Json)) => report::OutputFormat::Json,
        (None, Some(ReportFormatSetting::Md)) => report::OutputFormat::Md,
        (None, Some(ReportFormatSetting::Sarif)) => report::OutputFormat::Sarif,
        (None, Some(ReportFormatSetting::Text)) | (None, None) => report::OutputFormat::Text,
    }
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Audit(cmd) => {
            if !cmd.path.exists() {
                return Err(AuditError::InputUnavailable(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(&config::config_root(&cmd.path))?;
            if loaded.is_none() {
                info!("no {} found; using defaults", config::DEFAULT_CONFIG_FILE);
            }
            let extensions = loaded.clone().unwrap_or_default().extensions();
            let brand = cmd
                .brand
                .clone()
                .or_else(|| loaded.as_ref().and_then(|cfg| cfg.brand()).map(str::to_string));
            if brand.as_deref() == Some("") {
                warn!("empty --brand given; brand binding will not be scored");
            }

            let documents = scan::input::collect_documents(&cmd.path, &extensions)?;
            let params = analyze::AuditParams::with_brand(brand.as_deref());
            let audit_report =
                report::build_report(&analyze::Auditor::default(), &documents, &params);

            let format = output_format(
                cmd.format,
                loaded.as_ref().and_then(|cfg| cfg.report_format()),
            );
            let options = report::RenderOptions {
                summary_only: cmd.summary
                    || loaded.as_ref().map(|cfg| cfg.summary_only()).unwrap_or(false),
            };
            let rendered = report::render(&audit_report, format, options)?;
            println!("{rendered}");

            if audit_report.all_passed() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::NEEDS_IMPROVEMENT)
            }
        }
        cli::Commands::Schema(cmd) => {
            let loaded = config::load_config(std::path::Path::new("."))?;
            let today = Local::now().date_naive();
            let rendered = generator::execute_schema(&cmd, loaded.as_ref(), today)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
