use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::llm_client::{self, LlmClient};
use resume_parser::scoring::{analyze_job_description, match_skills, rank_candidates};
use resume_parser::{CandidateRecord, LlmExtractor, ResumeParser};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Extract candidate fields from a resume PDF and score them")]
struct Cli {
    /// Resume PDFs to parse; several are printed as a ranked array
    #[arg(required = true)]
    pdf_paths: Vec<PathBuf>,

    /// Gemini API key; overrides GEMINI_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Comma-separated required skills, e.g. "python, docker"
    #[arg(long)]
    job_requirements: Option<String>,

    /// Job description file to derive required skills from
    #[arg(long)]
    job_description: Option<PathBuf>,

    /// Print the record as a single JSON line
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // stdout carries the JSON record, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_parser={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let parser = build_parser(&cli, &config);
    let requirements = job_requirements(&cli).await?;

    let mut records = Vec::with_capacity(cli.pdf_paths.len());
    for path in &cli.pdf_paths {
        records.push(parse_one(&parser, path, requirements.as_deref()).await);
    }

    let required = requirements.as_deref().filter(|reqs| !reqs.is_empty());
    let output = if let [record] = records.as_slice() {
        to_json(record, cli.compact)?
    } else if let Some(required) = required {
        to_json(&rank_candidates(&records, required), cli.compact)?
    } else {
        records.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        to_json(&records, cli.compact)?
    };
    println!("{output}");

    Ok(())
}

async fn parse_one(
    parser: &ResumeParser,
    path: &Path,
    requirements: Option<&[String]>,
) -> CandidateRecord {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = parser.parse_resume(path, &filename, requirements).await;

    if let Some(required) = requirements.filter(|reqs| !reqs.is_empty()) {
        let report = match_skills(&record.skills, required);
        info!(
            file = %filename,
            coverage = report.match_score,
            matched = ?report.matched,
            missing = ?report.missing,
            "Skill match"
        );
    }
    record
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    Ok(if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    })
}

/// LLM-first when a key is available, heuristic-only otherwise.
fn build_parser(cli: &Cli, config: &Config) -> ResumeParser {
    let parser = ResumeParser::new();
    let Some(api_key) = cli.api_key.clone().or_else(|| config.gemini_api_key.clone()) else {
        info!("No Gemini API key configured, using heuristic extraction only");
        return parser;
    };

    match LlmClient::new(api_key, Duration::from_secs(config.llm_timeout_secs)) {
        Ok(llm) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            parser.with_primary(Arc::new(LlmExtractor::new(llm)))
        }
        Err(e) => {
            warn!("Could not build LLM client, using heuristic extraction only: {e}");
            parser
        }
    }
}

async fn job_requirements(cli: &Cli) -> Result<Option<Vec<String>>> {
    if let Some(list) = &cli.job_requirements {
        return Ok(Some(split_requirements(list)));
    }

    let Some(path) = &cli.job_description else {
        return Ok(None);
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading job description {}", path.display()))?;
    let profile = analyze_job_description(&text);
    info!(
        skills = ?profile.skills,
        level = ?profile.experience_level,
        education_required = profile.education_required,
        remote = profile.remote_option,
        "Job description analyzed"
    );
    Ok(Some(profile.skills))
}

fn split_requirements(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
