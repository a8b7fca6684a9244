use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use subjectnorm::{
    ClassificationPipeline, ClaudeProvider, Config, FallbackClassifier, OpenAIProvider,
    PipelineConfig, ProviderKind, RateLimiter, RunSummary, Storage, SubjectTaxonomy,
};
use subjectnorm::config::parse_delimiter;

#[derive(Parser, Debug)]
#[command(name = "subjectnorm")]
#[command(version = "0.1.0")]
#[command(about = "Assign normalized categories to a table of subject descriptions")]
struct Args {
    /// Input table (defaults to SUBJECTS_INPUT or subjects.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output table (defaults to SUBJECTS_OUTPUT or subjects_normalized.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Send subjects with no keyword match to the remote classifier
    #[arg(long)]
    fallback: bool,

    /// Fallback provider (openai, claude)
    #[arg(long)]
    provider: Option<String>,

    /// Model identifier for the fallback provider
    #[arg(long)]
    model: Option<String>,

    /// Column delimiter for input and output
    #[arg(long)]
    delimiter: Option<String>,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("subjectnorm=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(input) = args.input.clone() {
        config.input_path = input;
    }
    if let Some(output) = args.output.clone() {
        config.output_path = output;
    }
    if args.fallback {
        config.fallback_enabled = true;
    }
    if let Some(ref provider) = args.provider {
        config.provider = provider.parse()?;
    }
    if let Some(ref model) = args.model {
        config.model = Some(model.clone());
    }
    if let Some(ref delimiter) = args.delimiter {
        config.delimiter = parse_delimiter(delimiter)?;
    }
    config.validate()?;

    let fallback = if config.fallback_enabled {
        Some(build_fallback(&config)?)
    } else {
        None
    };

    let mut pipeline_config = PipelineConfig::from(&config);
    pipeline_config.show_progress = !args.no_progress;

    let pipeline = ClassificationPipeline::new(SubjectTaxonomy::new(), fallback, pipeline_config)?;
    let storage = Storage::new(config.delimiter);

    let table = storage.read_table(&config.input_path)?;
    let outcome = pipeline.run(table).await;
    storage.write_table(&config.output_path, &outcome.table)?;

    output_summary(&outcome.summary, &args.format)?;

    Ok(())
}

fn build_fallback(config: &Config) -> anyhow::Result<FallbackClassifier> {
    let api_key = config.api_key()?.to_string();
    let limiter = RateLimiter::new(config.requests_per_minute);

    let classifier = match config.provider {
        ProviderKind::OpenAI => {
            let mut provider = OpenAIProvider::new(api_key, config.model.clone())?
                .with_rate_limiter(limiter);
            if let Some(ref url) = config.openai_base_url {
                provider = provider.with_base_url(url.as_str());
            }
            FallbackClassifier::new(provider)
        }
        ProviderKind::Claude => {
            let mut provider = ClaudeProvider::new(api_key, config.model.clone())?
                .with_rate_limiter(limiter);
            if let Some(ref url) = config.anthropic_base_url {
                provider = provider.with_base_url(url.as_str());
            }
            FallbackClassifier::new(provider)
        }
    };

    tracing::info!("Fallback classification via {}", classifier.provider_name());
    Ok(classifier)
}

fn output_summary(summary: &RunSummary, format: &str) -> anyhow::Result<()> {
    let output = match format {
        "json" => serde_json::to_string_pretty(summary)?,
        _ => format_text(summary),
    };
    println!("{}", output);
    Ok(())
}

fn format_text(summary: &RunSummary) -> String {
    let mut output = String::new();

    output.push_str("\n=== Subject Normalization ===\n\n");
    output.push_str(&format!("Fallback: {}\n", summary.fallback_mode));
    output.push_str(&format!("Rows read: {}\n", summary.input_rows));
    output.push_str(&format!("Rows excluded: {}\n", summary.excluded_rows));
    output.push_str(&format!("Rows written: {}\n", summary.output_rows));
    output.push_str(&format!(
        "Resolved: {} ({:.0}%)\n",
        summary.resolved(),
        summary.coverage() * 100.0
    ));
    output.push_str(&format!("  keyword: {}\n", summary.keyword_matches));
    output.push_str(&format!("  fallback: {}\n", summary.fallback_matches));
    if summary.fallback_failures > 0 {
        output.push_str(&format!(
            "Fallback failures: {}\n",
            summary.fallback_failures
        ));
    }

    if !summary.labels.is_empty() {
        output.push_str("\nCategories:\n");
        for (label, count) in &summary.labels {
            output.push_str(&format!("  {:<8} {}\n", label, count));
        }
    }

    if !summary.unmatched_subjects.is_empty() {
        output.push_str(&format!(
            "\nUnmatched ({}):\n",
            summary.unmatched_subjects.len()
        ));
        for subject in &summary.unmatched_subjects {
            output.push_str(&format!("  - {}\n", subject));
        }
    }

    output.push_str(&format!(
        "\nProcessed on: {}\n",
        summary.processed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
