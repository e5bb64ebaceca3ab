// Command-line auto-fill: scrape a URL and print the filled form as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use records::{PartialRecord, RecordKind};
use scrape_client::{FormState, ScrapeClient, ScrapeForm, ScrapeOutcome, DEFAULT_SERVICE_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scrape", about = "Auto-fill an event or opportunity record from a webpage")]
struct Cli {
    /// Page to extract from
    url: String,

    /// Record kind: "event" or "opportunity"
    #[arg(short, long, default_value = "event")]
    kind: RecordKind,

    /// Base URL of the scrape service
    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    server: String,

    /// JSON file with the current form values to merge into
    #[arg(long)]
    form: Option<PathBuf>,

    /// Print the save payload (nulls for empty values, content hash) instead of the form
    #[arg(long)]
    payload: bool,
}

fn load_form(kind: RecordKind, path: Option<&PathBuf>) -> Result<FormState> {
    let Some(path) = path else {
        return Ok(FormState::new(kind));
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file {}", path.display()))?;
    let fields: PartialRecord =
        serde_json::from_str(&text).context("Form file must contain a JSON object")?;

    Ok(FormState::from_fields(kind, fields))
}

/// The form as edited, or the object that would be saved.
fn render(form: &FormState, payload: bool) -> Result<PartialRecord> {
    if payload {
        Ok(form.save_payload()?)
    } else {
        Ok(form.fields().clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,scrape_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = ScrapeClient::new(&cli.server);
    let mut form = load_form(cli.kind, cli.form.as_ref())?;
    let mut tool = ScrapeForm::new(cli.kind);
    tool.set_url(&cli.url);

    match tool.submit(&client, &mut form).await {
        ScrapeOutcome::Filled { updated } => {
            tracing::info!(fields = ?updated, "Updated form fields");
        }
        ScrapeOutcome::Failed { message } => anyhow::bail!(message),
        ScrapeOutcome::Busy => anyhow::bail!("A scrape is already in progress"),
    }

    let output = render(&form, cli.payload)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
