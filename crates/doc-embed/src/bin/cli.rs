//! doc-embed command line
//!
//! Run with: cargo run -p doc-embed -- <command>

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doc_embed::chain::presets::{
    day_planner, prompt_refinery, DAY_PLANNER_INPUTS, PROMPT_REFINERY_INPUTS,
};
use doc_embed::providers::{EmbeddingProvider, LlmProvider, OllamaEmbedder, OllamaLlm};
use doc_embed::{DayPart, DocEmbedConfig, DocumentEmbedder, OllamaClient};

#[derive(Parser)]
#[command(name = "doc-embed", version, about = "Paragraph embeddings and persona chains over a local Ollama server")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the Ollama server is reachable
    Health,
    /// Extract a PDF and embed every paragraph
    Extract {
        /// Path to the PDF document
        pdf: PathBuf,
        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Plan the day and write a greeting for the current local time
    Greet {
        /// Name to greet
        #[arg(long)]
        name: String,
    },
    /// Assemble a structured prompt and refine it
    Prompt {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        role_context: String,
        #[arg(long)]
        objective: String,
        #[arg(long)]
        task: String,
        #[arg(long)]
        specifications: String,
        #[arg(long)]
        expected_output: String,
        #[arg(long)]
        constraints: String,
        /// Target complexity level, 1-10
        #[arg(long)]
        complexity: String,
        #[arg(long)]
        temperature: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_embed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DocEmbedConfig::from_file(path)?,
        None => DocEmbedConfig::default(),
    };

    match cli.command {
        Command::Health => health(&config).await,
        Command::Extract { pdf, json } => extract(&config, &pdf, json).await,
        Command::Greet { name } => greet(&config, &name).await,
        Command::Prompt {
            topic,
            role_context,
            objective,
            task,
            specifications,
            expected_output,
            constraints,
            complexity,
            temperature,
        } => {
            let values = [
                topic,
                role_context,
                objective,
                task,
                specifications,
                expected_output,
                constraints,
                complexity,
                temperature,
            ];
            prompt(&config, values).await
        }
    }
}

async fn health(config: &DocEmbedConfig) -> anyhow::Result<()> {
    let client = OllamaClient::new(&config.llm);

    if client.health_check().await? {
        println!("Ollama is running at {}", client.base_url());
        Ok(())
    } else {
        println!("Cannot reach Ollama at {}", client.base_url());
        println!("  1. Start the server: ollama serve");
        println!(
            "  2. Pull the models: ollama pull {} && ollama pull {}",
            config.llm.embed_model, config.llm.generate_model
        );
        anyhow::bail!("Ollama not running")
    }
}

async fn extract(config: &DocEmbedConfig, pdf: &PathBuf, json: bool) -> anyhow::Result<()> {
    let provider = Arc::new(OllamaEmbedder::new(&config.llm));
    let dimensions = provider.dimensions();
    let embedder = DocumentEmbedder::new(provider, &config.extraction);

    let document = embedder.extract(pdf).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("Document: {}", pdf.display());
        if let Some(pages) = document.total_pages {
            println!("Pages: {}", pages);
        }
        println!("Content hash: {}", document.content_hash);
        println!("Paragraphs: {}", document.paragraphs.len());
        println!(
            "Embeddings: {} x {} dimensions",
            document.embeddings.len(),
            document
                .embeddings
                .first()
                .map(|e| e.len())
                .unwrap_or(dimensions)
        );
    }

    Ok(())
}

async fn greet(config: &DocEmbedConfig, name: &str) -> anyhow::Result<()> {
    let llm = ensure_llm(config).await?;

    let now = Local::now();
    let values = [
        name.to_string(),
        now.format("%d/%m/%Y").to_string(),
        now.format("%H:%M:%S").to_string(),
        DayPart::now().label().to_string(),
    ];
    let inputs = seed_inputs(DAY_PLANNER_INPUTS, values);

    let outputs = day_planner(llm).run(&inputs).await?;
    print_final(&outputs);
    Ok(())
}

async fn prompt(config: &DocEmbedConfig, values: [String; 9]) -> anyhow::Result<()> {
    let llm = ensure_llm(config).await?;
    let inputs = seed_inputs(PROMPT_REFINERY_INPUTS, values);

    let outputs = prompt_refinery(llm).run(&inputs).await?;
    print_final(&outputs);
    Ok(())
}

/// Build the LLM provider, refusing to start a chain against a dead server
async fn ensure_llm(config: &DocEmbedConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let llm = OllamaLlm::new(&config.llm);
    if !llm.health_check().await? {
        anyhow::bail!(
            "Ollama is not reachable at {}; start it with 'ollama serve'",
            config.llm.base_url
        );
    }
    Ok(Arc::new(llm))
}

fn seed_inputs<const N: usize>(keys: &[&str], values: [String; N]) -> HashMap<String, String> {
    keys.iter()
        .map(|key| key.to_string())
        .zip(values)
        .collect()
}

fn print_final(outputs: &[doc_embed::chain::StepOutput]) {
    if let Some(last) = outputs.last() {
        println!("Final result ({}):", last.title);
        println!("{}", last.output);
    }
}
