// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docsim::utils::logging::{format_error, format_rank, format_success};
use docsim::{
    AnalysisPipeline, Config, DuckDuckGoClient, SentenceEmbedder, SourceType, UploadedDocument,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docsim")]
#[command(version = "0.1.0")]
#[command(about = "Document similarity checking service", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP analysis server
    Serve {
        /// Override the configured bind address
        #[arg(long, value_name = "ADDR:PORT")]
        bind: Option<String>,
    },

    /// Compare documents on disk without going through HTTP
    Analyze {
        /// Source document path
        source: PathBuf,

        /// Comparison document paths
        comparisons: Vec<PathBuf>,

        /// Also search the web for matching content
        #[arg(long)]
        web: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docsim::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Document similarity service");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { bind } => {
            cmd_serve(&config, bind).await?;
        }
        Commands::Analyze {
            source,
            comparisons,
            web,
        } => {
            cmd_analyze(&config, source, comparisons, web).await?;
        }
    }

    Ok(())
}

fn build_pipeline(config: &Config) -> Result<Arc<AnalysisPipeline>> {
    let embedder =
        SentenceEmbedder::new(&config.embedding).context("Failed to load embedding model")?;
    let search =
        DuckDuckGoClient::new(&config.search).context("Failed to build search client")?;

    Ok(Arc::new(AnalysisPipeline::new(
        Arc::new(embedder),
        Arc::new(search),
    )))
}

async fn cmd_serve(config: &Config, bind_override: Option<String>) -> Result<()> {
    let pipeline = build_pipeline(config)?;
    let bind = bind_override.unwrap_or_else(|| config.server.bind.clone());
    let app = docsim::server::router(pipeline, config.server.max_upload_mb);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;

    info!("Listening on {}", bind);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn cmd_analyze(
    config: &Config,
    source: PathBuf,
    comparisons: Vec<PathBuf>,
    web: bool,
) -> Result<()> {
    let pipeline = build_pipeline(config)?;

    let source_doc = read_document(&source)?;
    let comparison_docs = comparisons
        .iter()
        .map(|path| read_document(path))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Comparing {} against {} file(s)",
        source.display(),
        comparison_docs.len()
    );

    let results = match pipeline.analyze(source_doc, comparison_docs, web).await {
        Ok(results) => results,
        Err(docsim::ServiceError::EmptySource) => {
            println!("{}", format_error("Source file is empty."));
            return Ok(());
        }
        Err(e) => return Err(e).context("Analysis failed"),
    };

    if results.is_empty() {
        println!("No comparable content found.");
        return Ok(());
    }

    println!("{}", format_success("Analysis complete"));
    println!();

    for (idx, result) in results.iter().enumerate() {
        let origin = match result.source_type {
            SourceType::LocalFile => "local",
            SourceType::Internet => "web",
        };
        println!(
            "{}",
            format_rank(
                idx + 1,
                &format!(
                    "{} ({origin}) {:.2}%",
                    result.filename, result.similarity_score
                )
            )
        );
        for matched in &result.matches {
            println!("     \"{matched}\"");
        }
    }

    Ok(())
}

fn read_document(path: &PathBuf) -> Result<UploadedDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadedDocument::new(filename, bytes))
}
