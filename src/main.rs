//! DeepDoc command line: serve the analysis API or analyze one report.

use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use deepdoc::api::start_server;
use deepdoc::config::{self, ServerConfig};
use deepdoc::pipeline::extraction::{analyze_report, ExtractionOptions};

#[derive(Parser)]
#[command(name = "deepdoc")]
#[command(about = "Extract and explain lab values from OCR'd medical reports")]
#[command(version)]
struct Cli {
    /// JSON parameter catalog replacing the built-in one
    #[arg(long, global = true, env = "DEEPDOC_CATALOG")]
    catalog: Option<PathBuf>,

    /// Fuzzy-correct OCR misspellings of parameter names before matching
    #[arg(long, global = true)]
    correct_terms: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP analysis API
    Serve {
        /// Address to listen on
        #[arg(long, env = "DEEPDOC_BIND", default_value = config::DEFAULT_BIND_ADDR)]
        bind: SocketAddr,

        /// Allowed CORS origin (repeatable; "*" allows any)
        #[arg(
            long = "allowed-origin",
            env = "DEEPDOC_ALLOWED_ORIGINS",
            value_delimiter = ',',
            default_value = config::DEFAULT_ALLOWED_ORIGIN
        )]
        allowed_origins: Vec<String>,

        /// Maximum request body size in bytes
        #[arg(long, env = "DEEPDOC_MAX_BODY_BYTES", default_value_t = config::DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },

    /// Analyze one OCR text file and print the result as JSON
    Analyze {
        /// Text file to analyze ("-" reads stdin)
        input: PathBuf,

        /// Gender hint: male or female
        #[arg(short, long)]
        gender: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deepdoc::init_tracing();

    let cli = Cli::parse();
    let options = ExtractionOptions {
        correct_terms: cli.correct_terms,
    };

    match cli.command {
        Commands::Serve {
            bind,
            allowed_origins,
            max_body_bytes,
        } => {
            let server_config = ServerConfig {
                bind_addr: bind,
                allowed_origins,
                max_body_bytes,
                catalog_path: cli.catalog,
                extraction: options,
            };
            serve(server_config).await
        }
        Commands::Analyze { input, gender } => {
            analyze(&input, gender.as_deref(), cli.catalog.as_deref(), options)
        }
    }
}

async fn serve(server_config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let catalog = server_config
        .load_catalog()
        .context("failed to load parameter catalog")?;
    let mut server = start_server(&server_config, catalog).await?;

    println!("Listening on http://{}", server.session.server_addr);

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    server.shutdown();
    server.wait().await;
    Ok(())
}

fn analyze(
    input: &Path,
    gender: Option<&str>,
    catalog_path: Option<&Path>,
    options: ExtractionOptions,
) -> anyhow::Result<()> {
    let catalog = config::load_catalog(catalog_path).context("failed to load parameter catalog")?;

    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?
    };
    let text = String::from_utf8_lossy(&bytes);

    let analysis = analyze_report(&catalog, &text, gender, options);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
