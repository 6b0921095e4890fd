mod clipboard;
mod notify;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use antiabuse::BypassTokenSource;
use clap::{Parser, Subcommand};
use colored::Colorize;
use llm::OpenRouterGenerator;
use orchestrator::{Clipboard, Workspace};
use promptcraft_core::{RefinementRequest, SuggestionRequest};
use server::config::{AppConfig, CONFIG_DIR, CONFIG_FILE};
use server::{create_router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::clipboard::{ArboardClipboard, DisabledClipboard};
use crate::notify::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "promptcraft")]
#[command(about = "Refine short prompt ideas into detailed prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to .promptcraft/config.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Run the HTTP API
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,

        /// Built front end to serve for unmatched paths
        #[arg(long)]
        app_dir: Option<PathBuf>,
    },
    /// Refine a prompt idea
    Refine {
        idea: String,

        #[arg(long)]
        style: Option<String>,

        #[arg(long)]
        length: Option<String>,

        #[arg(long)]
        tone: Option<String>,

        /// Do not copy the result to the clipboard
        #[arg(long)]
        no_copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest style, length and tone for a basic prompt
    Suggest {
        basic_prompt: String,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::path_in(&std::env::current_dir()?),
    };

    match cli.command {
        Some(Commands::Init) => init_config(&config_path).await,
        Some(Commands::Serve {
            port,
            host,
            app_dir,
        }) => serve(&config_path, port, host, app_dir).await,
        Some(Commands::Refine {
            idea,
            style,
            length,
            tone,
            no_copy,
            json,
        }) => {
            let request = RefinementRequest {
                idea_text: idea,
                style,
                length,
                tone,
            };
            refine(&config_path, request, no_copy, json).await
        }
        Some(Commands::Suggest { basic_prompt, json }) => {
            suggest(&config_path, basic_prompt, json).await
        }
        None => serve(&config_path, None, None, None).await,
    }
}

async fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    AppConfig::default()
        .write(config_path)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!();
    println!("Initialized Promptcraft");
    println!();
    println!("Created:");
    println!("  {}/", CONFIG_DIR);
    println!("  └── {}", CONFIG_FILE);
    println!();
    println!("Next steps:");
    println!("  1. Set OPENROUTER_API_KEY or add llm.api_key to the config");
    println!("  2. Run 'promptcraft serve' to start the server");

    Ok(())
}

async fn load_config(config_path: &Path) -> AppConfig {
    AppConfig::read(config_path).await.with_env_overrides()
}

async fn serve(
    config_path: &Path,
    port: Option<u16>,
    host: Option<String>,
    app_dir: Option<PathBuf>,
) -> Result<()> {
    init_tracing();

    let mut config = load_config(config_path).await;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    if app_dir.is_some() {
        config.server.app_dir = app_dir;
    }

    let state = AppState::from_config(&config).context("Failed to initialize application state")?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Model: {}", config.llm.model);
    tracing::info!("Anti-abuse verification: {}", config.anti_abuse.enabled);

    println!();
    println!("Promptcraft");
    println!("════════════════════════════════════════");
    println!();
    println!("  API Server:  http://{}", addr);
    println!("  Swagger UI:  http://{}/swagger-ui", addr);
    if let Some(app_dir) = &config.server.app_dir {
        println!("  Frontend:    {}", app_dir.display());
    }
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}

fn workspace_for(config: &AppConfig, no_copy: bool) -> Result<Workspace> {
    // The CLI always bypasses the challenge, so only the model client is needed.
    let generator =
        OpenRouterGenerator::new(&config.llm).context("Failed to initialize model client")?;
    let clipboard: Box<dyn Clipboard> = if no_copy {
        Box::new(DisabledClipboard)
    } else {
        Box::new(ArboardClipboard)
    };
    Ok(Workspace::new(
        Arc::new(generator),
        clipboard,
        Arc::new(ConsoleNotifier),
    ))
}

async fn refine(
    config_path: &Path,
    request: RefinementRequest,
    no_copy: bool,
    json: bool,
) -> Result<()> {
    init_tracing();

    let config = load_config(config_path).await;
    let mut workspace = workspace_for(&config, no_copy)?;

    // No browser here to run a challenge in.
    let refined = workspace.submit(request, &BypassTokenSource).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "refined_prompt": refined }))?
        );
    } else {
        println!("{}", refined);
    }

    Ok(())
}

async fn suggest(config_path: &Path, basic_prompt: String, json: bool) -> Result<()> {
    init_tracing();

    let config = load_config(config_path).await;
    let mut workspace = workspace_for(&config, true)?;

    let suggestion = workspace
        .suggest(SuggestionRequest::new(basic_prompt), &BypassTokenSource)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!();
        println!("  {}  {}", "Style: ".bold(), suggestion.suggested_style);
        println!("  {}  {}", "Length:".bold(), suggestion.suggested_length);
        println!("  {}  {}", "Tone:  ".bold(), suggestion.suggested_tone);
        println!();
        println!("  {}", suggestion.reasoning.dimmed());
        println!();
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "promptcraft=info,server=info,orchestrator=info,tower_http=info".into()
            }),
        )
        .init();
}
