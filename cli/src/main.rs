//! CLI entrypoint for eli
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use eli_application::{RequestParams, RunExplainUseCase};
use eli_domain::{Age, Session, ShareLink, Tone};
use eli_infrastructure::{ConfigLoader, FileAuditSink, FileConfig, OpenAiGateway};
use eli_presentation::{AppState, Cli, ConsoleFormatter, SessionStore, Spinner, router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // === Dependency Injection ===
    let Some(api_key) = config.openai.resolve_api_key() else {
        bail!(
            "No API key found. Set the {} environment variable (or [openai].api_key in the config file).",
            config.openai.api_key_env
        );
    };
    let gateway = Arc::new(OpenAiGateway::with_base_url(api_key, &config.openai.base_url));

    let mut use_case = RunExplainUseCase::new(gateway);
    if config.audit.enabled
        && let Some(sink) = FileAuditSink::new(&config.audit.path)
    {
        info!("Audit log: {}", sink.path().display());
        use_case = use_case.with_audit_sink(Arc::new(sink));
    }

    let params = config.request_params();

    // One-shot mode - a question was given on the command line
    if let Some(question) = cli.question.clone() {
        return run_one_shot(&cli, question, use_case, params, &config).await;
    }

    serve(cli.bind, config, use_case, params).await
}

/// Explain one question in the terminal and exit.
async fn run_one_shot(
    cli: &Cli,
    question: String,
    use_case: RunExplainUseCase,
    params: RequestParams,
    config: &FileConfig,
) -> Result<()> {
    let tone: Tone = cli.tone.parse()?;

    let mut session = Session::new();
    session.set_input_text(question);
    session.set_age(Age::clamped(i64::from(cli.age)));
    session.set_tone(tone);

    let spinner = (!cli.quiet).then(Spinner::thinking);
    let result = use_case.execute(&mut session, &params).await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }
    result?;

    if let Some(entry) = session.history().first() {
        print!("{}", ConsoleFormatter::format(entry));
    }

    if cli.share {
        let base = config
            .share
            .base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}/", config.server.bind));
        print!(
            "{}",
            ConsoleFormatter::format_share_link(&ShareLink::build(&session, &base))
        );
    }

    Ok(())
}

/// Start the single-page web tool.
async fn serve(
    bind_override: Option<String>,
    config: FileConfig,
    use_case: RunExplainUseCase,
    params: RequestParams,
) -> Result<()> {
    let bind = bind_override.unwrap_or_else(|| config.server.bind.clone());

    let state = AppState {
        use_case: Arc::new(use_case),
        params: Arc::new(params),
        share_base_url: config.share.base_url.clone(),
        sessions: SessionStore::new(),
    };

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    info!("Serving on http://{}", bind);
    println!("eli listening on http://{}", bind);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
