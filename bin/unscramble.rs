use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use unscramble::api::rate_limit::{self, RateLimitLayer};
use unscramble::api::{create_router, AppState};
use unscramble::{
    AnagramIndex, LookupMetrics, QueryLimits, RateLimitConfig, ServerConfig, Wordlist,
};

#[derive(Parser)]
#[command(name = "unscramble")]
#[command(about = "Anagram lookup service over an immutable dictionary index", long_about = None)]
struct Args {
    /// Path to the word-list JSON document ({"word_list": [...]})
    #[arg(long, env = "UNSCRAMBLE_WORDLIST")]
    wordlist: PathBuf,

    /// Bind address for the HTTP API
    #[arg(long, env = "UNSCRAMBLE_BIND_ADDR", default_value = "0.0.0.0")]
    bind_addr: String,

    /// HTTP API port
    #[arg(long, env = "UNSCRAMBLE_HTTP_PORT", default_value = "8080")]
    http_port: u16,

    /// Maximum number of letters accepted per query
    #[arg(long, env = "UNSCRAMBLE_MAX_LETTERS", default_value = "50")]
    max_letters: usize,

    /// Maximum request body size in bytes
    #[arg(long, env = "UNSCRAMBLE_MAX_BODY_BYTES", default_value = "75")]
    max_body_bytes: usize,

    /// Per-IP request quota per minute
    #[arg(long, env = "UNSCRAMBLE_RATE_LIMIT_PER_MINUTE", default_value = "10")]
    rate_limit_per_minute: u32,

    /// Disable per-IP rate limiting
    #[arg(long, env = "UNSCRAMBLE_NO_RATE_LIMIT")]
    no_rate_limit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting unscramble v{}", unscramble::VERSION);

    let config = ServerConfig::new(args.bind_addr, args.http_port, args.wordlist);
    info!("Server configuration:");
    info!("  Bind address: {}", config.socket_addr());
    info!("  Word list: {}", config.wordlist_path.display());

    // The index must be fully built before the first request is accepted.
    let wordlist = Wordlist::load(&config.wordlist_path)?;
    info!(
        "Loaded {} words from {}",
        wordlist.len(),
        config.wordlist_path.display()
    );

    let index = Arc::new(AnagramIndex::build(wordlist.into_words()));
    info!(
        "Anagram index built: {} words in {} groups",
        index.word_count(),
        index.group_count()
    );

    // Initialize metrics
    let metrics = Arc::new(LookupMetrics::new()?);
    metrics.set_index_stats(index.word_count(), index.group_count());
    info!("Metrics initialized");

    let limits = QueryLimits::default()
        .with_max_letters(args.max_letters)
        .with_max_body_bytes(args.max_body_bytes);

    let rate_limit_config = RateLimitConfig::default()
        .with_requests_per_minute(args.rate_limit_per_minute)
        .with_enabled(!args.no_rate_limit);
    let rate_limiter = RateLimitLayer::new(rate_limit_config);

    tokio::spawn(rate_limit::cleanup_task(
        rate_limiter.state(),
        Duration::from_secs(60),
        Duration::from_secs(600),
    ));

    // Start HTTP API server
    let app_state = AppState {
        index,
        metrics,
        limits,
    };

    let app = create_router(app_state, rate_limiter);
    let http_addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    info!("HTTP API server listening on {}", http_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, gracefully shutting down");
    })
    .await?;

    Ok(())
}
