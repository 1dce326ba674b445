mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod opportunities;
mod profiles;
mod roadmap;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::ai_matcher::{AiMatchSettings, AiRoleMatcher};
use crate::matching::roles::ROLE_CATALOG;
use crate::opportunities::catalog::load_opportunities;
use crate::opportunities::fit_scoring::RuleBasedFitScorer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryProfileStore, ProfileStore, RedisProfileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Launchpad API v{}", env!("CARGO_PKG_VERSION"));

    // Profile store: Redis when configured, otherwise process memory
    let store: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).context("Invalid REDIS_URL")?;
            info!("Redis profile store initialized");
            Arc::new(RedisProfileStore::new(client))
        }
        None => {
            info!("REDIS_URL not set, using in-memory profile store");
            Arc::new(InMemoryProfileStore::new())
        }
    };

    // Initialize LLM client; without a key the AI matcher degrades to algorithmic matching
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    if config.anthropic_api_key.is_some() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("ANTHROPIC_API_KEY not set, AI role matching disabled");
    }

    let ai_matcher = AiRoleMatcher::new(
        Arc::new(llm),
        ROLE_CATALOG,
        AiMatchSettings {
            request_timeout: config.ai_match_timeout,
            generous: config.ai_match_generous,
            ..AiMatchSettings::default()
        },
    );

    let opportunities = load_opportunities(config.opportunities_path.as_deref())?;

    // Build app state
    let state = AppState {
        config: config.clone(),
        store,
        ai_matcher: Arc::new(ai_matcher),
        fit_scorer: Arc::new(RuleBasedFitScorer),
        opportunities: Arc::new(opportunities),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
