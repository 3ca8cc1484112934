use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use gamification_insights::config::Config;
use gamification_insights::insights::catalog::Catalog;
use gamification_insights::insights::engine::InsightsEngine;
use gamification_insights::logging::{init_tracing, LogConfig};
use gamification_insights::response::panic_response;
use gamification_insights::routes::build_router;
use gamification_insights::state::AppState;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let _log_guard = init_tracing(&LogConfig::from(&config));
    tracing::info!(?config, "Starting gamification-insights");

    if let Err(e) = config.engine.validate() {
        panic!("FATAL: invalid engine configuration: {e}");
    }

    let catalog = match Catalog::load(config.engine.catalog_path.as_deref()) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => panic!("FATAL: failed to load content catalog: {e}"),
    };
    tracing::info!(
        items = catalog.len(),
        source = config.engine.catalog_path.as_deref().unwrap_or("builtin"),
        "Content catalog loaded"
    );

    let engine = Arc::new(InsightsEngine::new(config.engine.clone(), catalog));
    let state = AppState::new(engine);

    let app = build_router(state)
        .layer(build_cors_layer(&config))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "Listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "HTTP server crashed");
    }
    tracing::info!("Shutdown complete");
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    if config.cors_origins.iter().any(|o| o == "*") {
        // 通配符与 credentials 互斥，仅用于开发环境
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => v,
            Err(e) => panic!(
                "FATAL: Invalid CORS origin '{o}': {e}. Fix the CORS_ORIGINS environment variable."
            ),
        })
        .collect();

    base.allow_origin(origins).allow_credentials(true)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
}
