use std::sync::Arc;

use axum::Router;

use gamification_insights::config::Config;
use gamification_insights::insights::catalog::Catalog;
use gamification_insights::insights::config::EngineConfig;
use gamification_insights::insights::engine::InsightsEngine;
use gamification_insights::routes::build_router;
use gamification_insights::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub config: Config,
}

// 直接构造 Config，避免 set_var 造成多线程测试环境变量竞态
fn test_config(engine: EngineConfig) -> Config {
    Config {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 8000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        engine,
    }
}

pub fn spawn_with_engine(engine: EngineConfig) -> TestApp {
    let config = test_config(engine);
    let catalog = Arc::new(
        Catalog::load(config.engine.catalog_path.as_deref()).expect("load catalog"),
    );
    let engine = Arc::new(InsightsEngine::new(config.engine.clone(), catalog));
    let state = AppState::new(engine);
    let app = build_router(state.clone());

    TestApp { app, state, config }
}

pub fn spawn_test_app() -> TestApp {
    spawn_with_engine(EngineConfig {
        rng_seed: Some(7),
        ..EngineConfig::default()
    })
}
