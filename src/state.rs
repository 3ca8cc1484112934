use std::sync::Arc;
use std::time::Instant;

use crate::insights::engine::InsightsEngine;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<InsightsEngine>,
    started_at: Instant,
}

impl AppState {
    pub fn new(engine: Arc<InsightsEngine>) -> Self {
        Self {
            engine,
            started_at: Instant::now(),
        }
    }

    pub fn engine(&self) -> &InsightsEngine {
        &self.engine
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use crate::insights::catalog::Catalog;
    use crate::insights::config::EngineConfig;

    use super::*;

    #[test]
    fn clones_share_engine() {
        let engine = Arc::new(InsightsEngine::new(
            EngineConfig::default(),
            Arc::new(Catalog::builtin()),
        ));
        let state = AppState::new(engine);
        let copy = state.clone();
        assert!(std::ptr::eq(state.engine(), copy.engine()));
        assert_eq!(copy.engine().catalog().len(), 4);
        assert!(copy.uptime_secs() < 60);
    }
}
