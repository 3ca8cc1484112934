use std::sync::Arc;
use std::time::Instant;

use crate::insights::catalog::Catalog;
use crate::insights::config::{EngineConfig, RecommendStrategy};
use crate::insights::entropy::EntropySource;
use crate::insights::metrics::{MetricsRegistry, Operation};
use crate::insights::recommender::RecommendationSet;
use crate::insights::types::*;
use crate::insights::{predictor, profile, recommender};

/// Entry point the HTTP layer calls into. Holds the immutable catalog, the
/// configured rule variants and the random source; every call is independent.
pub struct InsightsEngine {
    config: EngineConfig,
    catalog: Arc<Catalog>,
    entropy: EntropySource,
    metrics_registry: MetricsRegistry,
}

impl InsightsEngine {
    pub fn new(config: EngineConfig, catalog: Arc<Catalog>) -> Self {
        let entropy = EntropySource::from_seed(config.rng_seed);
        Self {
            config,
            catalog,
            entropy,
            metrics_registry: MetricsRegistry::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_seeded(&self) -> bool {
        self.entropy.is_seeded()
    }

    pub fn metrics_registry(&self) -> &MetricsRegistry {
        &self.metrics_registry
    }

    fn track<T>(&self, op: Operation, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.metrics_registry
            .record_call(op, start.elapsed().as_micros() as u64);
        out
    }

    pub fn predict(&self, stats: &UserStats) -> PredictionResult {
        let variant = self.config.predictor;
        self.track(Operation::Predict, || {
            self.entropy
                .with_rng(|rng| predictor::predict(stats, variant, rng))
        })
    }

    pub fn analyze(
        &self,
        quiz_history: &[QuizRecord],
        activity_data: &[ActivityRecord],
    ) -> LearnerProfile {
        self.track(Operation::Profile, || {
            profile::analyze(quiz_history, activity_data, self.config.profile)
        })
    }

    /// Top `count` catalog items for the learner.
    pub fn recommend(&self, learner: &LearnerContext, count: usize) -> Vec<ContentItem> {
        self.track(Operation::RecommendCatalog, || {
            self.entropy
                .with_rng(|rng| recommender::recommend(&self.catalog, learner, count, rng))
        })
    }

    /// Rule-synthesized list, shuffled and cut to the configured limit.
    pub fn generate(&self, level: u32, total_points: u64) -> Vec<Recommendation> {
        let limit = self.config.recommend_limit;
        self.track(Operation::RecommendRules, || {
            let recs = recommender::generate(level, total_points);
            self.entropy
                .with_rng(|rng| recommender::shuffle_and_limit(recs, limit, rng))
        })
    }

    /// Dispatches to one of the two strategies; `None` uses the configured default.
    pub fn recommend_with(
        &self,
        strategy: Option<RecommendStrategy>,
        learner: &LearnerContext,
        count: usize,
    ) -> RecommendationSet {
        match strategy.unwrap_or(self.config.recommend_strategy) {
            RecommendStrategy::Catalog => RecommendationSet::Catalog {
                items: self.recommend(learner, count),
            },
            RecommendStrategy::Rules => RecommendationSet::Rules {
                recommendations: self.generate(learner.level, learner.total_points),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::insights::config::{PredictorVariant, ProfileVariant};

    use super::*;

    fn engine(config: EngineConfig) -> InsightsEngine {
        InsightsEngine::new(config, Arc::new(Catalog::builtin()))
    }

    #[test]
    fn seeded_engines_agree() {
        let cfg = EngineConfig {
            rng_seed: Some(2024),
            ..EngineConfig::default()
        };
        let a = engine(cfg.clone());
        let b = engine(cfg);
        let stats = UserStats {
            total_points: 420,
            level: 4,
            avg_quiz_score: 0.7,
        };
        for _ in 0..5 {
            assert_eq!(a.predict(&stats), b.predict(&stats));
            assert_eq!(a.generate(1, 10), b.generate(1, 10));
        }
    }

    #[test]
    fn variants_follow_config() {
        let e = engine(EngineConfig {
            predictor: PredictorVariant::Detailed,
            profile: ProfileVariant::Detailed,
            ..EngineConfig::default()
        });
        let p = e.predict(&UserStats::default());
        assert_eq!(p.predicted_score, 0.23);
        assert_eq!(e.analyze(&[], &[]).confidence, Some(0.8));
    }

    #[test]
    fn recommend_with_uses_default_strategy() {
        let e = engine(EngineConfig::default());
        let learner = LearnerContext {
            level: 1,
            total_points: 10,
            ..Default::default()
        };
        match e.recommend_with(None, &learner, 3) {
            RecommendationSet::Rules { recommendations } => assert_eq!(recommendations.len(), 3),
            other => panic!("unexpected set {other:?}"),
        }
        match e.recommend_with(Some(RecommendStrategy::Catalog), &learner, 3) {
            RecommendationSet::Catalog { items } => {
                assert!(items.iter().all(|i| i.difficulty == Difficulty::Easy))
            }
            other => panic!("unexpected set {other:?}"),
        }
    }

    #[test]
    fn rules_respect_limit() {
        let e = engine(EngineConfig {
            recommend_limit: 1,
            ..EngineConfig::default()
        });
        assert_eq!(e.generate(1, 0).len(), 1);
    }

    #[test]
    fn calls_are_counted() {
        let e = engine(EngineConfig::default());
        e.predict(&UserStats::default());
        e.analyze(&[], &[]);
        let snap = e.metrics_registry().snapshot();
        assert_eq!(snap["predict"].call_count, 1);
        assert_eq!(snap["profile"].call_count, 1);
        assert_eq!(snap["recommendCatalog"].call_count, 0);
    }
}
