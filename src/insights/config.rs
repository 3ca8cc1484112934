use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which score-prediction rule set to apply.
///
/// `Detailed` blends points, level and the historical average with no jitter.
/// `Quick` uses points and level only and adds a bounded random perturbation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorVariant {
    Detailed,
    #[default]
    Quick,
}

/// Which learner-profile analysis to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVariant {
    Detailed,
    #[default]
    Quick,
}

/// Catalog ranking or rule-synthesized recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendStrategy {
    Catalog,
    #[default]
    Rules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl FromStr for PredictorVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "quick" => Ok(Self::Quick),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for ProfileVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "quick" => Ok(Self::Quick),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for RecommendStrategy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "rules" => Ok(Self::Rules),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub predictor: PredictorVariant,
    pub profile: ProfileVariant,
    pub recommend_strategy: RecommendStrategy,
    /// Upper bound on rule-synthesized recommendations after shuffling.
    pub recommend_limit: usize,
    pub rng_seed: Option<u64>,
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            predictor: PredictorVariant::default(),
            profile: ProfileVariant::default(),
            recommend_strategy: RecommendStrategy::default(),
            recommend_limit: crate::constants::DEFAULT_RECOMMEND_LIMIT,
            rng_seed: None,
            catalog_path: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.recommend_limit == 0 {
            return Err("engine.recommend_limit must be > 0".to_string());
        }
        Ok(())
    }
}
