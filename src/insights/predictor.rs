//! 成绩预测：基于积分、等级与历史均分的规则公式

use rand::Rng;

use crate::insights::config::PredictorVariant;
use crate::insights::stats::{clamp_unit, jitter, round2};
use crate::insights::types::{PredictionResult, UserStats};

struct PredictorRules {
    cap: f64,
    level_weight: f64,
    avg_weight: f64,
    floor: f64,
    jitter: f64,
    confidence_threshold: u64,
    high_confidence: f64,
}

const DETAILED: PredictorRules = PredictorRules {
    cap: 0.95,
    level_weight: 0.08,
    avg_weight: 0.3,
    floor: 0.2,
    jitter: 0.0,
    confidence_threshold: 50,
    high_confidence: 0.75,
};

const QUICK: PredictorRules = PredictorRules {
    cap: 0.9,
    level_weight: 0.1,
    avg_weight: 0.0,
    floor: 0.3,
    jitter: 0.1,
    confidence_threshold: 100,
    high_confidence: 0.8,
};

const LOW_CONFIDENCE: f64 = 0.6;

fn rules(variant: PredictorVariant) -> &'static PredictorRules {
    match variant {
        PredictorVariant::Detailed => &DETAILED,
        PredictorVariant::Quick => &QUICK,
    }
}

pub fn predict<R: Rng + ?Sized>(
    stats: &UserStats,
    variant: PredictorVariant,
    rng: &mut R,
) -> PredictionResult {
    let r = rules(variant);

    let base = (stats.total_points as f64 / 1000.0
        + stats.level as f64 * r.level_weight
        + stats.avg_quiz_score * r.avg_weight)
        .min(r.cap);
    let predicted = (base + jitter(rng, r.jitter)).max(r.floor);

    let confidence = if stats.total_points > r.confidence_threshold {
        r.high_confidence
    } else {
        LOW_CONFIDENCE
    };

    PredictionResult {
        predicted_score: round2(clamp_unit(predicted)),
        confidence: round2(confidence),
    }
}

/// Study advice matching a predicted score.
pub fn suggestions(predicted_score: f64) -> Vec<String> {
    let lines: &[&str] = if predicted_score < 0.6 {
        &[
            "Review the lesson materials before taking the quiz",
            "Practice with similar questions",
        ]
    } else if predicted_score < 0.8 {
        &["You're doing well! Focus on difficult topics"]
    } else {
        &["Great job! You're ready for this quiz"]
    };
    lines.iter().map(|s| s.to_string()).collect()
}
