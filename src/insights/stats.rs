//! Numeric helpers shared by the predictor, analyzer and recommender.

use rand::Rng;

use crate::insights::types::{ActivityRecord, QuizRecord};

/// Rounds to two decimal places, the precision every reported score uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Mean quiz score, `None` for an empty history.
pub fn mean_score(history: &[QuizRecord]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let sum: f64 = history.iter().map(|q| q.score).sum();
    Some(sum / history.len() as f64)
}

pub fn total_duration(activity: &[ActivityRecord]) -> f64 {
    activity.iter().map(|a| a.duration).sum()
}

/// Uniform perturbation in `[-amplitude, amplitude]`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-amplitude..=amplitude)
}
