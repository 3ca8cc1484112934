//! 学习者画像：根据测验历史与活动记录推断学习风格、难度偏好和参与度

use crate::insights::config::ProfileVariant;
use crate::insights::stats::{mean_score, total_duration};
use crate::insights::types::{
    ActivityRecord, Difficulty, EngagementLevel, LearnerProfile, LearningStyle, Pace, QuizRecord,
};

/// Confidence the detailed analyzer attaches to every profile.
pub const PROFILE_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn analyze(
    quiz_history: &[QuizRecord],
    activity_data: &[ActivityRecord],
    variant: ProfileVariant,
) -> LearnerProfile {
    match variant {
        ProfileVariant::Detailed => analyze_detailed(quiz_history, activity_data),
        ProfileVariant::Quick => analyze_quick(quiz_history),
    }
}

pub fn analyze_detailed(
    quiz_history: &[QuizRecord],
    activity_data: &[ActivityRecord],
) -> LearnerProfile {
    let performance = analyze_performance(quiz_history);
    let (engagement_level, recommended_pace) = analyze_engagement(activity_data);

    LearnerProfile {
        learning_style: infer_learning_style(quiz_history, activity_data),
        difficulty_preference: difficulty_preference(quiz_history).to_string(),
        engagement_level,
        strengths: performance.strengths,
        weaknesses: performance.weaknesses,
        recommended_pace,
        confidence: Some(PROFILE_CONFIDENCE),
    }
}

pub fn analyze_performance(quiz_history: &[QuizRecord]) -> PerformanceSummary {
    let Some(avg) = mean_score(quiz_history) else {
        return PerformanceSummary {
            strengths: strings(&["getting started"]),
            weaknesses: strings(&["needs more practice"]),
        };
    };

    let (strengths, weaknesses) = if avg > 0.8 {
        (
            strings(&["problem-solving", "quick learning", "attention to detail"]),
            Vec::new(),
        )
    } else if avg > 0.6 {
        (
            strings(&["consistent effort", "good understanding"]),
            strings(&["needs practice with difficult concepts"]),
        )
    } else {
        (
            strings(&["persistence"]),
            strings(&["fundamental concepts", "time management"]),
        )
    };

    PerformanceSummary {
        strengths,
        weaknesses,
    }
}

/// Engagement bucket by number of activity records.
pub fn analyze_engagement(activity_data: &[ActivityRecord]) -> (EngagementLevel, Pace) {
    engagement_for_count(activity_data.len(), 20, 10)
}

fn engagement_for_count(count: usize, high_above: usize, medium_above: usize) -> (EngagementLevel, Pace) {
    if count > high_above {
        (EngagementLevel::High, Pace::Fast)
    } else if count > medium_above {
        (EngagementLevel::Medium, Pace::Average)
    } else {
        (EngagementLevel::Low, Pace::Slow)
    }
}

pub fn infer_learning_style(
    quiz_history: &[QuizRecord],
    activity_data: &[ActivityRecord],
) -> LearningStyle {
    let Some(avg) = mean_score(quiz_history) else {
        return LearningStyle::Visual;
    };

    // 高分且耗时少 -> visual
    if avg > 0.8 && total_duration(activity_data) < 1000.0 {
        LearningStyle::Visual
    } else if avg > 0.6 {
        LearningStyle::Kinesthetic
    } else {
        LearningStyle::Auditory
    }
}

/// Difficulty band with the best mean score.
///
/// Groups are visited in first-seen order and only a strictly higher mean
/// replaces the current best, so ties go to the earlier group. When no group
/// mean is above zero the answer stays at `medium`.
pub fn difficulty_preference(quiz_history: &[QuizRecord]) -> Difficulty {
    if quiz_history.is_empty() {
        return Difficulty::Easy;
    }

    let mut groups: Vec<(Difficulty, f64, usize)> = Vec::with_capacity(3);
    for quiz in quiz_history {
        match groups.iter_mut().find(|(d, _, _)| *d == quiz.difficulty) {
            Some((_, sum, n)) => {
                *sum += quiz.score;
                *n += 1;
            }
            None => groups.push((quiz.difficulty, quiz.score, 1)),
        }
    }

    let mut best = Difficulty::Medium;
    let mut best_avg = 0.0;
    for (difficulty, sum, n) in groups {
        let avg = sum / n as f64;
        if avg > best_avg {
            best_avg = avg;
            best = difficulty;
        }
    }
    best
}

/// Lightweight profile from quiz history alone. Reports no confidence.
pub fn analyze_quick(quiz_history: &[QuizRecord]) -> LearnerProfile {
    let avg = mean_score(quiz_history).unwrap_or(0.0);

    let (learning_style, difficulty_preference) = if avg > 0.8 {
        (LearningStyle::Visual, "challenging")
    } else if avg > 0.6 {
        (LearningStyle::Kinesthetic, "moderate")
    } else {
        (LearningStyle::Auditory, "easy")
    };

    let (engagement_level, recommended_pace) = engagement_for_count(quiz_history.len(), 10, 5);

    let strengths = if avg > 0.7 {
        strings(&["problem-solving", "logical thinking"])
    } else {
        strings(&["persistence", "effort"])
    };
    let weaknesses = if avg < 0.6 {
        strings(&["time management"])
    } else {
        strings(&["advanced concepts"])
    };

    LearnerProfile {
        learning_style,
        difficulty_preference: difficulty_preference.to_string(),
        engagement_level,
        strengths,
        weaknesses,
        recommended_pace,
        confidence: None,
    }
}
