//! 内容推荐：目录筛选排序与按等级规则合成两种策略

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::insights::catalog::Catalog;
use crate::insights::stats::jitter;
use crate::insights::types::{
    ContentItem, ContentType, Difficulty, LearnerContext, Recommendation,
};

const BASE_SCORE: f64 = 0.5;
const IDEAL_DIFFICULTY_BONUS: f64 = 0.3;
const QUIZ_BONUS: f64 = 0.1;
const SCORE_JITTER: f64 = 0.1;
const QUICK_PRACTICE_POINTS: u64 = 100;

/// Output of either recommendation strategy, tagged by the strategy that made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum RecommendationSet {
    Catalog { items: Vec<ContentItem> },
    Rules { recommendations: Vec<Recommendation> },
}

impl RecommendationSet {
    pub fn len(&self) -> usize {
        match self {
            Self::Catalog { items } => items.len(),
            Self::Rules { recommendations } => recommendations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The difficulty a learner at `level` should ideally be working on.
pub fn ideal_difficulty(level: u32) -> Difficulty {
    match level {
        0..=2 => Difficulty::Easy,
        3..=5 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

pub fn is_suitable(difficulty: Difficulty, level: u32) -> bool {
    match level {
        0..=2 => difficulty == Difficulty::Easy,
        3..=5 => matches!(difficulty, Difficulty::Easy | Difficulty::Medium),
        _ => true,
    }
}

/// Deterministic part of an item's ranking score.
pub fn base_score(item: &ContentItem, level: u32) -> f64 {
    let mut score = BASE_SCORE;
    if item.difficulty == ideal_difficulty(level) {
        score += IDEAL_DIFFICULTY_BONUS;
    }
    if item.content_type == ContentType::Quiz {
        score += QUIZ_BONUS;
    }
    score
}

/// Ranks the catalog items a learner is eligible for and returns the top
/// `count`. Items with equal scores keep catalog order.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    learner: &LearnerContext,
    count: usize,
    rng: &mut R,
) -> Vec<ContentItem> {
    let mut scored: Vec<(&ContentItem, f64)> = catalog
        .items()
        .iter()
        .filter(|it| is_suitable(it.difficulty, learner.level))
        .map(|it| (it, base_score(it, learner.level) + jitter(&mut *rng, SCORE_JITTER)))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    tracing::debug!(
        level = learner.level,
        eligible = scored.len(),
        count,
        "Ranked catalog items"
    );

    scored
        .into_iter()
        .take(count)
        .map(|(it, _)| it.clone())
        .collect()
}

fn rec(
    content_type: ContentType,
    title: &str,
    description: &str,
    difficulty: &str,
    reason: &str,
) -> Recommendation {
    Recommendation {
        content_type,
        title: title.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        reason: reason.to_string(),
    }
}

/// Rule-synthesized recommendations: one quiz and one lesson for the level
/// tier, plus a quick practice quiz for learners under 100 points.
pub fn generate(level: u32, total_points: u64) -> Vec<Recommendation> {
    let mut out = match level {
        0..=2 => vec![
            rec(
                ContentType::Quiz,
                "JavaScript Basics Quiz",
                "Test your understanding of variables and functions",
                "easy",
                "Perfect for your current level",
            ),
            rec(
                ContentType::Lesson,
                "Introduction to Programming",
                "Learn the fundamentals of programming",
                "beginner",
                "Build a strong foundation",
            ),
        ],
        3..=5 => vec![
            rec(
                ContentType::Quiz,
                "React Components Quiz",
                "Advanced component patterns and hooks",
                "medium",
                "Challenge yourself with intermediate topics",
            ),
            rec(
                ContentType::Lesson,
                "State Management",
                "Learn about Redux and Context API",
                "intermediate",
                "Next step in your learning journey",
            ),
        ],
        _ => vec![
            rec(
                ContentType::Quiz,
                "System Design Quiz",
                "Architecture and scalability concepts",
                "hard",
                "Advanced topics for experienced learners",
            ),
            rec(
                ContentType::Lesson,
                "Microservices Architecture",
                "Building scalable distributed systems",
                "advanced",
                "Master advanced concepts",
            ),
        ],
    };

    if total_points < QUICK_PRACTICE_POINTS {
        out.push(rec(
            ContentType::Quiz,
            "Quick Practice Quiz",
            "Earn points with this short quiz",
            "easy",
            "Boost your points quickly",
        ));
    }

    out
}

pub fn shuffle_and_limit<T, R: Rng + ?Sized>(mut items: Vec<T>, limit: usize, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(limit);
    items
}
