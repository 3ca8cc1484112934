use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Quiz,
    Lesson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    Average,
    Fast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total_points: u64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_avg_quiz_score")]
    pub avg_quiz_score: f64,
}

fn default_level() -> u32 {
    1
}

fn default_avg_quiz_score() -> f64 {
    0.5
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: default_level(),
            avg_quiz_score: default_avg_quiz_score(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_score: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub learning_style: LearningStyle,
    pub difficulty_preference: String,
    pub engagement_level: EngagementLevel,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommended_pace: Pace,
    /// Only reported by the detailed analyzer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    /// Minutes.
    pub estimated_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    /// Free-form label; the rule tiers use names like "beginner" or "advanced".
    pub difficulty: String,
    pub reason: String,
}

/// What the catalog recommender needs to know about a learner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerContext {
    pub level: u32,
    pub total_points: u64,
    #[serde(default)]
    pub preferences: HashMap<String, serde_json::Value>,
}
