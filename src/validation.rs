//! 请求字段的范围校验
//! 类型错误由 serde 反序列化拦截，这里只检查能解析但取值越界的字段。

use crate::constants::{MAX_HISTORY_RECORDS, MAX_RECOMMEND_COUNT};
use crate::insights::types::{ActivityRecord, QuizRecord, UserStats};

pub fn validate_user_id(user_id: &str) -> Result<(), &'static str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err("userId must not be empty");
    }
    if trimmed.chars().count() > 128 {
        return Err("userId must be at most 128 characters");
    }
    Ok(())
}

pub fn validate_level(level: u32) -> Result<(), &'static str> {
    if level == 0 {
        return Err("level must be at least 1");
    }
    Ok(())
}

fn is_unit_score(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

pub fn validate_user_stats(stats: &UserStats) -> Result<(), &'static str> {
    validate_level(stats.level)?;
    if !is_unit_score(stats.avg_quiz_score) {
        return Err("avgQuizScore must be between 0 and 1");
    }
    Ok(())
}

pub fn validate_quiz_history(history: &[QuizRecord]) -> Result<(), &'static str> {
    if history.len() > MAX_HISTORY_RECORDS {
        return Err("quizHistory has too many records");
    }
    if !history.iter().all(|q| is_unit_score(q.score)) {
        return Err("quiz score must be between 0 and 1");
    }
    Ok(())
}

pub fn validate_activity_data(activity: &[ActivityRecord]) -> Result<(), &'static str> {
    if activity.len() > MAX_HISTORY_RECORDS {
        return Err("activityData has too many records");
    }
    if !activity
        .iter()
        .all(|a| a.duration.is_finite() && a.duration >= 0.0)
    {
        return Err("activity duration must be a non-negative number");
    }
    Ok(())
}

pub fn validate_count(count: usize) -> Result<(), &'static str> {
    if count == 0 || count > MAX_RECOMMEND_COUNT {
        return Err("count must be between 1 and 50");
    }
    Ok(())
}
