// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::id::uid;

/// A quiz record in the 'ecoplay_quizzes' collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered question list.
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

/// A single quiz question.
///
/// The stored format uses the short keys `q` and `a`, so serde renames
/// apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "q")]
    pub prompt: String,
    /// Choices presented to the player.
    pub options: Vec<String>,
    /// Index of the correct option.
    #[serde(rename = "a")]
    pub answer: usize,
    /// Points awarded for the correct answer.
    pub points: i64,
}

impl Quiz {
    pub fn new(title: &str, description: &str, questions: Vec<Question>) -> Self {
        Self {
            id: uid("q"),
            title: title.to_owned(),
            description: description.to_owned(),
            questions,
            created_at: Utc::now(),
        }
    }

    /// Total points on offer across all questions.
    pub fn total_points(&self) -> i64 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], answer: usize, points: i64) -> Self {
        Self {
            prompt: prompt.to_owned(),
            options: options.iter().map(|&o| o.to_owned()).collect(),
            answer,
            points,
        }
    }
}
