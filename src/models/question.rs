use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "question_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multiple,
    Programming,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Single,
        QuestionType::Multiple,
        QuestionType::Programming,
    ];

    /// Single and multiple choice questions carry options A-D.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::Single | QuestionType::Multiple)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::Programming => "programming",
        }
    }
}

impl FromStr for QuestionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::BadRequest(format!("Invalid question type: {}", s)))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::BadRequest(format!("Invalid difficulty: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "programming_language", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Javascript,
    Python,
    Java,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::Javascript,
        Language::Python,
        Language::Java,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| Error::BadRequest(format!("Invalid programming language: {}", s)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted quiz item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub question_type: QuestionType,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Difficulty,
    pub language: Option<Language>,
    pub created_at: DateTime<Utc>,
}

/// Row values for an insert; `id` and `created_at` come from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub title: String,
    pub question_type: QuestionType,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Difficulty,
    pub language: Option<Language>,
}

impl NewQuestion {
    pub fn choice(
        title: impl Into<String>,
        question_type: QuestionType,
        options: [&str; 4],
        answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        let [a, b, c, d] = options;
        Self {
            title: title.into(),
            question_type,
            option_a: Some(a.to_string()),
            option_b: Some(b.to_string()),
            option_c: Some(c.to_string()),
            option_d: Some(d.to_string()),
            answer: Some(answer.into()),
            difficulty,
            language: None,
        }
    }

    pub fn programming(
        title: impl Into<String>,
        language: Language,
        answer: Option<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            question_type: QuestionType::Programming,
            option_a: None,
            option_b: None,
            option_c: None,
            option_d: None,
            answer,
            difficulty,
            language: Some(language),
        }
    }
}
