use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

pub const SYSTEM_PROMPT: &str = "You are a quiz generator expert. You generate high-quality multiple choice questions for web development topics. Always respond with valid JSON only, no markdown formatting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown level '{0}', expected one of: beginner, intermediate, advanced")]
pub struct UnknownLevel(pub String);

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::Beginner => {
                "basic concepts suitable for beginners who are just starting to learn"
            }
            Level::Intermediate => {
                "moderately challenging concepts for learners with some experience"
            }
            Level::Advanced => "complex and in-depth concepts for experts and professionals",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    /// `bn` selects Bengali, every other code falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "bn" => Language::Bengali,
            _ => Language::English,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bengali => "Bengali (Bangla)",
        }
    }
}

pub fn build_prompt(topic: &str, level: Level, language: Language) -> String {
    let topic_name = topic.to_uppercase();
    let lang_name = language.name();

    format!(
        r#"Generate exactly 20 multiple choice questions about {topic_name} web development at {level} difficulty level ({description}).

Language: All questions, options, answers, and descriptions must be in {lang_name}.

Return ONLY a valid JSON array with this exact structure (no markdown, no code blocks, just pure JSON):
[
  {{
    "id": 1,
    "question": "Question text here",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "answer": "The correct option text (must match exactly one of the options)",
    "description": "Brief explanation of why this answer is correct"
  }}
]

Requirements:
- Exactly 20 questions
- Each question has exactly 4 unique options
- The answer field must exactly match one of the 4 options
- Questions should progressively cover different aspects of {topic_name}
- Descriptions should be educational and helpful
- All text in {lang_name} language"#,
        description = level.description(),
    )
}
