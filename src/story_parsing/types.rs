use crate::error::{PrdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Story priority
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Map a priority token case-insensitively. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "high" | "critical" | "urgent" | "p0" | "p1" => Some(Priority::High),
            "medium" | "normal" | "moderate" | "p2" => Some(Priority::Medium),
            "low" | "minor" | "trivial" | "p3" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrative strategy that produced a story
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryFormat {
    /// "As a <persona>, I want <action> so that <benefit>"
    Gherkin,
    /// Given/When/Then/And step lines
    BddSteps,
    FreeForm,
}

/// Partially extracted story. Every field is optional so that what the
/// extractor found stays visible before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFields {
    pub format: Option<StoryFormat>,
    pub persona: Option<String>,
    pub action: Option<String>,
    pub benefit: Option<String>,
    /// Title candidate picked by the narrative strategy
    pub headline: Option<String>,
    pub description: Option<String>,
    pub raw_steps: Vec<String>,
    pub acceptance_criteria: Option<Vec<String>>,
    pub priority: Option<Priority>,
    pub story_points: Option<u32>,
}

/// One parsed requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStory {
    pub title: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub priority: Priority,
    pub story_points: Option<u32>,
    pub format: StoryFormat,
    pub persona: Option<String>, // "As a [persona]"
    pub action: Option<String>,  // "I want [action]"
    pub benefit: Option<String>, // "so that [benefit]"
}

impl UserStory {
    /// Build a free-form story directly, bypassing the parser.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(PrdError::invalid_argument("story title must not be empty"));
        }
        if description.trim().is_empty() {
            return Err(PrdError::invalid_argument(
                "story description must not be empty",
            ));
        }

        Ok(Self {
            title,
            description,
            acceptance_criteria: Vec::new(),
            priority: Priority::default(),
            story_points: None,
            format: StoryFormat::FreeForm,
            persona: None,
            action: None,
            benefit: None,
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_story_points(mut self, points: u32) -> Self {
        self.story_points = Some(points);
        self
    }

    pub fn with_acceptance_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptance_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }
}
