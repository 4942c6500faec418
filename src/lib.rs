//! Turns user story text into a structured Product Requirements Document.
//!
//! [`parse_user_stories`] segments and extracts stories from raw text;
//! [`generate_prd`] assembles the eight canonical PRD sections from them.

pub mod document_generation;
pub mod error;
pub mod settings;
pub mod story_parsing;

pub use document_generation::{PRDSection, PRDSynthesizer, ProjectMetadata, SectionKind};
pub use error::{PrdError, Result};
pub use settings::{ParserSettings, PrdSettings};
pub use story_parsing::{Priority, StoryFormat, StoryParser, UserStory};

/// Parse `raw_text` into stories using the default bounds
pub fn parse_user_stories(raw_text: &str) -> Vec<UserStory> {
    StoryParser::new().parse(raw_text)
}

/// Build the eight canonical PRD sections for `stories`
pub fn generate_prd(stories: &[UserStory], metadata: &ProjectMetadata) -> Vec<PRDSection> {
    PRDSynthesizer::new().synthesize(stories, metadata)
}
