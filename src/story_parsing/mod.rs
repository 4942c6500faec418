//! User story parsing
//!
//! Raw text flows through three stages:
//! - segmenter: split into blank-line separated blocks
//! - extractor: pattern-match fields out of one block
//! - normalizer: apply defaults and reject blocks with no usable text

pub mod extractor;
pub mod normalizer;
pub mod segmenter;
pub mod types;

pub use types::*;

use crate::error::Result;
use crate::settings::ParserSettings;

/// Parses raw story text into normalized [`UserStory`] records
#[derive(Debug, Clone, Default)]
pub struct StoryParser {
    settings: ParserSettings,
}

impl StoryParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ParserSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parse every story in `raw_text`, in input order.
    ///
    /// Each call is an independent pass; blocks that carry no usable text
    /// are dropped rather than reported.
    pub fn parse(&self, raw_text: &str) -> Vec<UserStory> {
        let blocks = segmenter::segment(raw_text);
        let block_count = blocks.len();

        let stories: Vec<UserStory> = blocks
            .into_iter()
            .enumerate()
            .filter_map(|(idx, block)| {
                let fields = extractor::extract(block);
                let story = normalizer::normalize(fields, &self.settings);
                if story.is_none() {
                    log::debug!("Discarding block {} with no usable story text", idx + 1);
                }
                story
            })
            .collect();

        log::info!(
            "Parsed {} user stories from {} text blocks",
            stories.len(),
            block_count
        );

        stories
    }
}
