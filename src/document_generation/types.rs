use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder rendered for any metadata field the author left out
pub const NOT_SPECIFIED: &str = "Not specified";

/// The eight canonical PRD sections, in document order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProjectInformation,
    ExecutiveSummary,
    ProductOverview,
    UserStories,
    FunctionalRequirements,
    AcceptanceCriteria,
    AssumptionsAndConstraints,
    SuccessMetrics,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ProjectInformation,
        SectionKind::ExecutiveSummary,
        SectionKind::ProductOverview,
        SectionKind::UserStories,
        SectionKind::FunctionalRequirements,
        SectionKind::AcceptanceCriteria,
        SectionKind::AssumptionsAndConstraints,
        SectionKind::SuccessMetrics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ProjectInformation => "Project Information",
            SectionKind::ExecutiveSummary => "Executive Summary",
            SectionKind::ProductOverview => "Product Overview",
            SectionKind::UserStories => "User Stories and Requirements",
            SectionKind::FunctionalRequirements => "Functional Requirements",
            SectionKind::AcceptanceCriteria => "Acceptance Criteria",
            SectionKind::AssumptionsAndConstraints => "Assumptions and Constraints",
            SectionKind::SuccessMetrics => "Success Metrics",
        }
    }
}

/// One rendered document section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PRDSection {
    pub title: String,
    pub content: String,
}

/// Author-supplied project context.
///
/// Every field is optional; absent or blank fields render as
/// [`NOT_SPECIFIED`]. The generation date comes from the caller so that
/// synthesis stays deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub target_release: Option<String>,
    pub domain: Option<String>,
    pub date: Option<NaiveDate>,
    pub version: Option<String>,
    pub status: Option<String>,
    pub vision: Option<String>,
}

impl ProjectMetadata {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn author(&self) -> Option<&str> {
        present(&self.author)
    }

    pub fn target_release(&self) -> Option<&str> {
        present(&self.target_release)
    }

    pub fn domain(&self) -> Option<&str> {
        present(&self.domain)
    }

    pub fn version(&self) -> Option<&str> {
        present(&self.version)
    }

    pub fn status(&self) -> Option<&str> {
        present(&self.status)
    }

    pub fn vision(&self) -> Option<&str> {
        present(&self.vision)
    }

    /// Generation date as `YYYY-MM-DD`, or the placeholder
    pub fn date_display(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
