use super::prd_template::{self, SectionContext};
use super::types::{PRDSection, ProjectMetadata, SectionKind};
use crate::story_parsing::UserStory;

type SectionGenerator = fn(&SectionContext) -> String;

/// Document order is the order of this table
const SECTION_GENERATORS: [(SectionKind, SectionGenerator); 8] = [
    (SectionKind::ProjectInformation, prd_template::project_information),
    (SectionKind::ExecutiveSummary, prd_template::executive_summary),
    (SectionKind::ProductOverview, prd_template::product_overview),
    (SectionKind::UserStories, prd_template::user_stories),
    (
        SectionKind::FunctionalRequirements,
        prd_template::functional_requirements,
    ),
    (SectionKind::AcceptanceCriteria, prd_template::acceptance_criteria),
    (
        SectionKind::AssumptionsAndConstraints,
        prd_template::assumptions_and_constraints,
    ),
    (SectionKind::SuccessMetrics, prd_template::success_metrics),
];

/// Assembles the canonical PRD sections from parsed stories
#[derive(Debug, Clone, Copy, Default)]
pub struct PRDSynthesizer;

impl PRDSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Build the full PRD for `stories`.
    ///
    /// Always returns the eight canonical sections in the same order, even for
    /// an empty story list. Output depends only on the inputs.
    pub fn synthesize(&self, stories: &[UserStory], metadata: &ProjectMetadata) -> Vec<PRDSection> {
        let ctx = SectionContext::new(stories, metadata);

        log::info!(
            "Generating PRD for {} ({} stories, {} story points)",
            metadata.title().unwrap_or("untitled project"),
            ctx.metrics.story_count,
            ctx.metrics.total_points
        );

        SECTION_GENERATORS
            .iter()
            .map(|(kind, generate)| {
                let content = generate(&ctx);
                log::debug!("Rendered section '{}' ({} bytes)", kind.title(), content.len());
                PRDSection {
                    title: kind.title().to_string(),
                    content,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story_parsing::Priority;

    #[test]
    fn test_registry_matches_canonical_order() {
        let kinds: Vec<SectionKind> = SECTION_GENERATORS.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_stories_still_yield_all_sections() {
        let sections = PRDSynthesizer::new().synthesize(&[], &ProjectMetadata::default());
        assert_eq!(sections.len(), 8);
        for (section, kind) in sections.iter().zip(SectionKind::ALL.iter()) {
            assert_eq!(section.title, kind.title());
            assert!(!section.content.is_empty());
        }
        assert!(sections[1].content.contains("Story Count: 0"));
        assert!(sections[3].content.contains("0 user stories"));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let stories = vec![
            UserStory::new("Login", "Users log in")
                .unwrap()
                .with_priority(Priority::High)
                .with_story_points(5)
                .with_acceptance_criteria(["Valid password accepted"]),
            UserStory::new("Export", "Export reports").unwrap(),
        ];
        let metadata = ProjectMetadata {
            title: Some("Acme".to_string()),
            ..ProjectMetadata::default()
        };

        let synthesizer = PRDSynthesizer::new();
        let first = synthesizer.synthesize(&stories, &metadata);
        let second = synthesizer.synthesize(&stories, &metadata);
        assert_eq!(first, second);
        assert!(first[4].content.contains("FR-002 (US-002)"));
    }
}
