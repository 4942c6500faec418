//! Section generators. Each one is a pure function of the stories, the
//! project metadata and the precomputed metrics.

use super::domain_guidance::domain_considerations;
use super::prd_metrics::StoryMetrics;
use super::types::{ProjectMetadata, NOT_SPECIFIED};
use crate::story_parsing::extractor::strip_infinitive;
use crate::story_parsing::UserStory;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FIRST_PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(i['’](?:m|ve|ll|d)|i|me|my|mine|myself)\b")
        .expect("valid first-person regex")
});

/// Inputs shared by every section generator
pub struct SectionContext<'a> {
    pub stories: &'a [UserStory],
    pub metadata: &'a ProjectMetadata,
    pub metrics: StoryMetrics,
}

impl<'a> SectionContext<'a> {
    pub fn new(stories: &'a [UserStory], metadata: &'a ProjectMetadata) -> Self {
        Self {
            stories,
            metadata,
            metrics: StoryMetrics::from_stories(stories),
        }
    }
}

pub fn project_information(ctx: &SectionContext) -> String {
    let m = ctx.metadata;
    let mut out = String::new();
    out.push_str(&format!("Project Title: {}\n", or_placeholder(m.title())));
    out.push_str(&format!("Author: {}\n", or_placeholder(m.author())));
    out.push_str(&format!("Generation Date: {}\n", m.date_display()));
    out.push_str(&format!("Target Release: {}\n", or_placeholder(m.target_release())));
    out.push_str(&format!("Domain: {}\n", or_placeholder(m.domain())));
    out.push_str(&format!("Version: {}\n", or_placeholder(m.version())));
    out.push_str(&format!("Status: {}", or_placeholder(m.status())));
    out
}

pub fn executive_summary(ctx: &SectionContext) -> String {
    let metrics = &ctx.metrics;
    let mut out = String::new();

    out.push_str(&format!(
        "This Product Requirements Document outlines the requirements for {}.\n\n",
        ctx.metadata.title().unwrap_or("the project")
    ));

    out.push_str(&format!("Story Count: {}\n", metrics.story_count));
    out.push_str(&format!(
        "Priority Distribution: {}\n",
        metrics.priority_distribution()
    ));
    out.push_str(&format!(
        "Total Estimated Story Points: {}\n\n",
        points_summary(metrics)
    ));

    if metrics.story_count == 0 {
        out.push_str(
            "No user stories have been captured yet. The sections below contain placeholders until stories are added.\n\n",
        );
    } else {
        out.push_str(&format!(
            "The product addresses key user needs through {} user {}, with {} high-priority {} identified. \
             This document serves as the primary reference for development teams, stakeholders, and project managers \
             throughout the product development lifecycle.\n\n",
            metrics.story_count,
            plural(metrics.story_count, "story", "stories"),
            metrics.high,
            plural(metrics.high, "feature", "features"),
        ));
    }

    out.push_str("Key objectives:\n");
    out.push_str("- Deliver user-centered features based on identified user stories\n");
    out.push_str("- Ensure clear requirements and acceptance criteria\n");
    out.push_str("- Provide measurable success metrics\n");
    out.push_str("- Establish development timeline and constraints");
    out
}

pub fn product_overview(ctx: &SectionContext) -> String {
    let m = ctx.metadata;
    let product = m.title().unwrap_or("The product");
    let mut out = String::new();

    out.push_str(&format!("Product: {}\n", or_placeholder(m.title())));
    out.push_str(&format!("Domain: {}\n\n", or_placeholder(m.domain())));
    out.push_str(&format!("Product Vision: {}\n\n", or_placeholder(m.vision())));
    out.push_str(
        "Target Users: The primary users are the personas named in the user stories, \
         each of whom requires the functionality described in the requirements.\n\n",
    );
    match m.domain() {
        Some(domain) => out.push_str(&format!(
            "Core Value Proposition: {} will deliver value to {} users by addressing the specific needs \
             outlined in the user stories section.\n\n",
            product, domain
        )),
        None => out.push_str(&format!(
            "Core Value Proposition: {} will deliver value by addressing the specific user needs \
             outlined in the user stories section.\n\n",
            product
        )),
    }
    out.push_str(
        "Scope: This PRD covers the features and functionality derived from the provided user stories \
         and their associated acceptance criteria.\n\n",
    );

    out.push_str("Domain Considerations:\n");
    let considerations = domain_considerations(m.domain())
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&considerations);
    out
}

pub fn user_stories(ctx: &SectionContext) -> String {
    if ctx.stories.is_empty() {
        return "This document contains 0 user stories. No user stories have been defined yet."
            .to_string();
    }

    let mut out = format!(
        "The following {} user {} define the core requirements for this product:\n",
        ctx.stories.len(),
        plural(ctx.stories.len(), "story", "stories")
    );

    for (idx, story) in ctx.stories.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}: {}\n", story_id(idx), story.title));
        out.push_str(&format!("Description: {}\n", story.description));
        out.push_str(&format!("Priority: {}\n", story.priority));
        out.push_str(&format!(
            "Story Points: {}\n",
            story
                .story_points
                .map(|p| p.to_string())
                .unwrap_or_else(|| "unestimated".to_string())
        ));
    }

    out.trim_end().to_string()
}

pub fn functional_requirements(ctx: &SectionContext) -> String {
    if ctx.stories.is_empty() {
        return "No functional requirements have been derived because no user stories were provided."
            .to_string();
    }

    let mut out = String::from(
        "Based on the user stories, the following functional requirements have been identified:\n",
    );

    for (idx, story) in ctx.stories.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "FR-{:03} ({}): {}\n",
            idx + 1,
            story_id(idx),
            capability_statement(story)
        ));
        out.push_str(&format!("Priority Level: {}\n", story.priority));
    }

    out.trim_end().to_string()
}

pub fn acceptance_criteria(ctx: &SectionContext) -> String {
    if ctx.stories.is_empty() {
        return "No acceptance criteria are defined because no user stories were provided."
            .to_string();
    }

    let mut out = String::from("Acceptance criteria for each user story:\n");

    for (idx, story) in ctx.stories.iter().enumerate() {
        let id = story_id(idx);
        out.push('\n');
        out.push_str(&format!("{} - {}:\n", id, story.title));
        if story.acceptance_criteria.is_empty() {
            out.push_str(&format!("  Acceptance criteria not yet defined for {}.\n", id));
            continue;
        }
        for (n, criterion) in story.acceptance_criteria.iter().enumerate() {
            out.push_str(&format!("  AC-{:03}.{}: {}\n", idx + 1, n + 1, criterion));
        }
    }

    out.trim_end().to_string()
}

pub fn assumptions_and_constraints(ctx: &SectionContext) -> String {
    let m = ctx.metadata;
    let mut out = String::from("The following assumptions are made for this product development:\n\n");
    out.push_str("1. Technical infrastructure and development resources are available\n");
    out.push_str("2. User stories represent validated user needs\n");
    out.push_str("3. Acceptance criteria are complete and testable\n");
    out.push_str("4. Dependencies with external systems are manageable\n");
    out.push_str("5. Timeline estimates are based on standard development practices\n\n");

    out.push_str("Constraints:\n");
    match m.target_release() {
        Some(release) => out.push_str(&format!(
            "- Delivery is planned against the target release: {}\n",
            release
        )),
        None => out.push_str(
            "- Target release: Not specified. Schedule constraints must be confirmed before planning begins\n",
        ),
    }
    if let Some(domain) = m.domain() {
        out.push_str(&format!(
            "- Regulatory and industry constraints of the {} domain apply\n",
            domain
        ));
    }
    out.push('\n');
    out.push_str("These assumptions should be validated and updated as the project progresses.");
    out
}

pub fn success_metrics(ctx: &SectionContext) -> String {
    let metrics = &ctx.metrics;
    let mut out = String::from("Success will be measured using the following metrics:\n\n");

    out.push_str(&format!(
        "1. Feature Completion Rate: Percentage of the {} user {} successfully implemented\n",
        metrics.story_count,
        plural(metrics.story_count, "story", "stories")
    ));
    out.push_str(&format!(
        "2. High-Priority Delivery: All {} high-priority {} delivered and accepted by the target release\n",
        metrics.high,
        plural(metrics.high, "story", "stories")
    ));
    out.push_str(&format!(
        "3. Acceptance Criteria Pass Rate: Percentage of the {} defined acceptance {} met\n",
        metrics.criteria_count,
        plural(metrics.criteria_count, "criterion", "criteria")
    ));
    out.push_str("4. User Satisfaction: To be measured through user feedback and testing\n");
    out.push_str("5. Performance Metrics: Response time, uptime, and system reliability\n");
    out.push_str("6. Adoption Metrics: User engagement and feature utilization\n\n");

    out.push_str(&format!(
        "Priority mix to track: {}.\n\n",
        metrics.priority_distribution()
    ));
    out.push_str("Specific targets and measurement methods should be defined during the planning phase.");
    out
}

/// Sequential story identifier: index 0 is `US-001`
pub fn story_id(idx: usize) -> String {
    format!("US-{:03}", idx + 1)
}

/// Rephrase a story into a "The system shall ..." statement.
pub fn capability_statement(story: &UserStory) -> String {
    let action = story
        .action
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty());

    match (story.persona.as_deref(), action) {
        (Some(persona), Some(action)) => {
            let verb_phrase = strip_infinitive(action);
            let rephrased = to_third_person(verb_phrase);
            if verb_phrase.len() < action.len() {
                format!("The system shall allow the {} to {}.", persona, rephrased)
            } else {
                format!("The system shall provide the {} with {}.", persona, rephrased)
            }
        }
        _ => format!(
            "The system shall support: {}",
            story.description.split_whitespace().collect::<Vec<_>>().join(" ")
        ),
    }
}

fn to_third_person(text: &str) -> String {
    FIRST_PERSON
        .replace_all(text, |caps: &Captures| {
            match caps[1].to_lowercase().replace('’', "'").as_str() {
                "i'm" => "they're",
                "i've" => "they've",
                "i'll" => "they'll",
                "i'd" => "they'd",
                "i" => "they",
                "me" => "them",
                "my" => "their",
                "mine" => "theirs",
                _ => "themselves",
            }
            .to_string()
        })
        .into_owned()
}

fn points_summary(metrics: &StoryMetrics) -> String {
    if metrics.unestimated == 0 {
        return metrics.total_points.to_string();
    }
    format!(
        "{} ({} unestimated {} omitted from the total)",
        metrics.total_points,
        metrics.unestimated,
        plural(metrics.unestimated, "story", "stories")
    )
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_SPECIFIED)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
