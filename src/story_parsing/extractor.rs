//! Field extraction for a single story block.
//!
//! Narrative extraction runs an ordered list of strategies (Gherkin, BDD
//! steps, free-form) and keeps the first that matches. Acceptance criteria,
//! priority and story points are scanned independently of the narrative
//! format and merged into the same [`StoryFields`].

use super::types::{Priority, StoryFields, StoryFormat};
use once_cell::sync::Lazy;
use regex::Regex;

static GHERKIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\bas\s+an?\s+(.+?)\s*,?\s+i\s+(?:want|would\s+like|need)\s+(.+?)\s*,?\s+so\s+that\s+(.+?)\s*[.!?]*\s*$",
    )
    .expect("valid gherkin regex")
});

static STEP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*+•]\s*)?(?:given|when|then|and|but)\s+\S")
        .expect("valid step regex")
});

static CRITERIA_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*+•]\s*)?(?:acceptance\s+criteri(?:a|on)|ac)\s*:\s*(.*)$")
        .expect("valid criteria header regex")
});

static PRIORITY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*+•]\s*)?(?:priority|prio)\s*:").expect("valid priority line regex")
});

static POINTS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*+•]\s*)?(?:story\s+points?|points?|sp)\s*:")
        .expect("valid points line regex")
});

static PRIORITY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:priority|prio)\s*:\s*(\w+)").expect("valid priority regex")
});

static POINTS_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:story\s+points?|points?|sp)\s*:[ \t]*(\S*)").expect("valid points regex")
});

static BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?:[-*+•]|\[[ xX]?\])\s*|\d+[.)]\s+)+").expect("valid bullet regex")
});

/// Role of a single line within a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Narrative,
    Step,
    Priority,
    Points,
    CriteriaHeader,
    CriteriaItem,
}

struct ClassifiedBlock<'a> {
    lines: Vec<(LineKind, &'a str)>,
}

impl<'a> ClassifiedBlock<'a> {
    fn new(block: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut seen_header = false;
        let mut in_criteria = false;

        for line in block.lines() {
            let kind = if line.trim().is_empty() {
                LineKind::Blank
            } else if PRIORITY_LINE.is_match(line) {
                in_criteria = false;
                LineKind::Priority
            } else if POINTS_LINE.is_match(line) {
                in_criteria = false;
                LineKind::Points
            } else if CRITERIA_HEADER.is_match(line) {
                // Only the first list is honoured; later headers close it.
                in_criteria = !seen_header;
                seen_header = true;
                LineKind::CriteriaHeader
            } else if in_criteria {
                LineKind::CriteriaItem
            } else if STEP_LINE.is_match(line) {
                LineKind::Step
            } else {
                LineKind::Narrative
            };
            lines.push((kind, line));
        }

        Self { lines }
    }

    fn of_kind(&self, kind: LineKind) -> impl Iterator<Item = &'a str> + '_ {
        self.lines
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, line)| *line)
    }

    fn narrative_text(&self) -> Option<String> {
        join_lines(self.of_kind(LineKind::Narrative))
    }

    /// Every line of the block, metadata included
    fn full_text(&self) -> Option<String> {
        join_lines(self.lines.iter().map(|(_, line)| *line))
    }

    fn first_of_kind(&self, kind: LineKind) -> Option<&'a str> {
        self.of_kind(kind).next()
    }
}

/// Outcome of a narrative strategy
#[derive(Debug, Default)]
struct Narrative {
    format: Option<StoryFormat>,
    persona: Option<String>,
    action: Option<String>,
    benefit: Option<String>,
    headline: Option<String>,
    description: Option<String>,
}

type NarrativeStrategy = fn(&ClassifiedBlock) -> Option<Narrative>;

/// Narrative strategies in precedence order; the first match wins.
const NARRATIVE_STRATEGIES: [(&str, NarrativeStrategy); 3] = [
    ("gherkin", gherkin_narrative),
    ("bdd_steps", bdd_steps_narrative),
    ("free_form", free_form_narrative),
];

/// Extract whatever fields can be recognized in one story block.
///
/// Never fails: categories that do not match stay absent.
pub fn extract(block: &str) -> StoryFields {
    let classified = ClassifiedBlock::new(block);

    let narrative = NARRATIVE_STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            strategy(&classified).map(|narrative| {
                log::debug!("Narrative strategy '{}' matched", name);
                narrative
            })
        })
        .unwrap_or_default();

    let raw_steps: Vec<String> = classified
        .of_kind(LineKind::Step)
        .map(|line| line.trim().to_string())
        .collect();

    let mut acceptance_criteria = extract_acceptance_criteria(&classified);
    if narrative.format == Some(StoryFormat::Gherkin) && !raw_steps.is_empty() {
        acceptance_criteria
            .get_or_insert_with(Vec::new)
            .extend(raw_steps.iter().map(|step| strip_bullet(step)));
    }

    StoryFields {
        format: narrative.format,
        persona: narrative.persona,
        action: narrative.action,
        benefit: narrative.benefit,
        headline: narrative.headline,
        description: narrative.description,
        raw_steps,
        acceptance_criteria,
        priority: extract_priority(&classified),
        story_points: extract_story_points(&classified),
    }
}

fn gherkin_narrative(block: &ClassifiedBlock) -> Option<Narrative> {
    let text = block.narrative_text()?;
    let captures = GHERKIN.captures(&text)?;

    let persona = captures.get(1)?.as_str().trim().to_string();
    let action = captures.get(2)?.as_str().trim().to_string();
    let benefit = captures.get(3)?.as_str().trim().to_string();
    if persona.is_empty() || action.is_empty() {
        return None;
    }

    let headline = format!("{}: {}", capitalize(&persona), strip_infinitive(&action));

    Some(Narrative {
        format: Some(StoryFormat::Gherkin),
        persona: Some(persona),
        action: Some(action),
        benefit: Some(benefit).filter(|b| !b.is_empty()),
        headline: Some(headline),
        description: Some(text),
    })
}

fn bdd_steps_narrative(block: &ClassifiedBlock) -> Option<Narrative> {
    let first_step = block
        .lines
        .iter()
        .position(|(kind, _)| *kind == LineKind::Step)?;

    // A narrative line ahead of the steps names the scenario.
    let headline = block.lines[..first_step]
        .iter()
        .find(|(kind, _)| *kind == LineKind::Narrative)
        .or_else(|| block.lines.get(first_step))
        .map(|(_, line)| line.trim().to_string());

    let description = join_lines(block.of_kind(LineKind::Step))?;

    Some(Narrative {
        format: Some(StoryFormat::BddSteps),
        headline,
        description: Some(description),
        ..Narrative::default()
    })
}

fn free_form_narrative(block: &ClassifiedBlock) -> Option<Narrative> {
    // A block made only of metadata lines still names a story.
    let description = block.narrative_text().or_else(|| block.full_text())?;
    let headline = description.lines().next().map(|line| line.trim().to_string());

    Some(Narrative {
        format: Some(StoryFormat::FreeForm),
        headline,
        description: Some(description),
        ..Narrative::default()
    })
}

fn extract_acceptance_criteria(block: &ClassifiedBlock) -> Option<Vec<String>> {
    let header = block.of_kind(LineKind::CriteriaHeader).next()?;

    let mut criteria = Vec::new();
    if let Some(inline) = CRITERIA_HEADER
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
    {
        if !inline.is_empty() {
            criteria.push(inline.to_string());
        }
    }

    criteria.extend(
        block
            .of_kind(LineKind::CriteriaItem)
            .map(strip_bullet)
            .filter(|item| !item.is_empty()),
    );

    Some(criteria)
}

fn extract_priority(block: &ClassifiedBlock) -> Option<Priority> {
    let line = block.first_of_kind(LineKind::Priority)?;
    let token = PRIORITY_VALUE.captures(line)?.get(1)?.as_str();
    let priority = Priority::from_token(token);
    if priority.is_none() {
        log::debug!("Ignoring unrecognized priority token '{}'", token);
    }
    priority
}

fn extract_story_points(block: &ClassifiedBlock) -> Option<u32> {
    let line = block.first_of_kind(LineKind::Points)?;
    let token = POINTS_VALUE.captures(line)?.get(1)?.as_str();
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        log::debug!("Ignoring non-numeric story points '{}'", token);
        return None;
    }
    digits.parse().ok()
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = lines.map(str::trim_end).collect::<Vec<_>>().join("\n");
    let joined = joined.trim();
    if joined.is_empty() {
        None
    } else {
        Some(joined.to_string())
    }
}

fn strip_bullet(line: &str) -> String {
    BULLET.replace(line, "").trim().to_string()
}

/// Drop a leading "to " from an action clause ("to reset" -> "reset").
pub(crate) fn strip_infinitive(action: &str) -> &str {
    let trimmed = action.trim();
    match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("to ") => trimmed[3..].trim_start(),
        _ => trimmed,
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
