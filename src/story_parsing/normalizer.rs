use super::types::{StoryFields, StoryFormat, UserStory};
use crate::settings::ParserSettings;

const ELLIPSIS: &str = "...";

/// Reconcile extracted fields into a complete story, applying defaults.
///
/// Returns `None` only when neither a title nor a description survives
/// every fallback; malformed but non-empty text always yields a story.
pub fn normalize(fields: StoryFields, settings: &ParserSettings) -> Option<UserStory> {
    let format = fields.format.unwrap_or(StoryFormat::FreeForm);

    // Only free-form text is bounded; structured narratives stay verbatim.
    let description = fields
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| match format {
            StoryFormat::FreeForm => truncate_chars(d, settings.description_max_chars),
            StoryFormat::Gherkin | StoryFormat::BddSteps => d.to_string(),
        });

    let title_source = fields
        .headline
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| {
            description
                .as_deref()
                .and_then(|d| d.lines().map(str::trim).find(|l| !l.is_empty()))
                .map(str::to_string)
        });

    let (title, description) = match (title_source, description) {
        (None, None) => return None,
        (Some(title), None) => (title.clone(), title),
        (None, Some(description)) => (description.clone(), description),
        (Some(title), Some(description)) => (title, description),
    };

    Some(UserStory {
        title: truncate_with_ellipsis(&title, settings.title_max_chars),
        description,
        acceptance_criteria: fields.acceptance_criteria.unwrap_or_default(),
        priority: fields.priority.unwrap_or_default(),
        story_points: fields.story_points,
        format,
        persona: fields.persona,
        action: fields.action,
        benefit: fields.benefit,
    })
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].trim_end().to_string(),
        None => s.to_string(),
    }
}

fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    format!("{}{}", truncate_chars(s, keep), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story_parsing::types::Priority;

    fn settings() -> ParserSettings {
        ParserSettings::default()
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        assert!(normalize(StoryFields::default(), &settings()).is_none());

        let blank = StoryFields {
            headline: Some("   ".to_string()),
            description: Some("\n".to_string()),
            ..StoryFields::default()
        };
        assert!(normalize(blank, &settings()).is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let fields = StoryFields {
            format: Some(StoryFormat::FreeForm),
            headline: Some("Export reports".to_string()),
            description: Some("Export reports\nas CSV".to_string()),
            ..StoryFields::default()
        };

        let story = normalize(fields, &settings()).unwrap();
        assert_eq!(story.title, "Export reports");
        assert_eq!(story.description, "Export reports\nas CSV");
        assert_eq!(story.priority, Priority::Medium);
        assert_eq!(story.story_points, None);
        assert!(story.acceptance_criteria.is_empty());
    }

    #[test]
    fn test_title_falls_back_to_description() {
        let fields = StoryFields {
            description: Some("\n  First line\nSecond line".to_string()),
            ..StoryFields::default()
        };
        let story = normalize(fields, &settings()).unwrap();
        assert_eq!(story.title, "First line");
        assert_eq!(story.format, StoryFormat::FreeForm);
    }

    #[test]
    fn test_description_falls_back_to_title() {
        let fields = StoryFields {
            headline: Some("Only a title".to_string()),
            ..StoryFields::default()
        };
        let story = normalize(fields, &settings()).unwrap();
        assert_eq!(story.description, "Only a title");
    }

    #[test]
    fn test_long_title_is_truncated() {
        let long = "x".repeat(150);
        let fields = StoryFields {
            headline: Some(long.clone()),
            description: Some(long),
            ..StoryFields::default()
        };
        let story = normalize(fields, &settings()).unwrap();
        assert_eq!(story.title.chars().count(), 100);
        assert!(story.title.ends_with("..."));
        assert_eq!(story.description.len(), 150);
    }

    #[test]
    fn test_description_is_bounded() {
        let bounded = ParserSettings {
            title_max_chars: 10,
            description_max_chars: 20,
        };
        let fields = StoryFields {
            description: Some("é".repeat(50)),
            ..StoryFields::default()
        };
        let story = normalize(fields, &bounded).unwrap();
        assert_eq!(story.description.chars().count(), 20);
        assert_eq!(story.title.chars().count(), 10);
    }

    #[test]
    fn test_structured_descriptions_are_not_bounded() {
        let bounded = ParserSettings {
            title_max_chars: 10,
            description_max_chars: 20,
        };
        let steps = "Given a user\nWhen they open the very long settings page\nThen it loads";
        let fields = StoryFields {
            format: Some(StoryFormat::BddSteps),
            headline: Some("Given a user".to_string()),
            description: Some(steps.to_string()),
            ..StoryFields::default()
        };
        let story = normalize(fields, &bounded).unwrap();
        assert_eq!(story.description, steps);
        assert_eq!(story.title, "Given a...");
    }

    #[test]
    fn test_truncate_helpers() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 6), "hello");
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghijk", 8), "abcde...");
    }
}
