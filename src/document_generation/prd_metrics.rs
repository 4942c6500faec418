use crate::story_parsing::{Priority, UserStory};

/// Aggregate figures shared by the Executive Summary and Success Metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoryMetrics {
    pub story_count: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Sum over stories that carry an estimate
    pub total_points: u64,
    pub estimated: usize,
    pub unestimated: usize,
    pub criteria_count: usize,
}

impl StoryMetrics {
    pub fn from_stories(stories: &[UserStory]) -> Self {
        let mut metrics = StoryMetrics {
            story_count: stories.len(),
            ..StoryMetrics::default()
        };

        for story in stories {
            match story.priority {
                Priority::High => metrics.high += 1,
                Priority::Medium => metrics.medium += 1,
                Priority::Low => metrics.low += 1,
            }
            match story.story_points {
                Some(points) => {
                    metrics.total_points += u64::from(points);
                    metrics.estimated += 1;
                }
                None => metrics.unestimated += 1,
            }
            metrics.criteria_count += story.acceptance_criteria.len();
        }

        metrics
    }

    pub fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// "High 2, Medium 1, Low 0"
    pub fn priority_distribution(&self) -> String {
        Priority::ALL
            .iter()
            .map(|p| format!("{} {}", p, self.count_for(*p)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
