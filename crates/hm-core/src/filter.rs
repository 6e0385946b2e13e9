//! Filtering and ordering of topic lists for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{models::Topic, normalization::contains_normalized};

/// Selector value that disables a constraint
pub const ALL: &str = "All";

/// Difficulty labels from easiest to hardest
pub const DIFFICULTY_ORDER: &[&str] = &["Junior", "Middle", "Senior"];

/// Search and chip selections applied to a topic list
///
/// Absent values and `"All"` impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFilter {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl TopicFilter {
    /// Filter with no constraint
    pub fn new() -> Self {
        Self::default()
    }

    /// Match titles containing `query`
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Match one difficulty; `"All"` clears the constraint
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Match one category; `"All"` clears the constraint
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no selection constrains the list
    pub fn is_unconstrained(&self) -> bool {
        self.search.as_deref().is_none_or(|s| s.trim().is_empty())
            && selector(self.difficulty.as_deref()).is_none()
            && selector(self.category.as_deref()).is_none()
    }

    /// Whether `topic` satisfies every set constraint
    pub fn matches(&self, topic: &Topic) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|q| contains_normalized(&topic.title, q));
        let matches_difficulty =
            selector(self.difficulty.as_deref()).is_none_or(|d| topic.difficulty == d);
        let matches_category =
            selector(self.category.as_deref()).is_none_or(|c| topic.category == c);

        matches_search && matches_difficulty && matches_category
    }

    /// Matching topics in their original order
    pub fn apply(&self, topics: &[Topic]) -> Vec<Topic> {
        topics.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

fn selector(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

/// Display orderings for topic lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSort {
    /// Alphabetical by title, ignoring case
    Title,
    /// Most questions first
    QuestionsCount,
    /// Easiest first, unknown labels last
    Difficulty,
}

impl TopicSort {
    /// Stable sort in place
    pub fn sort(self, topics: &mut [Topic]) {
        match self {
            Self::Title => topics.sort_by_key(|t| t.title.to_lowercase()),
            Self::QuestionsCount => {
                topics.sort_by(|a, b| b.questions_count.cmp(&a.questions_count));
            }
            Self::Difficulty => topics.sort_by(compare_difficulty),
        }
    }
}

fn difficulty_rank(label: &str) -> usize {
    DIFFICULTY_ORDER
        .iter()
        .position(|d| d.eq_ignore_ascii_case(label))
        .unwrap_or(DIFFICULTY_ORDER.len())
}

fn compare_difficulty(a: &Topic, b: &Topic) -> Ordering {
    difficulty_rank(&a.difficulty).cmp(&difficulty_rank(&b.difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TopicCatalog;

    fn ids(topics: &[Topic]) -> Vec<&str> {
        topics.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_all_means_no_constraint() {
        let topics = TopicCatalog::fallback().topics();
        let filter = TopicFilter::new().difficulty("All").category("All").search("");

        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(topics).len(), 4);
    }

    #[test]
    fn test_filter_by_difficulty_and_category() {
        let topics = TopicCatalog::fallback().topics();

        let middle = TopicFilter::new().difficulty("Middle").apply(topics);
        assert_eq!(ids(&middle), vec!["2", "3"]);

        let backend = TopicFilter::new().category("Backend").apply(topics);
        assert_eq!(ids(&backend), vec!["1"]);

        let none = TopicFilter::new()
            .difficulty("Senior")
            .category("Mobile")
            .apply(topics);
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_ignores_case_and_accents() {
        let topics = TopicCatalog::fallback().topics();

        let found = TopicFilter::new().search("jetpack").apply(topics);
        assert_eq!(ids(&found), vec!["3"]);

        let found = TopicFilter::new().search("ARCHITÉCTURE").apply(topics);
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[test]
    fn test_search_keeps_punctuation() {
        let topics = TopicCatalog::fallback().topics();

        assert!(TopicFilter::new().search("C++").apply(topics).is_empty());
        assert!(TopicFilter::new().search("#").apply(topics).is_empty());

        let found = TopicFilter::new().search("object-oriented").apply(topics);
        assert_eq!(ids(&found), vec!["1"]);
    }

    #[test]
    fn test_sort_orders() {
        let mut topics = TopicCatalog::fallback().topics().to_vec();

        TopicSort::Title.sort(&mut topics);
        assert_eq!(ids(&topics), vec!["4", "3", "2", "1"]);

        TopicSort::QuestionsCount.sort(&mut topics);
        assert_eq!(ids(&topics), vec!["2", "3", "1", "4"]);

        TopicSort::Difficulty.sort(&mut topics);
        assert_eq!(topics[0].difficulty, "Junior");
        assert_eq!(topics[3].difficulty, "Senior");
    }

    #[test]
    fn test_unknown_difficulty_sorts_last() {
        let mut topics = TopicCatalog::fallback().topics().to_vec();
        topics[0].difficulty = "Principal".to_string();

        TopicSort::Difficulty.sort(&mut topics);
        assert_eq!(topics.last().unwrap().id, "1");
    }
}
