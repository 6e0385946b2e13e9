//! Static topic catalog
//!
//! The catalog backs the topic API server and is the fallback data set the
//! client substitutes when a live fetch fails.

use std::{collections::HashMap, sync::LazyLock};

use crate::models::{Topic, TopicDetail};

static FALLBACK: LazyLock<TopicCatalog> =
    LazyLock::new(|| TopicCatalog::from_details(fallback_details()));

/// Ordered topic list with a detail entry per topic id
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    details: HashMap<String, TopicDetail>,
}

impl TopicCatalog {
    /// Build a catalog from detail records, keeping their order for the topic list
    ///
    /// A later record with an already seen id replaces the earlier one in place.
    pub fn from_details(details: Vec<TopicDetail>) -> Self {
        let mut topics: Vec<Topic> = Vec::with_capacity(details.len());
        let mut by_id = HashMap::with_capacity(details.len());

        for detail in details {
            match topics.iter_mut().find(|t| t.id == detail.topic.id) {
                Some(existing) => *existing = detail.topic.clone(),
                None => topics.push(detail.topic.clone()),
            }
            by_id.insert(detail.topic.id.clone(), detail);
        }

        Self {
            topics,
            details: by_id,
        }
    }

    /// The built-in catalog of four interview topics
    pub fn fallback() -> &'static Self {
        &FALLBACK
    }

    /// Topics in catalog order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Detail of a topic, if the topic exists
    pub fn detail(&self, id: &str) -> Option<&TopicDetail> {
        self.details.get(id)
    }

    /// Sample questions of a topic, if the topic exists
    pub fn questions(&self, id: &str) -> Option<&[String]> {
        self.details.get(id).map(|d| d.sample_questions.as_slice())
    }

    /// Number of topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the catalog has no topics
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn fallback_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: "1".to_string(),
            title: "Object-Oriented Programming".to_string(),
            description: "Core OOP concepts: encapsulation and inheritance.".to_string(),
            difficulty: "Junior".to_string(),
            category: "Backend".to_string(),
            questions_count: 24,
            estimated_time: "45 min".to_string(),
            icon: "backend".to_string(),
            objectives: strings(&[
                "Understand encapsulation and data hiding",
                "Master inheritance and polymorphism",
                "Learn abstraction principles",
            ]),
            prerequisites: strings(&["Basic programming knowledge", "Understanding of classes"]),
        },
        Topic {
            id: "2".to_string(),
            title: "Kotlin Coroutines".to_string(),
            description: "Structured concurrency and Flow.".to_string(),
            difficulty: "Middle".to_string(),
            category: "Mobile".to_string(),
            questions_count: 32,
            estimated_time: "60 min".to_string(),
            icon: "mobile".to_string(),
            objectives: strings(&[
                "Master async programming with coroutines",
                "Understand Flow and StateFlow",
                "Handle cancellation and exceptions",
            ]),
            prerequisites: strings(&["Kotlin basics", "Understanding of threads"]),
        },
        Topic {
            id: "3".to_string(),
            title: "Jetpack Compose".to_string(),
            description: "Modern declarative UI and State management.".to_string(),
            difficulty: "Middle".to_string(),
            category: "Mobile".to_string(),
            questions_count: 28,
            estimated_time: "55 min".to_string(),
            icon: "mobile".to_string(),
            objectives: strings(&[
                "Build declarative UIs",
                "Manage state effectively",
                "Create reusable composables",
            ]),
            prerequisites: strings(&["Android basics", "Kotlin knowledge"]),
        },
        Topic {
            id: "4".to_string(),
            title: "Clean Architecture".to_string(),
            description: "SOLID principles and layered architecture.".to_string(),
            difficulty: "Senior".to_string(),
            category: "Architecture".to_string(),
            questions_count: 20,
            estimated_time: "50 min".to_string(),
            icon: "architecture".to_string(),
            objectives: strings(&[
                "Apply SOLID principles",
                "Design scalable architectures",
                "Separate concerns effectively",
            ]),
            prerequisites: strings(&["Design patterns", "Software engineering experience"]),
        },
    ]
}

struct DetailExtras {
    sample_questions: &'static [&'static str],
    skills_covered: &'static [&'static str],
    completion_rate: f32,
}

static FALLBACK_EXTRAS: [DetailExtras; 4] = [
    DetailExtras {
        sample_questions: &[
            "What is encapsulation and why is it important?",
            "Explain the difference between inheritance and composition",
            "How does polymorphism work in OOP?",
        ],
        skills_covered: &[
            "Encapsulation",
            "Inheritance",
            "Polymorphism",
            "Abstraction",
            "Design Patterns",
        ],
        completion_rate: 0.65,
    },
    DetailExtras {
        sample_questions: &[
            "What is the difference between launch and async?",
            "How do you handle exceptions in coroutines?",
            "Explain the lifecycle of a coroutine",
        ],
        skills_covered: &[
            "Coroutine Builders",
            "Dispatchers",
            "Flow API",
            "Exception Handling",
            "Structured Concurrency",
        ],
        completion_rate: 0.40,
    },
    DetailExtras {
        sample_questions: &[
            "What is recomposition in Compose?",
            "How do you manage state in Compose?",
            "Explain remember vs rememberSaveable",
        ],
        skills_covered: &[
            "Composable Functions",
            "State Management",
            "Side Effects",
            "Recomposition",
            "UI Testing",
        ],
        completion_rate: 0.55,
    },
    DetailExtras {
        sample_questions: &[
            "Explain the SOLID principles",
            "What is dependency injection?",
            "How do you structure a clean architecture project?",
        ],
        skills_covered: &[
            "SOLID Principles",
            "Dependency Injection",
            "Layer Separation",
            "Repository Pattern",
            "Use Cases",
        ],
        completion_rate: 0.30,
    },
];

// Extras are matched to topics by position.
fn fallback_details() -> Vec<TopicDetail> {
    fallback_topics()
        .into_iter()
        .zip(FALLBACK_EXTRAS.iter())
        .map(|(topic, extras)| TopicDetail {
            topic,
            sample_questions: strings(extras.sample_questions),
            skills_covered: strings(extras.skills_covered),
            completion_rate: extras.completion_rate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_four_ordered_topics() {
        let catalog = TopicCatalog::fallback();
        let ids: Vec<&str> = catalog.topics().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_every_topic_has_a_detail() {
        let catalog = TopicCatalog::fallback();
        for topic in catalog.topics() {
            let detail = catalog.detail(&topic.id).expect("detail for topic");
            assert_eq!(&detail.topic, topic);
            assert_eq!(detail.sample_questions.len(), 3);
            assert_eq!(detail.skills_covered.len(), 5);
            assert!((0.0..=1.0).contains(&detail.completion_rate));
        }
    }

    #[test]
    fn test_questions_lookup() {
        let catalog = TopicCatalog::fallback();
        let questions = catalog.questions("2").unwrap();
        assert_eq!(questions[0], "What is the difference between launch and async?");
        assert!(catalog.questions("does-not-exist").is_none());
    }

    #[test]
    fn test_duplicate_ids_replace_in_place() {
        let mut details = fallback_details();
        let mut replacement = details[0].clone();
        replacement.topic.title = "OOP Revisited".to_string();
        details.push(replacement);

        let catalog = TopicCatalog::from_details(details);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.topics()[0].title, "OOP Revisited");
        assert_eq!(catalog.detail("1").unwrap().topic.title, "OOP Revisited");
    }
}
