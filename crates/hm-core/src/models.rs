use serde::{Deserialize, Serialize};

/// Default experience level for a freshly created profile
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "Beginner";

/// Default learning path for a freshly created profile
pub const DEFAULT_LEARNING_PATH: &str = "Mobile Development";

/// Interview topic as served by the topic API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Topic identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Difficulty label (e.g. "Junior", "Middle", "Senior")
    pub difficulty: String,
    /// Category label (e.g. "Backend", "Mobile")
    pub category: String,
    /// Number of questions available for the topic
    pub questions_count: u32,
    /// Human readable duration estimate (e.g. "45 min")
    pub estimated_time: String,
    /// Icon reference understood by the presentation layer
    pub icon: String,
    /// Ordered learning objectives
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Ordered prerequisites
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Topic plus the material shown on its detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    /// The topic itself
    pub topic: Topic,
    /// Ordered sample questions
    #[serde(default)]
    pub sample_questions: Vec<String>,
    /// Ordered skills covered by the topic
    #[serde(default)]
    pub skills_covered: Vec<String>,
    /// Completion fraction between 0.0 and 1.0
    #[serde(default)]
    pub completion_rate: f32,
}

/// One profile document per authenticated user, keyed by `uid`
///
/// Fields missing from a stored document decode to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub uid: String,
    pub name: String,
    pub role: String,
    pub goal: String,
    pub experience_level: String,
    pub learning_path: String,
    /// Readiness counter, zero on creation
    pub ready_meter: i32,
    pub profile_photo_url: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            uid: String::new(),
            name: String::new(),
            role: String::new(),
            goal: String::new(),
            experience_level: DEFAULT_EXPERIENCE_LEVEL.to_string(),
            learning_path: DEFAULT_LEARNING_PATH.to_string(),
            ready_meter: 0,
            profile_photo_url: String::new(),
        }
    }
}

impl UserProfile {
    /// Empty profile for the given user with every other field defaulted
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Overwrite the fields touched by a profile edit
    pub fn apply_details(&mut self, details: &ProfileDetails) {
        self.name.clone_from(&details.name);
        self.role.clone_from(&details.role);
        self.goal.clone_from(&details.goal);
    }

    /// Overwrite the fields touched by onboarding, resetting the readiness counter
    pub fn apply_onboarding(&mut self, data: &OnboardingData) {
        self.name.clone_from(&data.name);
        self.experience_level.clone_from(&data.experience_level);
        self.learning_path.clone_from(&data.learning_path);
        self.goal.clone_from(&data.goal);
        self.ready_meter = 0;
    }
}

/// Fields written by a profile edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub name: String,
    pub role: String,
    pub goal: String,
}

/// Fields written when onboarding completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub name: String,
    pub experience_level: String,
    pub learning_path: String,
    pub goal: String,
}
