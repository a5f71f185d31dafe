use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Weekly availability: weekday name -> set of time-slot labels
pub type Availability = HashMap<String, HashSet<String>>;

/// Skill title keywords that mark a volunteer as credentialed
pub const SPECIALTY_KEYWORDS: [&str; 3] = ["certified", "professional", "specialist"];

/// A skill the volunteer is willing to contribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
}

/// Volunteer record supplied by the coordination app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "tasksWilling", default)]
    pub tasks_willing: Vec<Skill>,
    #[serde(rename = "hasSpecialty", default)]
    pub has_specialty: Option<bool>,
}

impl Volunteer {
    /// Whether the volunteer self-reports credentials.
    ///
    /// An explicit `hasSpecialty` wins; otherwise any skill title containing
    /// one of [`SPECIALTY_KEYWORDS`] counts.
    pub fn specialist(&self) -> bool {
        self.has_specialty.unwrap_or_else(|| {
            self.tasks_willing.iter().any(|skill| {
                let title = skill.title.to_lowercase();
                SPECIALTY_KEYWORDS.iter().any(|kw| title.contains(kw))
            })
        })
    }

    pub fn skill_titles(&self) -> impl Iterator<Item = &str> {
        self.tasks_willing.iter().map(|skill| skill.title.as_str())
    }
}

/// A task posted by a requester or organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    #[serde(default)]
    pub urgency: i32,
    #[serde(rename = "specialtyRequired", default)]
    pub specialty_required: bool,
    #[serde(default)]
    pub category: String,
}

impl TaskRequest {
    /// Urgency scaled to 0-1. Out-of-range values pass through unchanged.
    #[inline]
    pub fn normalized_urgency(&self) -> f64 {
        self.urgency as f64 / 10.0
    }
}

/// Requester or organization record posting tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "tasksRequested", default)]
    pub tasks_requested: Vec<TaskRequest>,
}

/// Which collection a match was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Requester,
    Organization,
}

/// Best achievable pairing of the volunteer with one posted task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub kind: MatchKind,
    #[serde(rename = "requesterId")]
    pub requester_id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "taskTitle")]
    pub task_title: String,
    pub urgency: i32,
    #[serde(rename = "specialtyRequired")]
    pub specialty_required: bool,
    pub category: String,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub similarity: f64,
    pub urgency: f64,
    pub availability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity: 0.60,
            urgency: 0.05,
            availability: 0.35,
        }
    }
}
