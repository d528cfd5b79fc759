use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Irrigation,
    Fertilizer,
    Disease,
    Weather,
    Energy,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Irrigation => "irrigation",
            Category::Fertilizer => "fertilizer",
            Category::Disease => "disease",
            Category::Weather => "weather",
            Category::Energy => "energy",
        }
    }

    /// Loose parse for category keywords coming back from the text-generation
    /// capability. Unrecognized input yields `None`.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "irrigation" => Some(Category::Irrigation),
            "fertilizer" => Some(Category::Fertilizer),
            "disease" => Some(Category::Disease),
            "weather" => Some(Category::Weather),
            "energy" => Some(Category::Energy),
            _ => None,
        }
    }

    /// Fixed catalog of follow-up actions offered to the UI as buttons,
    /// keyed by category alone.
    pub fn follow_up_actions(&self) -> Vec<FollowUpAction> {
        let pairs: &[(&str, &str)] = match self {
            Category::Irrigation => &[
                ("Schedule Irrigation", "schedule_irrigation"),
                ("View Water Usage", "view_water_usage"),
            ],
            Category::Fertilizer => &[
                ("Order Fertilizer", "order_fertilizer"),
                ("Calculate Amount", "calculate_fertilizer"),
            ],
            Category::Disease => &[
                ("View Prevention Tips", "view_prevention"),
                ("Contact Expert", "contact_expert"),
            ],
            Category::Weather => &[
                ("View Forecast", "view_forecast"),
                ("Adjust Schedule", "adjust_schedule"),
            ],
            Category::Energy => &[
                ("Maintenance Guide", "solar_maintenance"),
                ("View Usage", "view_energy_usage"),
            ],
        };
        pairs.iter().map(|(label, action)| FollowUpAction::new(label, action)).collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort key: high sorts before medium sorts before low.
    pub fn ordinal(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A follow-up button the UI layer renders next to a recommendation. The
/// `action` string is an opaque identifier consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpAction {
    pub label: String,
    pub action: String,
}

impl FollowUpAction {
    pub fn new(label: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: Category,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_required: bool,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
    pub actions: Vec<FollowUpAction>,
}

impl Recommendation {
    /// Build a recommendation with the category's catalog actions attached.
    /// The id is the prefix plus the creation instant in milliseconds.
    pub fn new(
        id_prefix: &str,
        category: Category,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: format!("{}-{}", id_prefix, now.timestamp_millis()),
            category,
            priority,
            title: title.into(),
            description: description.into(),
            action_required: true,
            confidence: 0.85,
            created_at: now,
            actions: category.follow_up_actions(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_action_required(mut self, required: bool) -> Self {
        self.action_required = required;
        self
    }
}
