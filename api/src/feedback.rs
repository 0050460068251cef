use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types

pub type FeedbackUuid = u64;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";
pub const GENERAL_CATEGORY: &str = "General Feedback";

// the categories offered by the feedback form
//
// seed entries may carry other labels (e.g. "Taste Feedback"), so the category
// on an entry is a plain string rather than an enum
pub const FEEDBACK_CATEGORIES: [&str; 6] = [
    "Bug Report",
    "Feature Request",
    "Improvement",
    "Compliment",
    "Question",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Rejected,
}

impl FeedbackStatus {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Planned,
            Self::InProgress,
            Self::Completed,
            Self::Rejected,
        ]
    }

    // the badge class used by the list and the details modal
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Planned => "status-planned",
            Self::InProgress => "status-in-progress",
            Self::Completed => "status-completed",
            Self::Rejected => "status-rejected",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Planned => "Planned",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        };
        write!(f, "{}", name)
    }
}

impl TryFrom<&str> for FeedbackStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Planned" => Ok(Self::Planned),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(anyhow::Error::msg(format!("unknown feedback status: {value}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "priority-low",
            Self::Medium => "priority-medium",
            Self::High => "priority-high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{}", name)
    }
}

// a single review/comment record
//
// the counters are display-only: nothing in the site mutates them after the
// entry is created
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: FeedbackUuid,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub date: String,
    pub status: FeedbackStatus,
    pub priority: Priority,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: u32,
}

// the user-supplied part of a new entry
//
// the store fills in everything else, including the defaults for author and
// category when these are None or empty
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub title: String,
    pub description: String,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl FeedbackDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        FeedbackDraft {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// the entries present at the start of every session, most recent first
pub fn seed_entries() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            id: 1,
            title: String::from("Kingfisher Ultra tastes too bitter"),
            description: String::from(
                "The hop character is too strong for my taste. Would prefer a smoother, less bitter version.",
            ),
            author: String::from("Rajesh Kumar"),
            category: String::from("Taste Feedback"),
            date: String::from("2024-01-15"),
            status: FeedbackStatus::InProgress,
            priority: Priority::High,
            upvotes: 47,
            downvotes: 12,
            comments: 23,
        },
        FeedbackEntry {
            id: 2,
            title: String::from("Bira 91 White - Perfect summer beer"),
            description: String::from(
                "Love the citrus notes and light texture. Perfect for hot weather. Please keep this recipe unchanged.",
            ),
            author: String::from("Priya Sharma"),
            category: String::from("Compliment"),
            date: String::from("2024-01-14"),
            status: FeedbackStatus::Completed,
            priority: Priority::Low,
            upvotes: 89,
            downvotes: 3,
            comments: 34,
        },
        FeedbackEntry {
            id: 3,
            title: String::from("Simba Stout - Add more chocolate notes"),
            description: String::from(
                "The coffee flavor is great but would love stronger chocolate undertones. Maybe use chocolate malt?",
            ),
            author: String::from("Arjun Patel"),
            category: String::from("Improvement"),
            date: String::from("2024-01-13"),
            status: FeedbackStatus::Planned,
            priority: Priority::Medium,
            upvotes: 56,
            downvotes: 8,
            comments: 18,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&FeedbackStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: FeedbackStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, FeedbackStatus::Completed);
    }

    #[test]
    fn priority_is_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn status_parses_from_select_values() {
        for status in FeedbackStatus::all() {
            let label = status.to_string();
            assert_eq!(FeedbackStatus::try_from(label.as_str()).unwrap(), status);
        }
        assert!(FeedbackStatus::try_from("all").is_err());
    }

    #[test]
    fn seed_entries_are_most_recent_first() {
        let seed = seed_entries();
        assert_eq!(seed.len(), 3);
        assert!(seed.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(seed[0].author, "Rajesh Kumar");
    }

    #[test]
    fn draft_builder_sets_optional_fields() {
        let draft = FeedbackDraft::new("Too sweet", "Reduce sugar").category("Improvement");
        assert_eq!(draft.category.as_deref(), Some("Improvement"));
        assert_eq!(draft.author, None);
    }
}
