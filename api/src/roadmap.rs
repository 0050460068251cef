use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feedback::Priority;

// static planning records shown on the brewing plans page
//
// these are not derived from the feedback list

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Planned,
}

impl RoadmapStatus {
    // legend order
    pub fn all() -> Vec<Self> {
        vec![Self::Completed, Self::InProgress, Self::Planned]
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Completed => "roadmap-completed",
            Self::InProgress => "roadmap-in-progress",
            Self::Planned => "roadmap-planned",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Completed => "✔",
            Self::InProgress => "◷",
            Self::Planned => "○",
        }
    }
}

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: RoadmapStatus,
    pub priority: Priority,
    pub votes: u32,
    pub estimated_completion: String,
    pub team: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapQuarter {
    pub label: String,
    pub items: Vec<RoadmapItem>,
}

fn item(
    id: u32,
    title: &str,
    description: &str,
    status: RoadmapStatus,
    priority: Priority,
    votes: u32,
    estimated_completion: &str,
    team: &str,
) -> RoadmapItem {
    RoadmapItem {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        status,
        priority,
        votes,
        estimated_completion: estimated_completion.to_owned(),
        team: team.to_owned(),
    }
}

pub fn roadmap() -> Vec<RoadmapQuarter> {
    vec![
        RoadmapQuarter {
            label: String::from("Q1 2024"),
            items: vec![
                item(
                    1,
                    "Mango IPA Launch",
                    "New seasonal IPA with fresh mango flavors and tropical hop profile",
                    RoadmapStatus::Completed,
                    Priority::High,
                    287,
                    "2024-02-15",
                    "Brewing",
                ),
                item(
                    2,
                    "Reduce Kingfisher Bitterness",
                    "Adjust hop schedule to create smoother, more balanced flavor profile",
                    RoadmapStatus::InProgress,
                    Priority::High,
                    156,
                    "2024-03-30",
                    "R&D",
                ),
                item(
                    3,
                    "Chocolate Stout Recipe",
                    "Enhance Simba Stout with premium chocolate malt and cocoa nibs",
                    RoadmapStatus::Planned,
                    Priority::Medium,
                    89,
                    "2024-03-15",
                    "Brewing",
                ),
            ],
        },
        RoadmapQuarter {
            label: String::from("Q2 2024"),
            items: vec![
                item(
                    4,
                    "Low-Alcohol Wheat Beer",
                    "Develop 2.5% ABV wheat beer for health-conscious consumers",
                    RoadmapStatus::Planned,
                    Priority::High,
                    234,
                    "2024-05-20",
                    "Innovation",
                ),
                item(
                    5,
                    "Craft Beer Taproom",
                    "Open exclusive taproom featuring limited edition brews",
                    RoadmapStatus::Planned,
                    Priority::Medium,
                    345,
                    "2024-06-10",
                    "Operations",
                ),
            ],
        },
    ]
}

// items for a quarter label, or nothing if the label is unknown
pub fn quarter_items<'a>(quarters: &'a [RoadmapQuarter], label: &str) -> &'a [RoadmapItem] {
    quarters
        .iter()
        .find(|quarter| quarter.label == label)
        .map(|quarter| quarter.items.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarters_are_in_display_order() {
        let labels: Vec<String> = roadmap().into_iter().map(|q| q.label).collect();
        assert_eq!(labels, vec!["Q1 2024", "Q2 2024"]);
    }

    #[test]
    fn quarter_lookup() {
        let quarters = roadmap();
        assert_eq!(quarter_items(&quarters, "Q1 2024").len(), 3);
        assert_eq!(quarter_items(&quarters, "Q2 2024")[1].title, "Craft Beer Taproom");
        assert!(quarter_items(&quarters, "Q3 2024").is_empty());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&RoadmapStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(RoadmapStatus::InProgress.to_string(), "In Progress");
    }
}
