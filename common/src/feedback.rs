use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use tracing::debug;

use api::feedback::*;

// feedback store
//
// an ordered, append-only list of feedback entries, most recent first.  the
// store owns id and date assignment and fills in every default; it performs no
// validation of the draft (the form requires title and description before it
// calls submit())
//
// ids are derived from the creation time in milliseconds, but are bumped past
// the last assigned id whenever the clock has not advanced, so two submissions
// in the same millisecond still get distinct, increasing ids
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackStore {
    entries: Vec<FeedbackEntry>,
    last_id: FeedbackUuid,
}

impl FeedbackStore {
    pub fn new(entries: Vec<FeedbackEntry>) -> Self {
        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);

        FeedbackStore { entries, last_id }
    }

    pub fn seeded() -> Self {
        Self::new(seed_entries())
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: FeedbackUuid) -> Option<&FeedbackEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    // entries are dated by the utc calendar day, whatever the browser's zone
    pub fn submit(&mut self, draft: FeedbackDraft) -> &FeedbackEntry {
        self.submit_at(draft, Utc::now())
    }

    pub fn submit_at(&mut self, draft: FeedbackDraft, now: DateTime<Utc>) -> &FeedbackEntry {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = stamp.max(self.last_id + 1);
        self.last_id = id;

        let entry = FeedbackEntry {
            id,
            title: draft.title,
            description: draft.description,
            author: non_empty_or(draft.author, ANONYMOUS_AUTHOR),
            category: non_empty_or(draft.category, GENERAL_CATEGORY),
            date: now.format(crate::DATE_FORMAT).to_string(),
            status: FeedbackStatus::Planned,
            priority: Priority::Medium,
            upvotes: 0,
            downvotes: 0,
            comments: 0,
        };

        debug!(id = entry.id, category = %entry.category, "storing feedback");

        self.entries.insert(0, entry);
        &self.entries[0]
    }

    // filtered, sorted projection for the review list
    //
    // Newest is the store order; the other orders are stable, so ties keep the
    // store order as well
    pub fn view(&self, filter: FeedbackFilter, sort: FeedbackSort) -> Vec<&FeedbackEntry> {
        let mut view: Vec<&FeedbackEntry> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect();

        match sort {
            FeedbackSort::Newest => {}
            FeedbackSort::Oldest => view.reverse(),
            FeedbackSort::Popular => view.sort_by_key(|entry| Reverse(entry.upvotes)),
            FeedbackSort::Discussed => view.sort_by_key(|entry| Reverse(entry.comments)),
        }

        view
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => String::from(fallback),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackFilter {
    #[default]
    All,
    Status(FeedbackStatus),
}

impl FeedbackFilter {
    pub fn matches(self, entry: &FeedbackEntry) -> bool {
        match self {
            FeedbackFilter::All => true,
            FeedbackFilter::Status(status) => entry.status == status,
        }
    }

    // the value used by the filter select
    pub fn as_value(self) -> String {
        match self {
            FeedbackFilter::All => String::from("all"),
            FeedbackFilter::Status(status) => status.to_string(),
        }
    }
}

impl From<String> for FeedbackFilter {
    fn from(value: String) -> Self {
        match FeedbackStatus::try_from(value.as_str()) {
            Ok(status) => FeedbackFilter::Status(status),
            Err(_) => FeedbackFilter::All,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackSort {
    #[default]
    Newest,
    Oldest,
    Popular,
    Discussed,
}

impl FeedbackSort {
    pub fn all() -> Vec<Self> {
        vec![Self::Newest, Self::Oldest, Self::Popular, Self::Discussed]
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::Discussed => "comments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Popular => "Most Popular",
            Self::Discussed => "Most Discussed",
        }
    }
}

impl From<String> for FeedbackSort {
    fn from(value: String) -> Self {
        Self::all()
            .into_iter()
            .find(|sort| sort.as_value() == value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn submit_prepends_exactly_one_entry() {
        let mut store = FeedbackStore::seeded();
        let before = store.len();

        store.submit(FeedbackDraft::new("Crisp", "Loved it"));

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.entries()[0].title, "Crisp");
        assert_eq!(store.entries()[1].id, 1);
    }

    #[test]
    fn submitted_entries_get_fixed_defaults() {
        let mut store = FeedbackStore::new(Vec::new());

        let drafts = vec![
            FeedbackDraft::new("a", "b"),
            FeedbackDraft::new("c", "d").author("me@example.com").category("Question"),
        ];

        for draft in drafts {
            let entry = store.submit(draft).clone();
            assert_eq!(entry.status, FeedbackStatus::Planned);
            assert_eq!(entry.priority, Priority::Medium);
            assert_eq!((entry.upvotes, entry.downvotes, entry.comments), (0, 0, 0));
        }
    }

    #[test]
    fn missing_or_empty_author_is_anonymous() {
        let mut store = FeedbackStore::new(Vec::new());

        assert_eq!(store.submit(FeedbackDraft::new("a", "b")).author, ANONYMOUS_AUTHOR);
        assert_eq!(store.submit(FeedbackDraft::new("a", "b").author("")).author, ANONYMOUS_AUTHOR);
        assert_eq!(store.submit(FeedbackDraft::new("a", "b").author("Kavya")).author, "Kavya");
    }

    #[test]
    fn missing_category_is_general() {
        let mut store = FeedbackStore::new(Vec::new());

        assert_eq!(store.submit(FeedbackDraft::new("a", "b")).category, GENERAL_CATEGORY);
        assert_eq!(
            store.submit(FeedbackDraft::new("a", "b").category("Compliment")).category,
            "Compliment"
        );
    }

    #[test]
    fn date_is_stamped_from_the_submission_time() {
        let mut store = FeedbackStore::new(Vec::new());
        let entry = store.submit_at(FeedbackDraft::new("a", "b"), at(2026, 3, 7));
        assert_eq!(entry.date, "2026-03-07");
    }

    #[test]
    fn date_is_the_utc_day_not_the_local_one() {
        let mut store = FeedbackStore::new(Vec::new());

        // 02:00 in Mumbai on the 7th is still the 6th in utc
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let early = ist.with_ymd_and_hms(2026, 3, 7, 2, 0, 0).single().unwrap();

        let entry = store.submit_at(FeedbackDraft::new("a", "b"), early.with_timezone(&Utc));
        assert_eq!(entry.date, "2026-03-06");

        let midnight = Utc.with_ymd_and_hms(2026, 3, 6, 23, 59, 59).single().unwrap();
        let entry = store.submit_at(FeedbackDraft::new("c", "d"), midnight);
        assert_eq!(entry.date, "2026-03-06");
    }

    #[test]
    fn ids_increase_within_the_same_millisecond() {
        let mut store = FeedbackStore::seeded();
        let now = at(2026, 3, 7);

        let first = store.submit_at(FeedbackDraft::new("a", "b"), now).id;
        let second = store.submit_at(FeedbackDraft::new("c", "d"), now).id;

        assert_eq!(first, now.timestamp_millis() as u64);
        assert_eq!(second, first + 1);
    }

    #[test]
    fn ids_never_go_backwards_with_the_clock() {
        let mut store = FeedbackStore::new(Vec::new());

        let first = store.submit_at(FeedbackDraft::new("a", "b"), at(2026, 3, 7)).id;
        let second = store.submit_at(FeedbackDraft::new("c", "d"), at(2025, 1, 1)).id;

        assert!(second > first);
    }

    #[test]
    fn too_sweet_scenario() {
        let mut store = FeedbackStore::seeded();

        store.submit(FeedbackDraft::new("Too sweet", "Reduce sugar").category("Improvement"));

        assert_eq!(store.len(), 4);
        let head = &store.entries()[0];
        assert_eq!(head.title, "Too sweet");
        assert_eq!(head.author, ANONYMOUS_AUTHOR);
        assert_eq!(head.status, FeedbackStatus::Planned);
        assert_eq!(head.category, "Improvement");
    }

    #[test]
    fn view_filters_by_status() {
        let store = FeedbackStore::seeded();

        let planned = store.view(
            FeedbackFilter::Status(FeedbackStatus::Planned),
            FeedbackSort::Newest,
        );
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].id, 3);

        assert!(store
            .view(FeedbackFilter::Status(FeedbackStatus::Rejected), FeedbackSort::Newest)
            .is_empty());
    }

    #[test]
    fn view_sorts_without_touching_the_store() {
        let store = FeedbackStore::seeded();

        let ids = |sort| -> Vec<FeedbackUuid> {
            store.view(FeedbackFilter::All, sort).iter().map(|e| e.id).collect()
        };

        assert_eq!(ids(FeedbackSort::Newest), vec![1, 2, 3]);
        assert_eq!(ids(FeedbackSort::Oldest), vec![3, 2, 1]);
        assert_eq!(ids(FeedbackSort::Popular), vec![2, 3, 1]);
        assert_eq!(ids(FeedbackSort::Discussed), vec![2, 1, 3]);

        assert_eq!(store.entries()[0].id, 1);
    }

    #[test]
    fn select_values_parse_back() {
        assert_eq!(FeedbackFilter::from(String::from("all")), FeedbackFilter::All);
        assert_eq!(
            FeedbackFilter::from(String::from("In Progress")),
            FeedbackFilter::Status(FeedbackStatus::InProgress)
        );
        for sort in FeedbackSort::all() {
            assert_eq!(FeedbackSort::from(sort.as_value().to_owned()), sort);
        }
        assert_eq!(FeedbackSort::from(String::from("bogus")), FeedbackSort::Newest);
    }

    #[test]
    fn get_finds_by_id() {
        let store = FeedbackStore::seeded();
        assert_eq!(store.get(2).map(|e| e.author.as_str()), Some("Priya Sharma"));
        assert!(store.get(42).is_none());
    }
}
