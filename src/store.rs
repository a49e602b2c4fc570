//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The request list
//! lives inside a [`RequestLedger`] which is the only way to read or mutate it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::format::now_iso;
use crate::models::{RequestKey, ServiceRequest};
use crate::status::{RequestStatus, StatusAction};

/// Issued before a fetch; decides whether its response may still be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    generation: u64,
}

/// What happened to a fetched snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Applied,
    /// A newer fetch response was applied first
    Superseded,
    /// An optimistic mutation landed after the fetch was issued
    Stale,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub done: usize,
    pub error: usize,
}

/// In-memory mirror of the backend request list
#[derive(Debug, Clone, Default)]
pub struct RequestLedger {
    requests: Vec<ServiceRequest>,
    /// Bumped by every applied optimistic mutation
    generation: u64,
    issued_seq: u64,
    applied_seq: u64,
}

impl RequestLedger {
    pub fn snapshot(&self) -> &[ServiceRequest] {
        &self.requests
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRequest> {
        self.requests.get(index)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        FetchTicket {
            seq: self.issued_seq,
            generation: self.generation,
        }
    }

    /// Whether no fetch was issued after `ticket`
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.issued_seq
    }

    /// Replace the whole list with a fetched snapshot unless it is outdated
    pub fn replace(&mut self, ticket: FetchTicket, requests: Vec<ServiceRequest>) -> ReplaceOutcome {
        if ticket.seq <= self.applied_seq {
            return ReplaceOutcome::Superseded;
        }
        if ticket.generation != self.generation {
            return ReplaceOutcome::Stale;
        }
        self.requests = requests;
        self.applied_seq = ticket.seq;
        ReplaceOutcome::Applied
    }

    /// Apply an acknowledged status change to the record at `index`.
    /// Returns false when the record moved or the transition is not allowed.
    pub fn apply_transition(
        &mut self,
        index: usize,
        expected: &RequestKey,
        action: StatusAction,
        now: &str,
    ) -> bool {
        let Some(request) = self.requests.get_mut(index) else {
            return false;
        };
        if &request.key() != expected {
            return false;
        }
        let Some(next) = request.status().apply(action) else {
            return false;
        };
        request.status = Some(next.as_str().to_string());
        if next == RequestStatus::Done {
            request.completed = true;
            request.completed_time = now.to_string();
        }
        self.generation += 1;
        true
    }

    /// Remove the record at `index` if it is still the expected one
    pub fn remove(&mut self, index: usize, expected: &RequestKey) -> Option<ServiceRequest> {
        if self.requests.get(index).map(|r| r.key()).as_ref() != Some(expected) {
            return None;
        }
        self.generation += 1;
        Some(self.requests.remove(index))
    }

    pub fn counts(&self) -> StatusCounts {
        self.requests.iter().fold(StatusCounts::default(), |mut acc, r| {
            match r.status() {
                RequestStatus::Pending => acc.pending += 1,
                RequestStatus::Done => acc.done += 1,
                RequestStatus::Error => acc.error += 1,
            }
            acc
        })
    }
}

/// Status filter in the dashboard toolbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => StatusFilter::Only(RequestStatus::Pending),
            "done" => StatusFilter::Only(RequestStatus::Done),
            "error" => StatusFilter::Only(RequestStatus::Error),
            _ => StatusFilter::All,
        }
    }
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Request list and its version counters
    pub ledger: RequestLedger,
    /// Message of the last failed fetch, cleared by any successful render source
    pub load_error: Option<String>,
    pub filter: StatusFilter,
    pub search: String,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Issue a fetch ticket without notifying subscribers
pub fn store_begin_fetch(store: &DashboardStore) -> Option<FetchTicket> {
    store.ledger().try_update_untracked(|ledger| ledger.begin_fetch())
}

/// Identity of the record currently shown at `index`
pub fn store_request_key(store: &DashboardStore, index: usize) -> Option<RequestKey> {
    store
        .ledger()
        .try_with_untracked(|ledger| ledger.get(index).map(|r| r.key()))
        .flatten()
}

/// Apply a fetched snapshot; clears the error row when applied
pub fn store_replace_requests(
    store: &DashboardStore,
    ticket: FetchTicket,
    requests: Vec<ServiceRequest>,
) -> ReplaceOutcome {
    let outcome = store
        .ledger()
        .try_update(|ledger| ledger.replace(ticket, requests))
        .unwrap_or(ReplaceOutcome::Superseded);
    if outcome == ReplaceOutcome::Applied {
        store.load_error().set(None);
    }
    outcome
}

/// Show the fetch failure row; the list itself is left untouched.
/// Failures of fetches overtaken by a newer one, or that land after the
/// dashboard was unmounted, are ignored.
pub fn store_fetch_failed(store: &DashboardStore, ticket: FetchTicket, message: String) -> bool {
    let latest = store
        .ledger()
        .try_with_untracked(|ledger| ledger.is_latest(ticket))
        .unwrap_or(false);
    if latest {
        store.load_error().set(Some(message));
    }
    latest
}

/// Optimistically apply an acknowledged status change
pub fn store_apply_transition(
    store: &DashboardStore,
    index: usize,
    expected: &RequestKey,
    action: StatusAction,
) -> bool {
    let now = now_iso();
    let applied = store
        .ledger()
        .try_update(|ledger| ledger.apply_transition(index, expected, action, &now))
        .unwrap_or(false);
    if applied {
        store.load_error().set(None);
    }
    applied
}

/// Optimistically drop an acknowledged deletion
pub fn store_remove_request(store: &DashboardStore, index: usize, expected: &RequestKey) -> bool {
    let removed = store
        .ledger()
        .try_update(|ledger| ledger.remove(index, expected).is_some())
        .unwrap_or(false);
    if removed {
        store.load_error().set(None);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_request_list;
    use crate::table::{TableBody, LOAD_ERROR_PREFIX};
    use serde_json::json;

    fn make_request(id: u32, status: Option<&str>) -> ServiceRequest {
        ServiceRequest {
            id: Some(id.to_string()),
            address: format!("Street {}", id),
            issue: "Lift stuck".to_string(),
            timestamp: "2024-01-03 09:05:00".to_string(),
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    fn loaded(requests: Vec<ServiceRequest>) -> RequestLedger {
        let mut ledger = RequestLedger::default();
        let ticket = ledger.begin_fetch();
        assert_eq!(ledger.replace(ticket, requests), ReplaceOutcome::Applied);
        ledger
    }

    #[test]
    fn test_done_transition_patches_record() {
        let mut ledger = loaded(vec![make_request(1, None), make_request(2, Some("pending"))]);
        let key = ledger.get(1).unwrap().key();

        assert!(ledger.apply_transition(1, &key, StatusAction::Done, "2024-01-03T10:00:00.000Z"));

        let patched = ledger.get(1).unwrap();
        assert_eq!(patched.status.as_deref(), Some("done"));
        assert!(patched.completed);
        assert!(!patched.completed_time.is_empty());
        assert_eq!(patched.status().available_actions(), vec![crate::status::RowAction::Delete]);
        assert_eq!(ledger.get(0).unwrap().status(), RequestStatus::Pending);
    }

    #[test]
    fn test_not_working_sets_error_only() {
        let mut ledger = loaded(vec![make_request(1, None)]);
        let key = ledger.get(0).unwrap().key();
        assert!(ledger.apply_transition(0, &key, StatusAction::NotWorking, "now"));
        let patched = ledger.get(0).unwrap();
        assert_eq!(patched.status.as_deref(), Some("error"));
        assert!(!patched.completed);
        assert!(patched.completed_time.is_empty());
    }

    #[test]
    fn test_transition_rejected_for_moved_record() {
        let mut ledger = loaded(vec![make_request(1, None), make_request(2, None)]);
        let other = ledger.get(0).unwrap().key();
        assert!(!ledger.apply_transition(1, &other, StatusAction::Done, "now"));
        assert!(!ledger.apply_transition(5, &other, StatusAction::Done, "now"));
        assert_eq!(ledger.generation(), 0);
    }

    #[test]
    fn test_transition_rejected_from_terminal_state() {
        let mut ledger = loaded(vec![make_request(1, Some("error"))]);
        let key = ledger.get(0).unwrap().key();
        assert!(!ledger.apply_transition(0, &key, StatusAction::Done, "now"));
        assert_eq!(ledger.get(0).unwrap().status(), RequestStatus::Error);
    }

    #[test]
    fn test_remove_shrinks_list_by_one() {
        let mut ledger = loaded(vec![make_request(1, None), make_request(2, Some("done")), make_request(3, None)]);
        let key = ledger.get(1).unwrap().key();

        let removed = ledger.remove(1, &key).unwrap();

        assert_eq!(removed.id.as_deref(), Some("2"));
        assert_eq!(ledger.snapshot().len(), 2);
        assert!(ledger.snapshot().iter().all(|r| r.key() != key));
        assert!(ledger.remove(1, &key).is_none());
    }

    #[test]
    fn test_older_fetch_is_superseded() {
        let mut ledger = RequestLedger::default();
        let first = ledger.begin_fetch();
        let second = ledger.begin_fetch();

        assert_eq!(ledger.replace(second, vec![make_request(2, None)]), ReplaceOutcome::Applied);
        assert_eq!(ledger.replace(first, vec![make_request(1, None)]), ReplaceOutcome::Superseded);
        assert_eq!(ledger.get(0).unwrap().id.as_deref(), Some("2"));
        assert!(!ledger.is_latest(first));
        assert!(ledger.is_latest(second));
    }

    #[test]
    fn test_fetch_issued_before_mutation_is_stale() {
        let mut ledger = loaded(vec![make_request(1, None)]);
        let poll = ledger.begin_fetch();
        let key = ledger.get(0).unwrap().key();
        assert!(ledger.apply_transition(0, &key, StatusAction::Done, "now"));

        assert_eq!(ledger.replace(poll, vec![make_request(1, None)]), ReplaceOutcome::Stale);
        assert_eq!(ledger.get(0).unwrap().status(), RequestStatus::Done);

        let next = ledger.begin_fetch();
        assert_eq!(ledger.replace(next, vec![make_request(1, None)]), ReplaceOutcome::Applied);
        assert_eq!(ledger.get(0).unwrap().status(), RequestStatus::Pending);
    }

    #[test]
    fn test_counts() {
        let ledger = loaded(vec![
            make_request(1, None),
            make_request(2, Some("done")),
            make_request(3, Some("error")),
            make_request(4, Some("weird")),
        ]);
        assert_eq!(ledger.counts(), StatusCounts { pending: 2, done: 1, error: 1 });
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.accepts(RequestStatus::Done));
        let only_error = StatusFilter::from_str("error");
        assert!(only_error.accepts(RequestStatus::Error));
        assert!(!only_error.accepts(RequestStatus::Pending));
        assert_eq!(StatusFilter::from_str("bogus"), StatusFilter::All);
        assert_eq!(only_error.as_str(), "error");
    }

    fn loaded_store(requests: Vec<ServiceRequest>) -> DashboardStore {
        let store = Store::new(DashboardState::default());
        let ticket = store_begin_fetch(&store).unwrap();
        assert_eq!(store_replace_requests(&store, ticket, requests), ReplaceOutcome::Applied);
        store
    }

    fn body(store: &DashboardStore) -> TableBody {
        let load_error = store.load_error().get_untracked();
        store.ledger().with_untracked(|ledger| {
            TableBody::build(ledger.snapshot(), load_error.as_deref(), StatusFilter::All, "")
        })
    }

    #[test]
    fn test_malformed_response_keeps_list_and_shows_one_error_row() {
        let owner = Owner::new();
        owner.set();
        let store = loaded_store(vec![make_request(1, None), make_request(2, Some("done"))]);
        let before = store.ledger().with_untracked(|l| l.snapshot().to_vec());

        let ticket = store_begin_fetch(&store).unwrap();
        let err = parse_request_list(json!({"rows": []})).unwrap_err();
        assert!(store_fetch_failed(&store, ticket, err.to_string()));

        assert_eq!(store.ledger().with_untracked(|l| l.snapshot().to_vec()), before);
        let body = body(&store);
        assert_eq!(body.row_count(), 1);
        assert_eq!(
            body,
            TableBody::Error(format!("{}Invalid data format received", LOAD_ERROR_PREFIX))
        );
    }

    #[test]
    fn test_overtaken_fetch_failure_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let store = loaded_store(vec![make_request(1, None)]);

        let first = store_begin_fetch(&store).unwrap();
        let second = store_begin_fetch(&store).unwrap();
        assert!(!store_fetch_failed(&store, first, "timeout".to_string()));
        assert_eq!(store.load_error().get_untracked(), None);

        assert_eq!(
            store_replace_requests(&store, second, vec![make_request(7, None)]),
            ReplaceOutcome::Applied
        );
        assert!(matches!(body(&store), TableBody::Rows(rows) if rows.len() == 1));
    }

    #[test]
    fn test_successful_mutations_clear_error_row() {
        let owner = Owner::new();
        owner.set();
        let store = loaded_store(vec![make_request(1, None), make_request(2, None)]);

        let ticket = store_begin_fetch(&store).unwrap();
        store_fetch_failed(&store, ticket, "backend down".to_string());
        let key = store_request_key(&store, 0).unwrap();
        assert!(store_apply_transition(&store, 0, &key, StatusAction::Done));
        assert_eq!(store.load_error().get_untracked(), None);

        let ticket = store_begin_fetch(&store).unwrap();
        store_fetch_failed(&store, ticket, "backend down".to_string());
        let key = store.ledger().with_untracked(|l| l.get(1).unwrap().key());
        assert!(store_remove_request(&store, 1, &key));
        assert_eq!(store.load_error().get_untracked(), None);
        assert_eq!(store.ledger().with_untracked(|l| l.snapshot().len()), 1);
    }

    #[test]
    fn test_rejected_mutation_keeps_error_row() {
        let owner = Owner::new();
        owner.set();
        let store = loaded_store(vec![make_request(1, Some("error"))]);

        let ticket = store_begin_fetch(&store).unwrap();
        store_fetch_failed(&store, ticket, "backend down".to_string());
        let key = store.ledger().with_untracked(|l| l.get(0).unwrap().key());
        assert!(!store_apply_transition(&store, 0, &key, StatusAction::Done));
        assert_eq!(store.load_error().get_untracked().as_deref(), Some("backend down"));
    }

    #[test]
    fn test_responses_after_unmount_are_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(DashboardState::default());
        let ticket = store_begin_fetch(&store).unwrap();
        let key = make_request(1, None).key();

        owner.cleanup();

        assert!(store_begin_fetch(&store).is_none());
        assert!(store_request_key(&store, 0).is_none());
        assert!(!store_fetch_failed(&store, ticket, "backend down".to_string()));
        assert_eq!(
            store_replace_requests(&store, ticket, vec![make_request(1, None)]),
            ReplaceOutcome::Superseded
        );
        assert!(!store_apply_transition(&store, 0, &key, StatusAction::Done));
        assert!(!store_remove_request(&store, 0, &key));
    }
}
