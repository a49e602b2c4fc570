//! Request Status State Machine
//!
//! Pending requests can be completed or marked as not working. Done and
//! error are terminal; delete is available from every state.

/// Derived status of a service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Done,
    Error,
}

/// Status-changing action understood by `/update_status/{index}/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Done,
    NotWorking,
}

/// Button shown in a request row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Transition(StatusAction),
    Delete,
}

impl RequestStatus {
    /// Anything other than `done`/`error` (including no status) is pending
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("done") => RequestStatus::Done,
            Some("error") => RequestStatus::Error,
            _ => RequestStatus::Pending,
        }
    }

    /// Wire value written back into the record after a transition
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Done => "done",
            RequestStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    /// Target state of `action`, or `None` when the transition is not allowed
    pub fn apply(&self, action: StatusAction) -> Option<RequestStatus> {
        match (self, action) {
            (RequestStatus::Pending, StatusAction::Done) => Some(RequestStatus::Done),
            (RequestStatus::Pending, StatusAction::NotWorking) => Some(RequestStatus::Error),
            _ => None,
        }
    }

    /// Buttons for a row in this state, in display order
    pub fn available_actions(&self) -> Vec<RowAction> {
        let mut actions: Vec<RowAction> = [StatusAction::Done, StatusAction::NotWorking]
            .into_iter()
            .filter(|action| self.apply(*action).is_some())
            .map(RowAction::Transition)
            .collect();
        actions.push(RowAction::Delete);
        actions
    }

    /// Bootstrap table row class
    pub fn row_class(&self) -> &'static str {
        match self {
            RequestStatus::Done => "table-success",
            RequestStatus::Error => "table-danger",
            RequestStatus::Pending => "table-warning",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Done => "badge bg-success",
            RequestStatus::Error => "badge bg-danger",
            RequestStatus::Pending => "badge bg-warning text-dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Done => "Виконано",
            RequestStatus::Error => "Не працює",
            RequestStatus::Pending => "Очікує",
        }
    }
}

impl StatusAction {
    /// Path segment used by the status endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Done => "done",
            StatusAction::NotWorking => "not_working",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "done" => Some(StatusAction::Done),
            "not_working" => Some(StatusAction::NotWorking),
            _ => None,
        }
    }
}

impl RowAction {
    pub fn button_class(&self) -> &'static str {
        match self {
            RowAction::Transition(StatusAction::Done) => "btn btn-sm btn-success complete-btn",
            RowAction::Transition(StatusAction::NotWorking) => "btn btn-sm btn-warning complete-btn",
            RowAction::Delete => "btn btn-sm btn-danger delete-btn",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::Transition(StatusAction::Done) => "✅",
            RowAction::Transition(StatusAction::NotWorking) => "🚫",
            RowAction::Delete => "🗑️",
        }
    }

    /// `data-action` attribute value, only set on transition buttons
    pub fn data_action(&self) -> Option<&'static str> {
        match self {
            RowAction::Transition(action) => Some(action.as_str()),
            RowAction::Delete => None,
        }
    }
}
