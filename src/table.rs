//! Request Table Model
//!
//! Turns the ledger into what the table body shows, and decodes clicks coming
//! back from the delegated listener.

use crate::format::format_date;
use crate::models::ServiceRequest;
use crate::status::{RequestStatus, RowAction, StatusAction};
use crate::store::StatusFilter;

/// Number of table columns; error and placeholder rows span all of them
pub const COLUMN_COUNT: u32 = 8;

pub const EMPTY_TEXT: &str = "Заявок поки немає";
pub const NO_MATCHES_TEXT: &str = "Немає заявок за цим фільтром";
pub const LOAD_ERROR_PREFIX: &str = "Помилка завантаження даних: ";
pub const DELETE_CONFIRM_TEXT: &str = "Видалити цю заявку?";

/// One rendered request row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Position in the full list, sent back to the backend
    pub index: usize,
    pub status: RequestStatus,
    pub created: String,
    pub location: String,
    pub name: String,
    pub issue: String,
    pub phone: String,
    pub completed: String,
    pub actions: Vec<RowAction>,
}

impl RowView {
    pub fn from_request(index: usize, request: &ServiceRequest) -> Self {
        let status = request.status();
        Self {
            index,
            status,
            created: format_date(&request.timestamp),
            location: request.location(),
            name: request.name.clone(),
            issue: request.issue.clone(),
            phone: request.phone.clone(),
            completed: format_date(&request.completed_time),
            actions: status.available_actions(),
        }
    }
}

/// Content of the table body
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Last fetch failed: single full-width error row
    Error(String),
    /// No requests at all
    Empty,
    /// Requests exist but the filter hides all of them
    NoMatches,
    Rows(Vec<RowView>),
}

impl TableBody {
    pub fn build(
        requests: &[ServiceRequest],
        load_error: Option<&str>,
        filter: StatusFilter,
        search: &str,
    ) -> Self {
        if let Some(message) = load_error {
            return TableBody::Error(format!("{}{}", LOAD_ERROR_PREFIX, message));
        }
        if requests.is_empty() {
            return TableBody::Empty;
        }
        let rows: Vec<RowView> = requests
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.accepts(r.status()) && r.matches_search(search))
            .map(|(index, r)| RowView::from_request(index, r))
            .collect();
        if rows.is_empty() {
            TableBody::NoMatches
        } else {
            TableBody::Rows(rows)
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.len(),
            _ => 1,
        }
    }

    pub fn action_count(&self) -> usize {
        match self {
            TableBody::Rows(rows) => rows.iter().map(|r| r.actions.len()).sum(),
            _ => 0,
        }
    }
}

/// Command resolved from a click inside the table body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    Transition { index: usize, action: StatusAction },
    Delete { index: usize },
}

/// Decode a delegated click from the row's `data-index`, the clicked
/// button's class list and its `data-action`
pub fn decode_click(
    row_index: Option<&str>,
    button_classes: Option<&str>,
    button_action: Option<&str>,
) -> Option<TableCommand> {
    let index: usize = row_index?.trim().parse().ok()?;
    let classes: Vec<&str> = button_classes?.split_whitespace().collect();

    if classes.contains(&"complete-btn") {
        let action = StatusAction::from_str(button_action?)?;
        return Some(TableCommand::Transition { index, action });
    }
    if classes.contains(&"delete-btn") {
        return Some(TableCommand::Delete { index });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(address: &str, status: Option<&str>) -> ServiceRequest {
        ServiceRequest {
            address: address.to_string(),
            issue: "Lift".to_string(),
            timestamp: "2024-01-03 09:05:00".to_string(),
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    fn rows(body: TableBody) -> Vec<RowView> {
        match body {
            TableBody::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let body = TableBody::build(&[], None, StatusFilter::All, "");
        assert_eq!(body, TableBody::Empty);
        assert_eq!(body.row_count(), 1);
        assert_eq!(body.action_count(), 0);
    }

    #[test]
    fn test_error_row_wins_over_rows() {
        let requests = vec![make_request("A", None)];
        let body = TableBody::build(&requests, Some("Invalid data format received"), StatusFilter::All, "");
        assert_eq!(
            body,
            TableBody::Error("Помилка завантаження даних: Invalid data format received".to_string())
        );
        assert_eq!(body.row_count(), 1);
    }

    #[test]
    fn test_actions_follow_status() {
        let requests = vec![
            make_request("A", None),
            make_request("B", Some("done")),
            make_request("C", Some("error")),
            make_request("D", Some("something")),
        ];
        let rows = rows(TableBody::build(&requests, None, StatusFilter::All, ""));
        let pending = vec![
            RowAction::Transition(StatusAction::Done),
            RowAction::Transition(StatusAction::NotWorking),
            RowAction::Delete,
        ];
        assert_eq!(rows[0].actions, pending);
        assert_eq!(rows[1].actions, vec![RowAction::Delete]);
        assert_eq!(rows[2].actions, vec![RowAction::Delete]);
        assert_eq!(rows[3].actions, pending);
        assert_eq!(rows[0].created, "03.01.2024 09:05");
        assert_eq!(rows[0].completed, "");
    }

    #[test]
    fn test_filter_keeps_full_list_indices() {
        let requests = vec![
            make_request("A", None),
            make_request("B", Some("done")),
            make_request("C", None),
        ];
        let pending = rows(TableBody::build(
            &requests,
            None,
            StatusFilter::Only(RequestStatus::Pending),
            "",
        ));
        assert_eq!(pending.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 2]);

        let searched = rows(TableBody::build(&requests, None, StatusFilter::All, "c"));
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].index, 2);

        assert_eq!(
            TableBody::build(&requests, None, StatusFilter::Only(RequestStatus::Error), ""),
            TableBody::NoMatches
        );
    }

    #[test]
    fn test_decode_click() {
        assert_eq!(
            decode_click(Some("2"), Some("btn btn-sm btn-success complete-btn"), Some("done")),
            Some(TableCommand::Transition { index: 2, action: StatusAction::Done })
        );
        assert_eq!(
            decode_click(Some("0"), Some("btn btn-sm btn-warning complete-btn"), Some("not_working")),
            Some(TableCommand::Transition { index: 0, action: StatusAction::NotWorking })
        );
        assert_eq!(
            decode_click(Some("4"), Some("btn btn-sm btn-danger delete-btn"), None),
            Some(TableCommand::Delete { index: 4 })
        );
    }

    #[test]
    fn test_decode_click_ignores_noise() {
        assert_eq!(decode_click(None, Some("delete-btn"), None), None);
        assert_eq!(decode_click(Some("x"), Some("delete-btn"), None), None);
        assert_eq!(decode_click(Some("1"), None, None), None);
        assert_eq!(decode_click(Some("1"), Some("badge"), None), None);
        assert_eq!(decode_click(Some("1"), Some("complete-btn"), Some("reopen")), None);
    }
}
