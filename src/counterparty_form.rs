//! Counterparty Form Fields
//!
//! One declarative table drives rendering, reading (save) and writing (fill)
//! of the counterparty form. Elements are addressed by the field key as id.

use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::api::ApiError;
use crate::models::Counterparty;

/// Input widget backing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    TextArea,
    /// `<select>` with `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const LEGAL_FORMS: &[(&str, &str)] = &[
    ("", "—"),
    ("ТОВ", "ТОВ"),
    ("ФОП", "ФОП"),
    ("ПП", "ПП"),
    ("АТ", "АТ"),
    ("ОСББ", "ОСББ"),
    ("КП", "КП"),
];

pub const CUSTOMER_TYPES: &[(&str, &str)] = &[
    ("", "—"),
    ("customer", "Покупець"),
    ("supplier", "Постачальник"),
    ("partner", "Партнер"),
];

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

pub const COUNTERPARTY_FIELDS: &[FieldSpec] = &[
    field("companyName", "Назва компанії", FieldKind::Text),
    field("edrpou", "ЄДРПОУ", FieldKind::Text),
    field("iban", "IBAN", FieldKind::Text),
    field("bank", "Банк", FieldKind::Text),
    field("mfo", "МФО", FieldKind::Text),
    field("director", "Директор", FieldKind::Text),
    field("accountant", "Бухгалтер", FieldKind::Text),
    field("address", "Адреса", FieldKind::Text),
    field("phone", "Телефон", FieldKind::Tel),
    field("email", "Email", FieldKind::Email),
    field("vatNumber", "ІПН платника ПДВ", FieldKind::Text),
    field("taxNumber", "Податковий номер", FieldKind::Text),
    field("certificateNumber", "Номер свідоцтва", FieldKind::Text),
    field("certificateDate", "Дата свідоцтва", FieldKind::Date),
    field("legalForm", "Організаційно-правова форма", FieldKind::Select(LEGAL_FORMS)),
    field("customerType", "Тип контрагента", FieldKind::Select(CUSTOMER_TYPES)),
    field("legalAddress", "Юридична адреса", FieldKind::Text),
    field("city", "Місто", FieldKind::Text),
    field("region", "Область", FieldKind::Text),
    field("postalCode", "Поштовий індекс", FieldKind::Text),
    field("website", "Вебсайт", FieldKind::Text),
    field("industry", "Галузь", FieldKind::Text),
    field("description", "Опис", FieldKind::TextArea),
];

pub const SAVED_TEXT: &str = "Контрагента збережено успішно!";
pub const SAVE_FAILED_PREFIX: &str = "Помилка при збереженні: ";
pub const UNKNOWN_ERROR_TEXT: &str = "Невідома помилка";
pub const CONNECTION_ERROR_TEXT: &str = "Помилка з'єднання з сервером";
pub const CREATE_TITLE: &str = "Новий контрагент";
pub const EDIT_TITLE: &str = "Редагувати контрагента";

/// JSON payload with every declared field, `""` where nothing was read
pub fn build_payload<F>(mut read: F) -> Map<String, Value>
where
    F: FnMut(&FieldSpec) -> Option<String>,
{
    COUNTERPARTY_FIELDS
        .iter()
        .map(|spec| (spec.key.to_string(), Value::String(read(spec).unwrap_or_default())))
        .collect()
}

/// Values to write into the form for `record`, in field order
pub fn fill_values(record: &Counterparty) -> Vec<(&'static FieldSpec, String)> {
    COUNTERPARTY_FIELDS.iter().map(|spec| (spec, record.field(spec.key))).collect()
}

/// Index of the first option whose value equals `wanted`
pub fn select_option_index<'a, I>(options: I, wanted: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    options.into_iter().position(|value| value == wanted)
}

// ========================
// DOM access
// ========================

/// Current value of the element with id `key`; missing element reads as None
pub fn read_field(document: &Document, spec: &FieldSpec) -> Option<String> {
    let element = document.get_element_by_id(spec.key)?;
    let value = match spec.kind {
        FieldKind::Select(_) => element.dyn_into::<HtmlSelectElement>().ok()?.value(),
        FieldKind::TextArea => element.dyn_into::<HtmlTextAreaElement>().ok()?.value(),
        _ => element.dyn_into::<HtmlInputElement>().ok()?.value(),
    };
    Some(value)
}

/// Read the whole form into a JSON payload
pub fn read_form(document: &Document) -> Map<String, Value> {
    build_payload(|spec| read_field(document, spec))
}

/// Write one field. Selects are matched by scanning their options; a value
/// with no matching option leaves the selection unchanged.
pub fn write_field(document: &Document, spec: &FieldSpec, value: &str) {
    let Some(element) = document.get_element_by_id(spec.key) else { return };
    match spec.kind {
        FieldKind::Select(_) => {
            let Ok(select) = element.dyn_into::<HtmlSelectElement>() else { return };
            let options = select.options();
            let values: Vec<String> = (0..options.length())
                .filter_map(|i| options.item(i))
                .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
                .map(|opt| opt.value())
                .collect();
            if let Some(index) = select_option_index(values.iter().map(String::as_str), value) {
                select.set_selected_index(index as i32);
            }
        }
        FieldKind::TextArea => {
            if let Ok(area) = element.dyn_into::<HtmlTextAreaElement>() {
                area.set_value(value);
            }
        }
        _ => {
            if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
                input.set_value(value);
            }
        }
    }
}

/// Populate every declared field from `record`
pub fn fill_form(document: &Document, record: &Counterparty) {
    for (spec, value) in fill_values(record) {
        write_field(document, spec, &value);
    }
}

/// Reset the form for a new record
pub fn clear_form(document: &Document) {
    fill_form(document, &Counterparty::default());
}

/// Alert text for a failed save: server message, else generic
pub fn save_error_text(server_error: Option<&str>) -> String {
    let detail = server_error.filter(|e| !e.is_empty()).unwrap_or(UNKNOWN_ERROR_TEXT);
    format!("{}{}", SAVE_FAILED_PREFIX, detail)
}

/// Alert text for any save failure
pub fn save_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(message) => save_error_text(message.as_deref()),
        ApiError::Transport(detail) if !detail.is_empty() => {
            format!("{} ({})", CONNECTION_ERROR_TEXT, detail)
        }
        ApiError::Transport(_) => CONNECTION_ERROR_TEXT.to_string(),
        other => save_error_text(Some(&other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_keys_are_unique() {
        let mut keys: Vec<&str> = COUNTERPARTY_FIELDS.iter().map(|f| f.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), COUNTERPARTY_FIELDS.len());
    }

    #[test]
    fn test_payload_defaults_missing_fields() {
        let payload = build_payload(|spec| match spec.key {
            "companyName" => Some("Acme".to_string()),
            "iban" => Some(String::new()),
            _ => None,
        });
        assert_eq!(payload.len(), COUNTERPARTY_FIELDS.len());
        assert_eq!(payload["companyName"], json!("Acme"));
        assert_eq!(payload["iban"], json!(""));
        assert_eq!(payload["legalForm"], json!(""));
        assert!(payload.values().all(Value::is_string));
    }

    #[test]
    fn test_fill_values_never_null() {
        let record: Counterparty = serde_json::from_value(json!({
            "id": 4,
            "companyName": "Acme",
            "bank": null,
            "legalForm": "ТОВ"
        }))
        .unwrap();
        let values = fill_values(&record);
        assert_eq!(values.len(), COUNTERPARTY_FIELDS.len());
        let get = |key: &str| values.iter().find(|(s, _)| s.key == key).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(get("companyName"), "Acme");
        assert_eq!(get("bank"), "");
        assert_eq!(get("email"), "");
        assert_eq!(get("legalForm"), "ТОВ");
    }

    #[test]
    fn test_payload_and_fill_use_same_keys() {
        let payload = build_payload(|spec| Some(spec.key.to_uppercase()));
        let record = Counterparty { id: None, fields: payload.clone().into_iter().collect() };
        for (spec, value) in fill_values(&record) {
            assert_eq!(payload[spec.key], json!(value));
        }
    }

    #[test]
    fn test_select_option_scan() {
        let options = ["", "ТОВ", "ФОП"];
        assert_eq!(select_option_index(options, "ФОП"), Some(2));
        assert_eq!(select_option_index(options, ""), Some(0));
        assert_eq!(select_option_index(options, "LLC"), None);
    }

    #[test]
    fn test_select_options_are_declared_for_enums() {
        let selects: Vec<&str> = COUNTERPARTY_FIELDS
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Select(_)))
            .map(|f| f.key)
            .collect();
        assert_eq!(selects, vec!["legalForm", "customerType"]);
    }

    #[test]
    fn test_save_error_text() {
        assert_eq!(save_error_text(Some("Unauthorized")), "Помилка при збереженні: Unauthorized");
        assert_eq!(save_error_text(Some("")), "Помилка при збереженні: Невідома помилка");
        assert_eq!(save_error_text(None), "Помилка при збереженні: Невідома помилка");
    }

    #[test]
    fn test_save_failure_text_prefers_server_message() {
        assert_eq!(
            save_failure_text(&ApiError::Rejected(Some("duplicate EDRPOU".into()))),
            "Помилка при збереженні: duplicate EDRPOU"
        );
        assert_eq!(save_failure_text(&ApiError::Transport(String::new())), CONNECTION_ERROR_TEXT);
        assert_eq!(
            save_failure_text(&ApiError::Transport("Failed to fetch".into())),
            "Помилка з'єднання з сервером (Failed to fetch)"
        );
        assert_eq!(
            save_failure_text(&ApiError::Status(500)),
            "Помилка при збереженні: HTTP error! status: 500"
        );
    }
}
