use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One user as returned by the record provider.
///
/// Every field except `id` may be absent. Fields the table does not know about
/// are kept in `extra` so dotted sort keys can still reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<f64>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A resolved scalar, borrowed from the record it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
}

impl FieldValue<'_> {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Bool(_) => 2,
        }
    }

    /// Total order over resolved values. Text compares by UTF-16 code unit,
    /// values of different kinds order Number < Text < Bool.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.encode_utf16().cmp(b.encode_utf16()),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn scalar<'a>(value: Option<FieldValue<'a>>, rest: &[&str]) -> Option<FieldValue<'a>> {
    if rest.is_empty() {
        value
    } else {
        None
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn resolve_json<'a>(mut value: &'a Value, path: &[&str]) -> Option<FieldValue<'a>> {
    for segment in path {
        value = match value {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match value {
        Value::Number(number) => number.as_f64().map(FieldValue::Number),
        Value::String(text) => Some(FieldValue::Text(text)),
        Value::Bool(flag) => Some(FieldValue::Bool(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl UserRecord {
    /// Resolves a plain or dotted field path such as `age` or
    /// `address.country`. Any missing or null step yields `None`.
    pub fn resolve_path(&self, path: &str) -> Option<FieldValue<'_>> {
        let segments = path.split('.').collect::<Vec<_>>();
        let (head, rest) = segments.split_first()?;

        match *head {
            "id" => scalar(Some(FieldValue::Number(self.id as f64)), rest),
            "firstName" => scalar(text(&self.first_name), rest),
            "lastName" => scalar(text(&self.last_name), rest),
            "email" => scalar(text(&self.email), rest),
            "age" => scalar(self.age.map(FieldValue::Number), rest),
            "phone" => scalar(text(&self.phone), rest),
            "address" => {
                let (field, tail) = rest.split_first()?;
                self.address.as_ref()?.resolve(field, tail)
            }
            other => resolve_json(self.extra.get(other)?, rest),
        }
    }

    /// `firstName + " " + lastName`, with absent parts read as empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    pub fn country(&self) -> Option<&str> {
        self.address.as_ref()?.country.as_deref()
    }

    pub fn age_text(&self) -> String {
        match self.age {
            Some(age) if age.fract() == 0.0 && age.abs() < 1e15 => format!("{}", age as i64),
            Some(age) => age.to_string(),
            None => String::new(),
        }
    }
}

impl Address {
    fn resolve<'a>(&'a self, field: &str, rest: &[&str]) -> Option<FieldValue<'a>> {
        match field {
            "country" => scalar(text(&self.country), rest),
            other => resolve_json(self.extra.get(other)?, rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> UserRecord {
        serde_json::from_str(json).expect("record should decode")
    }

    #[test]
    fn resolves_nested_country() {
        let user = record(r#"{"id":1,"address":{"country":"Spain","city":"Madrid"}}"#);

        assert_eq!(user.resolve_path("address.country"), Some(FieldValue::Text("Spain")));
        assert_eq!(user.resolve_path("address.city"), Some(FieldValue::Text("Madrid")));
    }

    #[test]
    fn null_or_missing_address_resolves_to_none() {
        let null_address = record(r#"{"id":1,"address":null}"#);
        let no_address = record(r#"{"id":2}"#);

        assert_eq!(null_address.resolve_path("address.country"), None);
        assert_eq!(no_address.resolve_path("address.country"), None);
        assert_eq!(no_address.resolve_path("address"), None);
    }

    #[test]
    fn unknown_fields_resolve_structurally() {
        let user = record(r#"{"id":1,"company":{"name":"Acme","size":12},"tags":["a","b"]}"#);

        assert_eq!(user.resolve_path("company.name"), Some(FieldValue::Text("Acme")));
        assert_eq!(user.resolve_path("company.size"), Some(FieldValue::Number(12.0)));
        assert_eq!(user.resolve_path("tags.1"), Some(FieldValue::Text("b")));
        assert_eq!(user.resolve_path("company.missing.deeper"), None);
        assert_eq!(user.resolve_path("age.value"), None);
    }

    #[test]
    fn full_name_tolerates_missing_parts() {
        let user = record(r#"{"id":1,"firstName":"Ada"}"#);

        assert_eq!(user.full_name(), "Ada ");
        assert_eq!(UserRecord::default().full_name(), " ");
    }

    #[test]
    fn compare_orders_by_kind_then_value() {
        assert_eq!(
            FieldValue::Number(2.0).compare(&FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("Zed").compare(&FieldValue::Text("apple")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Number(99.0).compare(&FieldValue::Text("1")),
            Ordering::Less
        );
    }

    #[test]
    fn age_text_drops_integral_fraction() {
        let mut user = UserRecord {
            age: Some(28.0),
            ..UserRecord::default()
        };
        assert_eq!(user.age_text(), "28");

        user.age = Some(28.5);
        assert_eq!(user.age_text(), "28.5");

        user.age = None;
        assert_eq!(user.age_text(), "");
    }
}
