use crate::domain::entities::user::UserRecord;

/// Keeps records whose full name or email contains `query`, ignoring case.
/// An empty query passes every record through in order.
pub fn filter_records<'a>(records: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle))
        .collect()
}

fn matches_query(record: &UserRecord, needle: &str) -> bool {
    if record.full_name().to_lowercase().contains(needle) {
        return true;
    }

    record
        .email
        .as_deref()
        .is_some_and(|email| email.to_lowercase().contains(needle))
}
