use std::cmp::Ordering;

use crate::domain::entities::listing::{SortConfig, SortDirection};
use crate::domain::entities::user::{FieldValue, UserRecord};

/// Stable sort by the configured field path. No key leaves the order untouched.
pub fn sort_records<'a>(records: Vec<&'a UserRecord>, config: &SortConfig) -> Vec<&'a UserRecord> {
    let Some(key) = config.key.as_deref() else {
        return records;
    };

    let mut keyed = records
        .into_iter()
        .map(|record| (record.resolve_path(key), record))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a.as_ref(), b.as_ref(), config.direction));

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Missing values go last in either direction.
pub fn compare_values(
    a: Option<&FieldValue<'_>>,
    b: Option<&FieldValue<'_>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
        },
    }
}
