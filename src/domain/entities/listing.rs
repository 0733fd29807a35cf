use std::ops::RangeInclusive;

use crate::domain::entities::user::UserRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The single active sort. `key == None` keeps the incoming order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// One rendered page of the filtered and sorted sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<UserRecord>,
    /// Length of the filtered sequence, before slicing.
    pub matched: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}
