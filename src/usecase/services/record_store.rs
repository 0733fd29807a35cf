use crate::domain::entities::user::UserRecord;
use crate::usecase::ports::user_source::SourceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Raw user collection plus the status of the one fetch that fills it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    list: Vec<UserRecord>,
    status: FetchStatus,
    error: Option<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.list
    }

    /// Only an untouched store asks for a fetch; terminal states never retry.
    pub fn needs_fetch(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn fulfill(&mut self, list: Vec<UserRecord>) {
        self.list = list;
        self.status = FetchStatus::Succeeded;
        self.error = None;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    pub fn settle(&mut self, result: Result<Vec<UserRecord>, SourceError>) {
        match result {
            Ok(list) => self.fulfill(list),
            Err(err) => self.reject(err.to_string()),
        }
    }

    /// What the list pipeline sees: the collection once loaded, otherwise nothing.
    pub fn visible_records(&self) -> &[UserRecord] {
        match self.status {
            FetchStatus::Succeeded => &self.list,
            FetchStatus::Idle | FetchStatus::Loading | FetchStatus::Failed => &[],
        }
    }
}
