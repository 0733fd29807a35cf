use crate::domain::entities::listing::SortDirection;
use crate::domain::entities::user::UserRecord;
use crate::ui::i18n::Label;

pub const ASCENDING_INDICATOR: &str = " 🔼";
pub const DESCENDING_INDICATOR: &str = " 🔽";

/// The seven table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    FirstName,
    LastName,
    Email,
    Age,
    Phone,
    Country,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::FirstName,
        Column::LastName,
        Column::Email,
        Column::Age,
        Column::Phone,
        Column::Country,
    ];

    /// Sort key handed to the list controller.
    pub fn key(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::FirstName => "firstName",
            Column::LastName => "lastName",
            Column::Email => "email",
            Column::Age => "age",
            Column::Phone => "phone",
            Column::Country => "address.country",
        }
    }

    pub fn label(self) -> Label {
        match self {
            Column::Id => Label::Id,
            Column::FirstName => Label::FirstName,
            Column::LastName => Label::LastName,
            Column::Email => Label::Email,
            Column::Age => Label::Age,
            Column::Phone => Label::Phone,
            Column::Country => Label::Country,
        }
    }

    pub fn cell(self, user: &UserRecord) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        match self {
            Column::Id => user.id.to_string(),
            Column::FirstName => text(&user.first_name),
            Column::LastName => text(&user.last_name),
            Column::Email => text(&user.email),
            Column::Age => user.age_text(),
            Column::Phone => text(&user.phone),
            Column::Country => user.country().unwrap_or_default().to_string(),
        }
    }
}

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => ASCENDING_INDICATOR,
        Some(SortDirection::Desc) => DESCENDING_INDICATOR,
        None => "",
    }
}
