use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Format used for `event_date` in form values and the list view.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used when showing `created_at`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder,
)]
pub struct Event {
    #[builder(default)]
    pub id: i64,
    #[builder(setter(into))]
    pub name: String,
    pub event_date: NaiveDate,
    #[builder(setter(into))]
    pub location: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn event_date_display(&self) -> String {
        self.event_date.format(EVENT_DATE_FORMAT).to_string()
    }

    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}
