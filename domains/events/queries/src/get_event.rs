use events_models::parse_event_id;
use serde::Deserialize;

/// Query string of the page; `edit` selects the event loaded into the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EditParams {
    pub edit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEventQuery {
    pub event_id: i64,
}

impl EditParams {
    /// The edit target, if the parameter carries a positive integer.
    pub fn edit_target(&self) -> Option<GetEventQuery> {
        self.edit
            .as_deref()
            .and_then(parse_event_id)
            .map(|event_id| GetEventQuery { event_id })
    }
}
