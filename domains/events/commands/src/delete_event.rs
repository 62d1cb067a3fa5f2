use events_errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEventCommand {
    pub event_id: i64,
}

impl DeleteEventCommand {
    pub fn new(event_id: Option<i64>) -> Result<Self, ValidationError> {
        event_id
            .map(|event_id| Self { event_id })
            .ok_or(ValidationError::InvalidDeleteId)
    }
}
