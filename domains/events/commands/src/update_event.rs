use events_errors::ValidationError;

use crate::EventFields;

/// Overwrites every writable column of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEventCommand {
    pub event_id: i64,
    pub fields: EventFields,
}

impl UpdateEventCommand {
    pub fn new(
        event_id: Option<i64>, fields: EventFields,
    ) -> Result<Self, ValidationError> {
        match event_id {
            Some(event_id) if fields.has_required() => {
                Ok(Self { event_id, fields })
            }
            _ => Err(ValidationError::MissingUpdateFields),
        }
    }
}
