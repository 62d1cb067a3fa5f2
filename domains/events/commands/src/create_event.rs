use events_errors::ValidationError;

use crate::EventFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventCommand {
    pub fields: EventFields,
}

impl CreateEventCommand {
    pub fn new(fields: EventFields) -> Result<Self, ValidationError> {
        if !fields.has_required() {
            return Err(ValidationError::MissingCreateFields);
        }
        Ok(Self { fields })
    }
}
