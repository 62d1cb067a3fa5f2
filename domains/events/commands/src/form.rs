use events_errors::ValidationError;
use events_models::parse_event_id;
use serde::Deserialize;
use tracing::debug;

use crate::{CreateEventCommand, DeleteEventCommand, UpdateEventCommand};

/// Raw urlencoded body of a submission. Every field is optional on the wire;
/// presence rules are enforced when the form is turned into a command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub action: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Writable columns of an event after normalisation.
///
/// Text fields are trimmed. `event_date` is kept verbatim: the database is
/// the only thing that interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub event_date: String,
    pub location: String,
    pub description: String,
}

impl EventFields {
    pub fn has_required(&self) -> bool {
        !self.name.is_empty()
            && !self.event_date.is_empty()
            && !self.location.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    Create(CreateEventCommand),
    Update(UpdateEventCommand),
    Delete(DeleteEventCommand),
}

impl EventForm {
    pub fn fields(&self) -> EventFields {
        EventFields {
            name: trimmed(self.name.as_deref()),
            event_date: self.event_date.clone().unwrap_or_default(),
            location: trimmed(self.location.as_deref()),
            description: trimmed(self.description.as_deref()),
        }
    }

    pub fn event_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(parse_event_id)
    }

    /// Resolves the `action` discriminator into a validated command.
    ///
    /// `Ok(None)` means the submission names no known action and is ignored.
    pub fn into_action(self) -> Result<Option<EventAction>, ValidationError> {
        let action = match self.action.as_deref() {
            Some("create") => {
                EventAction::Create(CreateEventCommand::new(self.fields())?)
            }
            Some("update") => {
                EventAction::Update(UpdateEventCommand::new(
                    self.event_id(),
                    self.fields(),
                )?)
            }
            Some("delete") => {
                EventAction::Delete(DeleteEventCommand::new(self.event_id())?)
            }
            other => {
                debug!(action = ?other, "Ignoring submission without a known action");
                return Ok(None);
            }
        };
        Ok(Some(action))
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(action: &str) -> EventForm {
        EventForm {
            action: Some(action.to_string()),
            id: None,
            name: Some("  Rust Meetup ".to_string()),
            event_date: Some("2024-05-01".to_string()),
            location: Some("\tBerlin\n".to_string()),
            description: Some("  talks & pizza  ".to_string()),
        }
    }

    #[test]
    fn test_create_trims_text_fields() {
        let action = form("create").into_action().unwrap().unwrap();
        let EventAction::Create(command) = action
        else {
            panic!("expected create");
        };
        assert_eq!(command.fields.name, "Rust Meetup");
        assert_eq!(command.fields.location, "Berlin");
        assert_eq!(command.fields.description, "talks & pizza");
        assert_eq!(command.fields.event_date, "2024-05-01");
    }

    #[test]
    fn test_date_is_not_trimmed() {
        let mut submission = form("create");
        submission.event_date = Some(" 2024-05-01".to_string());
        let fields = submission.fields();
        assert_eq!(fields.event_date, " 2024-05-01");
    }

    #[test]
    fn test_create_requires_each_field() {
        for missing in ["name", "event_date", "location"] {
            let mut submission = form("create");
            match missing {
                "name" => submission.name = Some("   ".to_string()),
                "event_date" => submission.event_date = None,
                _ => submission.location = Some(String::new()),
            }
            assert_eq!(
                submission.into_action(),
                Err(ValidationError::MissingCreateFields),
                "missing {missing}"
            );
        }
    }

    #[test]
    fn test_description_is_optional() {
        let mut submission = form("create");
        submission.description = None;
        assert!(matches!(
            submission.into_action(),
            Ok(Some(EventAction::Create(_)))
        ));
    }

    #[test]
    fn test_update_requires_positive_id() {
        let mut submission = form("update");
        assert_eq!(
            submission.clone().into_action(),
            Err(ValidationError::MissingUpdateFields)
        );

        submission.id = Some("0".to_string());
        assert_eq!(
            submission.clone().into_action(),
            Err(ValidationError::MissingUpdateFields)
        );

        submission.id = Some("12".to_string());
        let Ok(Some(EventAction::Update(command))) = submission.into_action()
        else {
            panic!("expected update");
        };
        assert_eq!(command.event_id, 12);
        assert_eq!(command.fields.name, "Rust Meetup");
    }

    #[test]
    fn test_update_requires_fields() {
        let mut submission = form("update");
        submission.id = Some("3".to_string());
        submission.location = None;
        assert_eq!(
            submission.into_action(),
            Err(ValidationError::MissingUpdateFields)
        );
    }

    #[test]
    fn test_delete_requires_positive_id() {
        let mut submission = EventForm {
            action: Some("delete".to_string()),
            ..Default::default()
        };
        assert_eq!(
            submission.clone().into_action(),
            Err(ValidationError::InvalidDeleteId)
        );

        submission.id = Some("nope".to_string());
        assert_eq!(
            submission.clone().into_action(),
            Err(ValidationError::InvalidDeleteId)
        );

        submission.id = Some("5".to_string());
        assert_eq!(
            submission.into_action(),
            Ok(Some(EventAction::Delete(DeleteEventCommand { event_id: 5 })))
        );
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        assert_eq!(form("archive").into_action(), Ok(None));
        assert_eq!(EventForm::default().into_action(), Ok(None));
    }
}
