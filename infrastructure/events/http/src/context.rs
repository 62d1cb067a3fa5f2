use common_errors::AppError;
use events_errors::EventError;
use events_models::Event;
use events_queries::{GetEventQuery, ListEventsQuery};
use tracing::warn;

use crate::EventServices;

/// Which form the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Create,
    Edit(Event),
}

/// Everything one response renders, built fresh for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub errors: Vec<String>,
    pub success: Option<String>,
    pub view_mode: ViewMode,
    pub events: Vec<Event>,
}

impl PageContext {
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a storage failure in the banner. Connection failures are
    /// handed back so the request can fail as a whole.
    pub fn record_failure(
        &mut self, prefix: &str, err: EventError,
    ) -> Result<(), AppError> {
        let err = err.into_recoverable()?;
        warn!(error = %err, "{prefix}");
        self.push_error(format!("{prefix}: {err}"));
        Ok(())
    }

    /// Loads the event list and, if requested, the event being edited.
    pub async fn load(
        mut self, services: &EventServices, edit: Option<GetEventQuery>,
    ) -> Result<Self, AppError> {
        match services.list_events.execute(ListEventsQuery).await {
            Ok(events) => self.events = events,
            Err(err) => self.record_failure("Could not load events", err)?,
        }

        if let Some(query) = edit {
            match services.get_event.execute(query).await {
                Ok(Some(event)) => self.view_mode = ViewMode::Edit(event),
                Ok(None) => {}
                Err(err) => self.record_failure("Could not load event", err)?,
            }
        }

        Ok(self)
    }
}
