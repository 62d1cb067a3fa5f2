use database_traits::dao::GenericDao;
use events_dao::EventDao;
use events_errors::EventError;
use events_models::Event;
use events_queries::{GetEventQuery, ListEventsQuery};
use sql_connection::SqlConnect;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct GetEventQueryHandler {
    event_dao: EventDao,
}

impl GetEventQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    /// A missing row is not an error here; the caller falls back to the
    /// create form.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<Option<Event>, EventError> {
        let event = self.event_dao.find_optional(query.event_id).await?;
        if event.is_none() {
            debug!(event_id = query.event_id, "Edit target not found");
        }
        Ok(event)
    }
}

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    event_dao: EventDao,
}

impl ListEventsQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, _query: ListEventsQuery,
    ) -> Result<Vec<Event>, EventError> {
        self.event_dao.all().await
    }
}
