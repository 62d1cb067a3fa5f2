use database_traits::dao::GenericDao;
use events_commands::{
    CreateEventCommand, DeleteEventCommand, EventAction, UpdateEventCommand,
};
use events_dao::EventDao;
use events_errors::EventError;
use events_models::Event;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct CreateEventHandler {
    event_dao: EventDao,
}

impl CreateEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<Event, EventError> {
        self.event_dao.create(command).await
    }
}

#[derive(Clone)]
pub struct UpdateEventHandler {
    event_dao: EventDao,
}

impl UpdateEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateEventCommand,
    ) -> Result<Event, EventError> {
        self.event_dao.update(command.event_id, command).await
    }
}

#[derive(Clone)]
pub struct DeleteEventHandler {
    event_dao: EventDao,
}

impl DeleteEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEventCommand,
    ) -> Result<(), EventError> {
        self.event_dao.delete(command.event_id).await
    }
}

/// What a successfully applied [`EventAction`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Created(Event),
    Updated(Event),
    Deleted { event_id: i64 },
}

/// Routes a validated submission to the handler for its action.
#[derive(Clone)]
pub struct EventCommandHandlers {
    create: CreateEventHandler,
    update: UpdateEventHandler,
    delete: DeleteEventHandler,
}

impl EventCommandHandlers {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            create: CreateEventHandler::new(db.clone()),
            update: UpdateEventHandler::new(db.clone()),
            delete: DeleteEventHandler::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn dispatch(
        &self, action: EventAction,
    ) -> Result<ActionOutcome, EventError> {
        match action {
            EventAction::Create(command) => {
                self.create.execute(command).await.map(ActionOutcome::Created)
            }
            EventAction::Update(command) => {
                self.update.execute(command).await.map(ActionOutcome::Updated)
            }
            EventAction::Delete(command) => {
                let event_id = command.event_id;
                self.delete.execute(command).await?;
                Ok(ActionOutcome::Deleted { event_id })
            }
        }
    }
}
