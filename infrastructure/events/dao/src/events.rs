use async_trait::async_trait;
use dao_utils::query_helpers::{PgParam, ensure_affected, first_row_or_not_found};
use database_traits::dao::GenericDao;
use events_commands::{CreateEventCommand, UpdateEventCommand};
use events_errors::EventError;
use events_models::Event;
use events_queries::ListEventsQuery;
use sql_connection::SqlConnect;
use tracing::{info, instrument};

// The submitted date goes in as text and is cast server-side, so an
// unparsable date surfaces as a statement error rather than a bind error.
const INSERT_EVENT: &str = "INSERT INTO events (name, event_date, location, \
                            description) VALUES ($1, CAST($2::TEXT AS DATE), \
                            $3, $4) RETURNING id, name, event_date, \
                            location, description, created_at";

const UPDATE_EVENT: &str = "UPDATE events SET name = $1, event_date = \
                            CAST($2::TEXT AS DATE), location = $3, \
                            description = $4 WHERE id = $5 RETURNING id, \
                            name, event_date, location, description, \
                            created_at";

#[derive(Clone)]
pub struct EventDao {
    db: SqlConnect,
}

impl EventDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    /// Like `find_by_id`, but a missing row is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn find_optional(
        &self, id: i64,
    ) -> Result<Option<Event>, EventError> {
        match self.find_by_id(id).await {
            Ok(event) => Ok(Some(event)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("SELECT COUNT(*) FROM events").await?;
        let row = client.query_one(&stmt, &[]).await?;
        Ok(row.get(0))
    }
}

#[async_trait]
impl GenericDao for EventDao {
    type CreateRequest = CreateEventCommand;
    type Error = EventError;
    type ID = i64;
    type Model = Event;
    type Response = Event;
    type UpdateRequest = UpdateEventCommand;

    #[instrument(skip(self))]
    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT id, name, event_date, location, description, \
                 created_at FROM events WHERE id = $1",
            )
            .await?;
        let rows = client.query(&stmt, &[&id]).await?;

        first_row_or_not_found(
            &rows,
            |row| self.map_row(row),
            EventError::NotFound { event_id: id },
        )
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<Self::Response>, Self::Error> {
        let client = self.db.get_client().await?;
        let query = format!(
            "SELECT id, name, event_date, location, description, created_at \
             FROM events {}",
            ListEventsQuery::ORDER_BY
        );
        let stmt = client.prepare(&query).await?;
        let rows = client.query(&stmt, &[]).await?;

        rows.iter().map(|row| self.map_row(row)).collect()
    }

    #[instrument(skip_all)]
    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare(INSERT_EVENT).await?;

        let fields = &req.fields;
        let params: [&PgParam; 4] = [
            &fields.name,
            &fields.event_date,
            &fields.location,
            &fields.description,
        ];
        let row = client.query_one(&stmt, &params).await?;
        let event = self.map_row(&row)?;

        info!(event_id = event.id, "Event inserted");
        Ok(event)
    }

    #[instrument(skip(self, req))]
    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare(UPDATE_EVENT).await?;

        let fields = &req.fields;
        let params: [&PgParam; 5] = [
            &fields.name,
            &fields.event_date,
            &fields.location,
            &fields.description,
            &id,
        ];
        let rows = client.query(&stmt, &params).await?;

        let event = first_row_or_not_found(
            &rows,
            |row| self.map_row(row),
            EventError::NotFound { event_id: id },
        )?;

        info!(event_id = id, "Event updated");
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Self::ID) -> Result<(), Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("DELETE FROM events WHERE id = $1").await?;
        let affected = client.execute(&stmt, &[&id]).await?;

        ensure_affected(affected, EventError::NotFound { event_id: id })?;

        info!(event_id = id, "Event deleted");
        Ok(())
    }

    fn map_row(
        &self, row: &tokio_postgres::Row,
    ) -> Result<Self::Model, Self::Error> {
        Ok(Event {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            event_date: row.try_get(2)?,
            location: row.try_get(3)?,
            description: row
                .try_get::<_, Option<String>>(4)?
                .unwrap_or_default(),
            created_at: row.try_get(5)?,
        })
    }
}
