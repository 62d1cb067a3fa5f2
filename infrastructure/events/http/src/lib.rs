pub mod context;
pub mod escape;
pub mod view;

use axum::{
    Form, Router,
    extract::{OriginalUri, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use common_errors::AppError;
use events_command_handlers::{ActionOutcome, EventCommandHandlers};
use events_commands::{EventAction, EventForm};
use events_queries::EditParams;
use events_query_handlers::{GetEventQueryHandler, ListEventsQueryHandler};
use sql_connection::SqlConnect;
use tracing::{debug, instrument};

pub use crate::context::{PageContext, ViewMode};
use crate::view::render_page;

const CREATED_MESSAGE: &str = "Event added successfully.";

#[derive(Clone)]
pub struct EventServices {
    pub commands: EventCommandHandlers,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
}

impl EventServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            commands: EventCommandHandlers::new(db.clone()),
            get_event: GetEventQueryHandler::new(db.clone()),
            list_events: ListEventsQueryHandler::new(db),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new().route("/", get(show_events).post(submit_event))
    }
}

#[instrument(skip_all)]
pub async fn show_events(
    State(services): State<EventServices>, OriginalUri(uri): OriginalUri,
    Query(params): Query<EditParams>,
) -> Result<Html<String>, AppError> {
    let page = PageContext::default()
        .load(&services, params.edit_target())
        .await?;
    Ok(Html(render_page(&page, uri.path())))
}

/// Applies a submission. Successful updates and deletes redirect back to
/// the page; everything else re-renders it in the same response.
#[instrument(skip_all)]
pub async fn submit_event(
    State(services): State<EventServices>, OriginalUri(uri): OriginalUri,
    Query(params): Query<EditParams>, Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let mut page = PageContext::default();

    match form.into_action() {
        Ok(Some(action)) => {
            let prefix = failure_prefix(&action);
            match services.commands.dispatch(action).await {
                Ok(ActionOutcome::Created(_)) => {
                    page.success = Some(CREATED_MESSAGE.to_string());
                }
                Ok(ActionOutcome::Updated(_) | ActionOutcome::Deleted { .. }) => {
                    return Ok(Redirect::to(uri.path()).into_response());
                }
                Err(err) => page.record_failure(prefix, err)?,
            }
        }
        Ok(None) => {}
        Err(rejection) => {
            debug!(%rejection, "Submission rejected");
            page.push_error(rejection.to_string());
        }
    }

    let page = page.load(&services, params.edit_target()).await?;
    Ok(Html(render_page(&page, uri.path())).into_response())
}

fn failure_prefix(action: &EventAction) -> &'static str {
    match action {
        EventAction::Create(_) => "Insert failed",
        EventAction::Update(_) => "Update failed",
        EventAction::Delete(_) => "Delete failed",
    }
}
