use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
    routing::Router,
};
use database_traits::dao::GenericDao;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use events_dao::EventDao;
use events_http::{EventHandlers, EventServices};
use sql_connection::SqlConnect;
use test_utils::*;
use tokio_postgres::NoTls;
use tower::ServiceExt;

async fn setup_test_app()
-> anyhow::Result<(TestPostgresContainer, Router, EventDao)> {
    let container = TestPostgresContainer::new().await?;

    let sql_connect = create_sql_connect(&container);
    let services = EventServices::new(sql_connect.clone());
    let dao = EventDao::new(sql_connect);

    let app = EventHandlers::routes().with_state(services);

    Ok((container, app, dao))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_show_empty_page() {
    let (_container, app, _) = setup_test_app().await.unwrap();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("All Events (0)"));
    assert!(html.contains("No events yet. Add one above."));
    assert!(html.contains("<h3>Add New Event</h3>"));
}

#[tokio::test]
async fn test_create_event_renders_success_without_redirect() {
    let (container, app, dao) = setup_test_app().await.unwrap();

    let response = app
        .oneshot(post_form(
            "/",
            "action=create&name=+Team+Lunch+&event_date=2024-05-10&\
             location=Cafe&description=Bring+cash",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Event added successfully."));
    assert!(html.contains("All Events (1)"));
    assert!(html.contains("<strong>Team Lunch</strong>"));

    assert_eq!(count_events(&container).await.unwrap(), 1);
    let stored = dao.all().await.unwrap();
    assert_eq!(stored[0].name, "Team Lunch");
    assert_eq!(stored[0].location, "Cafe");
    assert_eq!(stored[0].description, "Bring cash");
}

#[tokio::test]
async fn test_create_missing_fields_writes_nothing() {
    let (container, app, _) = setup_test_app().await.unwrap();

    for body in [
        "action=create&name=&event_date=2024-01-01&location=X",
        "action=create&name=A&event_date=&location=X",
        "action=create&name=A&event_date=2024-01-01&location=+++",
    ] {
        let response = app.clone().oneshot(post_form("/", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert_eq!(
            html.matches("Name, date and location are required.").count(),
            1,
            "{body}"
        );
        assert!(!html.contains("Event added successfully."));
    }

    assert_eq!(count_events(&container).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_bad_date_reports_insert_failure() {
    let (container, app, _) = setup_test_app().await.unwrap();

    let response = app
        .oneshot(post_form(
            "/",
            "action=create&name=A&event_date=tomorrow&location=X",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<div>Insert failed: Database error: "));
    assert_eq!(count_events(&container).await.unwrap(), 0);
}

#[tokio::test]
async fn test_infinite_date_reports_failure_and_page_keeps_working() {
    let (container, app, _) = setup_test_app().await.unwrap();

    let response = app
        .clone()
        .oneshot(post_form(
            "/",
            "action=create&name=A&event_date=infinity&location=X",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<div>Insert failed: Database error: "));
    assert_eq!(count_events(&container).await.unwrap(), 0);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("All Events (0)"));
    assert!(!html.contains("msg error"));
}

#[tokio::test]
async fn test_load_failures_render_banner_in_create_mode() {
    let (container, app, _) = setup_test_app().await.unwrap();
    let id = insert_test_event(&container, "Expo", "2024-08-08", "Pier", "")
        .await
        .unwrap();
    container
        .execute_sql("ALTER TABLE events RENAME TO events_archived")
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/?edit={id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<div>Could not load events: Database error: "));
    assert!(html.contains("<div>Could not load event: Database error: "));
    assert!(html.contains("All Events (0)"));
    assert!(html.contains("No events yet. Add one above."));
    assert!(html.contains("<h3>Add New Event</h3>"));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Could not load events: "));
    assert!(!html.contains("Could not load event: "));
}

#[tokio::test]
async fn test_edit_mode_loads_event() {
    let (container, app, _) = setup_test_app().await.unwrap();
    let id = insert_test_event(&container, "Expo", "2024-08-08", "Pier", "")
        .await
        .unwrap();

    let response = app.oneshot(get(&format!("/?edit={id}"))).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("<h3>Edit Event</h3>"));
    assert!(html.contains(&format!("name=\"id\" value=\"{id}\"")));
    assert!(html.contains("value=\"Expo\""));
    assert!(html.contains("value=\"2024-08-08\""));
}

#[tokio::test]
async fn test_edit_unknown_or_invalid_id_falls_back_to_create() {
    let (_container, app, _) = setup_test_app().await.unwrap();

    for uri in ["/?edit=424242", "/?edit=abc", "/?edit=-3", "/?edit="] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let html = body_text(response).await;
        assert!(html.contains("<h3>Add New Event</h3>"), "{uri}");
        assert!(!html.contains("msg error"), "{uri}");
    }
}

#[tokio::test]
async fn test_update_redirects_and_changes_only_location() {
    let (container, app, dao) = setup_test_app().await.unwrap();
    let id = insert_test_event(&container, "Expo", "2024-08-08", "Pier", "")
        .await
        .unwrap();
    let before = dao.find_by_id(id).await.unwrap();

    let response = app
        .oneshot(post_form(
            &format!("/?edit={id}"),
            &format!(
                "action=update&id={id}&name=Expo&event_date=2024-08-08&\
                 location=Dock&description="
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let after = dao.find_by_id(id).await.unwrap();
    assert_eq!(after.location, "Dock");
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.event_date, before.event_date);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_update_missing_fields_stays_in_edit_mode() {
    let (container, app, dao) = setup_test_app().await.unwrap();
    let id = insert_test_event(&container, "Expo", "2024-08-08", "Pier", "")
        .await
        .unwrap();

    let response = app
        .oneshot(post_form(
            &format!("/?edit={id}"),
            &format!("action=update&id={id}&name=&event_date=2024-08-08&location=Dock"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("All fields are required."));
    assert!(html.contains("<h3>Edit Event</h3>"));
    assert_eq!(dao.find_by_id(id).await.unwrap().location, "Pier");
}

#[tokio::test]
async fn test_update_missing_row_reports_failure() {
    let (_container, app, _) = setup_test_app().await.unwrap();

    let response = app
        .oneshot(post_form(
            "/",
            "action=update&id=777&name=A&event_date=2024-01-01&location=X",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Update failed: Event not found: 777"));
}

#[tokio::test]
async fn test_delete_redirects_and_removes_row() {
    let (container, app, _) = setup_test_app().await.unwrap();
    let keep = insert_test_event(&container, "Keep", "2024-01-01", "A", "")
        .await
        .unwrap();
    let dropped = insert_test_event(&container, "Drop", "2024-01-02", "B", "")
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/", &format!("action=delete&id={dropped}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(html.contains("All Events (1)"));
    assert!(html.contains(&format!("?edit={keep}")));
    assert!(!html.contains("<strong>Drop</strong>"));
}

#[tokio::test]
async fn test_delete_invalid_and_missing_ids() {
    let (container, app, _) = setup_test_app().await.unwrap();
    insert_test_event(&container, "Keep", "2024-01-01", "A", "")
        .await
        .unwrap();

    let html = body_text(
        app.clone()
            .oneshot(post_form("/", "action=delete&id=0"))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Invalid ID for delete."));

    let response = app
        .oneshot(post_form("/", "action=delete&id=31337"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Delete failed: Event not found: 31337"));

    assert_eq!(count_events(&container).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_action_renders_page() {
    let (container, app, _) = setup_test_app().await.unwrap();

    let response = app
        .oneshot(post_form("/", "action=archive&id=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("msg error"));
    assert!(html.contains("All Events (0)"));
    assert_eq!(count_events(&container).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_order_and_escaping() {
    let (container, app, _) = setup_test_app().await.unwrap();
    insert_test_event_with_id(&container, 1, "Feb", "2024-02-01", "A")
        .await
        .unwrap();
    insert_test_event_with_id(&container, 3, "<b>Jan3</b>", "2024-01-01", "B")
        .await
        .unwrap();
    insert_test_event_with_id(&container, 5, "Jan5", "2024-01-01", "C")
        .await
        .unwrap();

    let html = body_text(app.oneshot(get("/")).await.unwrap()).await;

    let five = html.find("?edit=5").unwrap();
    let three = html.find("?edit=3").unwrap();
    let one = html.find("?edit=1").unwrap();
    assert!(five < three && three < one);
    assert!(html.contains("&lt;b&gt;Jan3&lt;/b&gt;"));
    assert!(!html.contains("<b>Jan3</b>"));
}

#[tokio::test]
async fn test_unreachable_database_is_a_server_error() {
    let pg_config = "postgresql://nobody@127.0.0.1:1/none"
        .parse::<tokio_postgres::Config>()
        .unwrap();
    let manager = Manager::from_config(pg_config, NoTls, ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    let pool = Pool::builder(manager)
        .max_size(1)
        .runtime(Runtime::Tokio1)
        .create_timeout(Some(Duration::from_secs(1)))
        .build()
        .unwrap();
    let app = EventHandlers::routes()
        .with_state(EventServices::new(SqlConnect::new(pool)));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(!html.contains("All Events"));
}
