use anyhow::Result;
use sql_connection::SqlConnect;

use crate::TestPostgresContainer;

/// Insert an event and return its generated id
pub async fn insert_test_event(
    container: &TestPostgresContainer, name: &str, event_date: &str,
    location: &str, description: &str,
) -> Result<i64> {
    let client = container.pool.get().await?;
    let row = client
        .query_one(
            "INSERT INTO events (name, event_date, location, description) \
             VALUES ($1, CAST($2::TEXT AS DATE), $3, $4) RETURNING id",
            &[&name, &event_date, &location, &description],
        )
        .await?;
    Ok(row.get(0))
}

/// Insert an event with a fixed id, for tests that depend on id ordering.
/// The id sequence is moved past the largest id so later generated ids do
/// not collide.
pub async fn insert_test_event_with_id(
    container: &TestPostgresContainer, id: i64, name: &str, event_date: &str,
    location: &str,
) -> Result<i64> {
    let client = container.pool.get().await?;
    client
        .execute(
            "INSERT INTO events (id, name, event_date, location, \
             description) VALUES ($1, $2, CAST($3::TEXT AS DATE), $4, '')",
            &[&id, &name, &event_date, &location],
        )
        .await?;
    client
        .execute(
            "SELECT setval(pg_get_serial_sequence('events', 'id'), \
             (SELECT MAX(id) FROM events))",
            &[],
        )
        .await?;
    Ok(id)
}

pub async fn count_events(container: &TestPostgresContainer) -> Result<i64> {
    let client = container.pool.get().await?;
    let row = client.query_one("SELECT COUNT(*) FROM events", &[]).await?;
    Ok(row.get(0))
}

/// Clean all test data from the database
pub async fn clean_test_data(container: &TestPostgresContainer) -> Result<()> {
    container.execute_sql("DELETE FROM events").await
}

/// Create a SQL connection from a test container for use with DAOs and
/// handlers
pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    SqlConnect::new(container.pool.clone())
}
