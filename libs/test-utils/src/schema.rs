use anyhow::Context;
use deadpool_postgres::Pool;
use tracing::info;

const EVENTS_SCHEMA: &str =
    include_str!("../../../domains/events/schema/events.sql");

/// Applies the `events` schema to a fresh database. Every statement is
/// idempotent, so applying twice is harmless.
pub struct SchemaBootstrap {
    pool: Pool,
}

impl SchemaBootstrap {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn apply(&self) -> anyhow::Result<()> {
        let client = self.pool.get().await?;
        client
            .batch_execute(EVENTS_SCHEMA)
            .await
            .context("Failed to apply events schema")?;
        info!("Events schema applied");
        Ok(())
    }

    /// Names of the tables currently present in the public schema.
    pub async fn list_tables(&self) -> anyhow::Result<Vec<String>> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT table_name::TEXT FROM information_schema.tables \
                 WHERE table_schema = 'public' ORDER BY table_name",
                &[],
            )
            .await?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
}
