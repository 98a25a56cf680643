//! Schema setup for the todos table

use sqlx::PgPool;

/// Create the todos table if it does not exist.
///
/// Runs once at startup. SERIAL ids are assigned by the store and
/// never reused within the table's lifetime.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring todos schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            text TEXT NOT NULL,
            completed BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
