//! Todo repository
//!
//! One parameterized statement per operation against the todos table.
//! List order is explicit (ORDER BY id) so skip/take pagination is
//! deterministic.

use sqlx::PgPool;

use crate::models::{Page, Todo, TodoDraft};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: todo {id}")]
    NotFound { id: i32 },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List todos ordered by id, skipping `page.skip` rows and
    /// returning at most `page.take`.
    ///
    /// A skip past the end of the table yields an empty vec.
    pub async fn list(&self, page: Page) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, completed
            FROM todos
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(todos)
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: i32) -> Result<Todo, DbError> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }

    /// Insert a new todo, returning it with the store-assigned id.
    pub async fn create(&self, draft: TodoDraft) -> Result<Todo, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO todos (text, completed)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&draft.text)
        .bind(draft.completed)
        .fetch_one(self.pool)
        .await?;

        Ok(draft.with_id(id))
    }

    /// Full overwrite of the row matching id.
    ///
    /// The update is unconditional: a missing id no-ops and the draft
    /// merged with the given id is returned either way.
    pub async fn update(&self, id: i32, draft: TodoDraft) -> Result<Todo, DbError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET text = $2, completed = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.text)
        .bind(draft.completed)
        .execute(self.pool)
        .await?;

        Ok(draft.with_id(id))
    }

    /// Delete the row matching id, if present. A missing id no-ops.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_url;

    // Integration tests - run with DATABASE_URL set:
    // cargo test -p todoctl-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_url(&url, 3)
            .await
            .expect("pool creation failed");
        crate::db::schema::ensure(&pool).await.expect("schema setup failed");
        pool
    }

    fn draft(text: &str, completed: bool) -> TodoDraft {
        TodoDraft {
            text: text.to_string(),
            completed,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trip() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(draft("buy milk", false)).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.text, "buy milk");
        assert!(!fetched.completed);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_not_found() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let err = repo.get(999_999_999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 999_999_999 }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_respects_take() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        for i in 0..5 {
            repo.create(draft(&format!("item {i}"), false)).await.unwrap();
        }

        let listed = repo.list(Page::new(0, 3)).await.unwrap();
        assert!(listed.len() <= 3);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_skip_drops_leading_rows() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let a = repo.create(draft("first", false)).await.unwrap();
        let b = repo.create(draft("second", false)).await.unwrap();

        let all = repo.list(Page::new(0, 1_000_000)).await.unwrap();
        let skipped = repo.list(Page::new(1, 1_000_000)).await.unwrap();

        assert_eq!(skipped.len(), all.len() - 1);
        assert_eq!(skipped.first(), all.get(1));
        assert!(a.id < b.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_flips_completed() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(draft("flip me", false)).await.unwrap();
        repo.update(created.id, draft("flip me", true)).await.unwrap();

        let fetched = repo.get(created.id).await.unwrap();
        assert!(fetched.completed);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_then_get_is_not_found() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(draft("doomed", true)).await.unwrap();
        repo.delete(created.id).await.unwrap();

        let err = repo.get(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_reports_success() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        // Unconditional update: merged payload comes back even when no row matched
        let todo = repo.update(999_999_998, draft("ghost", true)).await.unwrap();
        assert_eq!(todo.id, 999_999_998);
        assert!(matches!(
            repo.get(999_999_998).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
