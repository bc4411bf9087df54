use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Keyword {
    pub id: i64,
    pub group_id: i64,
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateKeywordRequest {
    pub group_id: i64,
    pub term: String,
}

impl Keyword {
    pub async fn create(pool: &SqlitePool, group_id: i64, term: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Keyword>(
            "INSERT INTO keywords (group_id, term) VALUES (?, ?) RETURNING id, group_id, term",
        )
        .bind(group_id)
        .bind(term.trim())
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM keywords WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use crate::routes::group::Group;

    async fn pool() -> SqlitePool {
        let pool = database::connect("sqlite::memory:", 1).await.unwrap();
        database::init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_and_delete_keyword() {
        let pool = pool().await;
        let group = Group::create(&pool, "Tech").await.unwrap();

        let keyword = Keyword::create(&pool, group.id, " rust ").await.unwrap();
        assert_eq!(keyword.group_id, group.id);
        assert_eq!(keyword.term, "rust");

        Keyword::delete(&pool, keyword.id).await.unwrap();
        let groups = Group::list_with_keywords(&pool).await.unwrap();
        assert!(groups[0].keywords.is_empty());
    }

    #[tokio::test]
    async fn keyword_for_missing_group_violates_foreign_key() {
        let pool = pool().await;
        assert!(Keyword::create(&pool, 999, "rust").await.is_err());
    }
}
