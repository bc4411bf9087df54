use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// 群组下的关键词（列表展示用）
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct GroupKeyword {
    pub id: i64,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
    pub keywords: Vec<GroupKeyword>,
}

#[derive(sqlx::FromRow)]
struct KeywordRow {
    id: i64,
    group_id: i64,
    term: String,
}

impl Group {
    /// 按 id 倒序列出所有群组及其关键词
    pub async fn list_with_keywords(pool: &SqlitePool) -> Result<Vec<GroupInfo>, sqlx::Error> {
        let groups = sqlx::query_as::<_, Group>("SELECT id, name FROM groups ORDER BY id DESC")
            .fetch_all(pool)
            .await?;

        let keywords = sqlx::query_as::<_, KeywordRow>(
            "SELECT id, group_id, term FROM keywords ORDER BY id DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(groups
            .into_iter()
            .map(|g| GroupInfo {
                keywords: keywords
                    .iter()
                    .filter(|k| k.group_id == g.id)
                    .map(|k| GroupKeyword {
                        id: k.id,
                        term: k.term.clone(),
                    })
                    .collect(),
                id: g.id,
                name: g.name,
            })
            .collect())
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Group>("INSERT INTO groups (name) VALUES (?) RETURNING id, name")
            .bind(name.trim())
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM groups WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// 删除群组及其关键词，不存在时不报错
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM keywords WHERE group_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }
}
