// src/infrastructure/repositories/postgres_tag.rs
use std::collections::BTreeMap;

use super::{articles::escape_like, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::localized::LocalizedName;
use crate::domain::tag::{NewTag, Tag, TagCode, TagId, TagRepository, TagWithCount};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_search(builder: &mut QueryBuilder<'_, Postgres>, search: Option<&str>) {
        let Some(search) = search else {
            return;
        };
        let pattern = format!("%{}%", escape_like(search));
        builder.push(" WHERE t.code ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR EXISTS (SELECT 1 FROM jsonb_each_text(t.name) n WHERE n.value ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: Uuid,
    code: String,
    name: Json<BTreeMap<String, String>>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TagId(row.id),
            code: TagCode::new(row.code)?,
            name: LocalizedName::new(row.name.0)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagCountRow {
    code: String,
    article_count: i64,
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM tags t");
        Self::push_search(&mut count, search);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut page = QueryBuilder::<Postgres>::new("SELECT t.id, t.code, t.name FROM tags t");
        Self::push_search(&mut page, search);
        page.push(" ORDER BY t.code LIMIT ");
        page.push_bind(i64::from(limit));
        page.push(" OFFSET ");
        page.push_bind(i64::from(offset));
        let rows = page
            .build_query_as::<TagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let tags = rows
            .into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((tags, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, code, name FROM tags WHERE code = $1")
            .bind(code.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (code, name) VALUES ($1, $2) RETURNING id, code, name",
        )
        .bind(tag.code.as_str())
        .bind(Json(tag.name.into_inner()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Tag::try_from(row)
    }

    async fn update(
        &self,
        code: &TagCode,
        new_code: TagCode,
        name: LocalizedName,
    ) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "UPDATE tags SET code = $2, name = $3, updated_at = NOW()
             WHERE code = $1 RETURNING id, code, name",
        )
        .bind(code.as_str())
        .bind(new_code.as_str())
        .bind(Json(name.into_inner()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("tag '{code}' not found")))?;
        Tag::try_from(row)
    }

    async fn delete(&self, code: &TagCode) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE code = $1")
            .bind(code.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("tag '{code}' not found")));
        }
        Ok(())
    }

    async fn list_with_counts(&self, limit: Option<u32>) -> DomainResult<Vec<TagWithCount>> {
        let rows = sqlx::query_as::<_, TagCountRow>(
            "SELECT t.code, COUNT(DISTINCT a.id) AS article_count
             FROM tags t
             JOIN article_tags at ON at.tag_id = t.id
             JOIN articles a ON a.id = at.article_id
             WHERE a.status = 'PUBLISHED' AND a.deleted_at IS NULL
             GROUP BY t.code
             ORDER BY article_count DESC, t.code
             LIMIT $1",
        )
        .bind(limit.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(TagWithCount {
                    code: TagCode::new(row.code)?,
                    article_count: u64::try_from(row.article_count).unwrap_or_default(),
                })
            })
            .collect()
    }
}
