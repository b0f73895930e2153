// src/infrastructure/repositories/postgres_article.rs
use std::collections::HashMap;

use super::{
    articles::{ARTICLE_COLUMNS, ArticleQueryBuilder},
    map_sqlx,
};
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagCode;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    slug: String,
    body: String,
    category_id: Option<Uuid>,
    author_id: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::from_uuid(row.id),
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body)?,
            category_id: row.category_id.map(CategoryId::from_uuid),
            author_id: UserId::new(row.author_id)?,
            status: row.status.parse::<ArticleStatus>()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: Uuid,
    code: String,
}

/// Attaches the offending slug to a unique-index violation.
fn map_write_err(err: sqlx::Error, slug: Option<&ArticleSlug>) -> DomainError {
    match (map_sqlx(err), slug) {
        (DomainError::DuplicateSlug(_), Some(slug)) => DomainError::DuplicateSlug(slug.to_string()),
        (other, _) => other,
    }
}

fn tag_strings(tags: &[TagCode]) -> Vec<String> {
    tags.iter().map(|code| code.as_str().to_owned()).collect()
}

/// Links known tag codes to the article on the caller's connection, so
/// `insert` and `update` can keep it inside their transaction.
async fn attach_tags(
    conn: &mut PgConnection,
    id: ArticleId,
    tags: &[TagCode],
) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO article_tags (article_id, tag_id)
         SELECT $1, t.id FROM tags t WHERE t.code = ANY($2)
         ON CONFLICT (article_id, tag_id) DO NOTHING",
    )
    .bind(id.as_uuid())
    .bind(tag_strings(tags))
    .execute(conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            slug,
            body,
            category_id,
            author_id,
            status,
            published_at,
            created_at,
            updated_at,
            tags,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles AS a (id, title, slug, body, category_id, author_id, status, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING a.id, a.title, a.slug, a.body, a.category_id, a.author_id, a.status, a.published_at, a.created_at, a.updated_at, a.deleted_at",
        )
        .bind(id.as_uuid())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(category_id.map(|c| c.as_uuid()))
        .bind(author_id.as_str())
        .bind(status.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_write_err(err, Some(&slug)))?;

        attach_tags(&mut tx, id, &tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            body,
            category_id,
            status,
            tags,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles AS a SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = &slug {
            builder.push(", slug = ");
            builder.push_bind(slug.as_str().to_owned());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(|c| c.as_uuid()));
        }

        if let Some(state) = status {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE a.id = ");
        builder.push_bind(id.as_uuid());
        builder.push(" AND a.deleted_at IS NULL AND a.updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| map_write_err(err, slug.as_ref()))?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        if let Some(tags) = tags {
            sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
                .bind(id.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            attach_tags(&mut tx, id, &tags).await?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = $2, updated_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.as_uuid())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn add_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        attach_tags(&mut conn, id, tags).await
    }

    async fn remove_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()> {
        if tags.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "DELETE FROM article_tags at USING tags t
             WHERE at.tag_id = t.id AND at.article_id = $1 AND t.code = ANY($2)",
        )
        .bind(id.as_uuid())
        .bind(tag_strings(tags))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1 AND a.deleted_at IS NULL"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = $1 AND a.deleted_at IS NULL"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_page(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder = ArticleQueryBuilder::new(filter).page_query();
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder = ArticleQueryBuilder::new(filter).count_query();
        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn tags_for(
        &self,
        ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, Vec<TagCode>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(ArticleId::as_uuid).collect();
        let rows = sqlx::query_as::<_, ArticleTagRow>(
            "SELECT at.article_id, t.code FROM article_tags at
             JOIN tags t ON t.id = at.tag_id
             WHERE at.article_id = ANY($1)
             ORDER BY t.code",
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<ArticleId, Vec<TagCode>> = HashMap::new();
        for row in rows {
            grouped
                .entry(ArticleId::from_uuid(row.article_id))
                .or_default()
                .push(TagCode::new(row.code)?);
        }
        Ok(grouped)
    }
}
