// src/infrastructure/repositories/postgres_category.rs
use std::collections::BTreeMap;

use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryCode, CategoryId, CategoryRepository, CategoryUpdate, CategoryWithCount,
    NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::localized::LocalizedName;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

const CATEGORY_COLUMNS: &str = "id, code, name, parent_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Uuid,
    code: String,
    name: Json<BTreeMap<String, String>>,
    parent_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::from_uuid(row.id),
            code: CategoryCode::new(row.code)?,
            name: LocalizedName::new(row.name.0)?,
            parent_id: row.parent_id.map(CategoryId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    id: Uuid,
    code: String,
    name: Json<BTreeMap<String, String>>,
    article_count: i64,
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_active(&self) -> DomainResult<Vec<Category>> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE deleted_at IS NULL ORDER BY code"
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Category::try_from).transpose()
    }

    async fn code_in_use(
        &self,
        code: &CategoryCode,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM categories
                WHERE code = $1 AND deleted_at IS NULL AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(code.as_str())
        .bind(exclude.map(|id| id.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn has_active_children(&self, id: CategoryId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE parent_id = $1 AND deleted_at IS NULL)",
        )
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let sql = format!(
            "INSERT INTO categories (code, name, parent_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4) RETURNING {CATEGORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(category.code.as_str())
            .bind(Json(category.name.into_inner()))
            .bind(category.parent_id.map(|id| id.as_uuid()))
            .bind(category.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let sql = format!(
            "UPDATE categories SET code = $2, name = $3, parent_id = $4, updated_at = $5
             WHERE id = $1 AND deleted_at IS NULL RETURNING {CATEGORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(update.id.as_uuid())
            .bind(update.code.as_str())
            .bind(Json(update.name.into_inner()))
            .bind(update.parent_id.map(|id| id.as_uuid()))
            .bind(update.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("category {} not found", update.id)))?;
        Category::try_from(row)
    }

    async fn soft_delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE categories SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("category {id} not found")));
        }
        Ok(())
    }

    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            "SELECT c.id, c.code, c.name, COUNT(a.id) AS article_count
             FROM categories c
             LEFT JOIN articles a
               ON a.category_id = c.id AND a.status = 'PUBLISHED' AND a.deleted_at IS NULL
             WHERE c.deleted_at IS NULL
             GROUP BY c.id, c.code, c.name
             ORDER BY article_count DESC, c.code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryWithCount {
                    id: CategoryId::from_uuid(row.id),
                    code: CategoryCode::new(row.code)?,
                    name: LocalizedName::new(row.name.0)?,
                    article_count: u64::try_from(row.article_count).unwrap_or_default(),
                })
            })
            .collect()
    }
}
