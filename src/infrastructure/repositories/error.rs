use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_active_key";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_STATUS: &str = "articles_status_chk";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";
const CNT_TAG_CODE: &str = "tags_code_key";
const CNT_CATEGORY_CODE: &str = "categories_code_active_key";
const CNT_CATEGORY_PARENT: &str = "categories_parent_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::DuplicateSlug("slug already exists".into()),
                    CNT_TAG_CODE => DomainError::Conflict("tag code already exists".into()),
                    CNT_CATEGORY_CODE => {
                        DomainError::Conflict("category code already in use".into())
                    }
                    CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_CATEGORY_PARENT => {
                        DomainError::NotFound("parent category not found".into())
                    }
                    CNT_ARTICLE_STATUS => DomainError::Validation("invalid article status".into()),
                    CNT_ARTICLE_PUBLISHED_CHECK => {
                        DomainError::Validation("published articles require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
