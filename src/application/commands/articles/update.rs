use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, ArticleUpdate},
        category::CategoryId,
    },
};

/// Partial update; every `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    /// `Some("")` regenerates the slug from the title.
    pub slug: Option<String>,
    /// `Some(None)` clears the category.
    pub category_id: Option<Option<String>>,
    pub status: Option<String>,
    /// Replaces the whole tag set when present.
    pub tag_codes: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let mut article = self.load_for_update(actor, id).await?;

        let UpdateArticleCommand {
            id: _,
            title,
            body,
            slug,
            category_id,
            status,
            tag_codes,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let body = body.map(ArticleBody::new).transpose()?;
        let category_id = category_id
            .map(|value| value.as_deref().map(CategoryId::parse).transpose())
            .transpose()?;
        let status = status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?;
        let tags = tag_codes.map(Self::parse_tag_codes).transpose()?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, article.updated_at);

        if title.is_some() || body.is_some() {
            let new_title = title.unwrap_or_else(|| article.title.clone());
            let new_body = body.unwrap_or_else(|| article.body.clone());
            article.set_content(new_title.clone(), new_body.clone(), now);
            update = update.with_title(new_title).with_body(new_body);
        }

        if let Some(category_id) = category_id {
            article.set_category(category_id, now);
            update = update.with_category(category_id);
        }

        if let Some(status) = status {
            if status.is_published() && !article.status.is_published() {
                ensure_capability(actor, "articles", "publish")?;
            }
            if article.transition_to(status, now) {
                update = update.with_status(article.status, article.published_at);
            }
        }

        if let Some(tags) = tags {
            update = update.with_tags(tags);
        }

        let (slug_changed, regenerated) = match slug {
            Some(raw) if raw.trim().is_empty() => {
                let fresh = self
                    .slug_service
                    .generate_unique_slug(&article.title, Some(id))
                    .await?;
                article.set_slug(fresh, now);
                (true, true)
            }
            Some(raw) => {
                article.set_slug(ArticleSlug::new(raw)?, now);
                (true, false)
            }
            None => (false, false),
        };

        let updated = if update.is_empty() && !slug_changed {
            article
        } else {
            update.set_updated_at(now);
            let title = article.title.clone();
            let auto_slug = regenerated.then_some((&title, Some(id)));
            self.with_slug_retry(auto_slug, article.slug.clone(), |slug| {
                let update = if slug_changed {
                    update.clone().with_slug(slug)
                } else {
                    update.clone()
                };
                self.write_repo.update(update)
            })
            .await?
        };

        self.to_dto(updated).await
    }
}
