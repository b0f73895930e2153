use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, NewArticle},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    /// Blank or absent means "derive from the title".
    pub slug: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
    pub tag_codes: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    slug: Option<String>,
    category_id: Option<String>,
    status: Option<String>,
    tag_codes: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn tag(mut self, code: impl Into<String>) -> Self {
        self.tag_codes.push(code.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            slug: self.slug,
            category_id: self.category_id,
            status: self.status,
            tag_codes: self.tag_codes,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let status = command
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?
            .unwrap_or_default();
        if status.is_published() {
            ensure_capability(actor, "articles", "publish")?;
        }
        let category_id = command
            .category_id
            .as_deref()
            .map(CategoryId::parse)
            .transpose()?;
        let tags = Self::parse_tag_codes(command.tag_codes)?;
        let now = self.clock.now();

        let explicit_slug = command
            .slug
            .filter(|s| !s.trim().is_empty())
            .map(ArticleSlug::new)
            .transpose()?;
        let (slug, auto_slug) = match explicit_slug {
            Some(slug) => (slug, None),
            None => (
                self.slug_service.generate_unique_slug(&title, None).await?,
                Some((&title, None)),
            ),
        };

        let template = NewArticle {
            id: ArticleId::generate(),
            title: title.clone(),
            slug: slug.clone(),
            body,
            category_id,
            author_id: actor.id.clone(),
            status,
            published_at: status.is_published().then_some(now),
            created_at: now,
            updated_at: now,
            tags,
        };

        let created = self
            .with_slug_retry(auto_slug, slug, |slug| {
                let mut article = template.clone();
                article.slug = slug;
                self.write_repo.insert(article)
            })
            .await?;

        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        self.to_dto(created).await
    }
}
