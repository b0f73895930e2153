use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

pub struct ArticleTagsCommand {
    pub id: String,
    pub tag_codes: Vec<String>,
}

impl ArticleCommandService {
    /// Attaches tags; codes already attached or unknown to the catalog are skipped.
    pub async fn add_article_tags(
        &self,
        actor: &AuthenticatedUser,
        command: ArticleTagsCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let article = self.load_for_update(actor, id).await?;
        let tags = Self::parse_tag_codes(command.tag_codes)?;
        self.write_repo.add_tags(id, &tags).await?;
        self.to_dto(article).await
    }

    pub async fn remove_article_tags(
        &self,
        actor: &AuthenticatedUser,
        command: ArticleTagsCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let article = self.load_for_update(actor, id).await?;
        let tags = Self::parse_tag_codes(command.tag_codes)?;
        self.write_repo.remove_tags(id, &tags).await?;
        self.to_dto(article).await
    }
}
