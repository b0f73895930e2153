// src/domain/article/specifications.rs
use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::{Capability, UserId};

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities.iter().any(|cap| cap.matches(resource, action))
}

pub struct CanUpdateArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: &'a UserId,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: &'a UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }
}

impl ArticleSpecification for CanUpdateArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "update:any")
            || (has_capability(self.capabilities, "articles", "update:own")
                && &self.article.author_id == self.user_id)
    }
}

pub struct CanDeleteArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: &'a UserId,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: &'a UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }
}

impl ArticleSpecification for CanDeleteArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        has_capability(self.capabilities, "articles", "delete:any")
            || (has_capability(self.capabilities, "articles", "delete:own")
                && &self.article.author_id == self.user_id)
    }
}

/// Published articles are public; anything else is limited to its author and
/// holders of `articles:view:drafts`.
pub struct CanViewArticleSpec<'a> {
    viewer: Option<(&'a HashSet<Capability>, &'a UserId)>,
    article: &'a Article,
}

impl<'a> CanViewArticleSpec<'a> {
    pub const fn new(
        viewer: Option<(&'a HashSet<Capability>, &'a UserId)>,
        article: &'a Article,
    ) -> Self {
        Self { viewer, article }
    }
}

impl ArticleSpecification for CanViewArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        if self.article.status.is_published() {
            return true;
        }
        self.viewer.is_some_and(|(capabilities, user_id)| {
            has_capability(capabilities, "articles", "view:drafts")
                || &self.article.author_id == user_id
        })
    }
}
