// tests/support/mocks/store.rs
//! In-memory stand-in for every repository port, applying the same filter,
//! ordering and soft-delete rules as the Postgres adapters.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsroom_core::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSort,
        ArticleStatus, ArticleUpdate, ArticleWriteRepository, NewArticle,
    },
    category::{
        Category, CategoryCode, CategoryId, CategoryRepository, CategoryUpdate,
        CategoryWithCount, NewCategory,
    },
    errors::{DomainError, DomainResult},
    interaction::{
        Comment, CommentId, InteractionRepository, NewComment, Reaction, ReactionTally,
    },
    localized::LocalizedName,
    tag::{NewTag, Tag, TagCode, TagId, TagRepository, TagWithCount},
    user::UserId,
};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    article_tags: HashMap<ArticleId, BTreeSet<TagCode>>,
    tags: Vec<Tag>,
    categories: Vec<(Category, bool)>,
    comments: Vec<Comment>,
    reactions: HashMap<(ArticleId, UserId), Reaction>,
}

impl State {
    fn known_tags(&self, codes: &[TagCode]) -> BTreeSet<TagCode> {
        codes
            .iter()
            .filter(|code| self.tags.iter().any(|tag| &tag.code == *code))
            .cloned()
            .collect()
    }

    fn live(&self, id: ArticleId) -> Option<&Article> {
        self.articles
            .iter()
            .find(|article| article.id == id && !article.is_deleted())
    }

    fn slug_holder(&self, slug: &ArticleSlug) -> Option<&Article> {
        self.articles
            .iter()
            .find(|article| &article.slug == slug && !article.is_deleted())
    }

    fn matches(&self, article: &Article, filter: &ArticleFilter) -> bool {
        if article.is_deleted() {
            return false;
        }
        if filter.status.is_some_and(|status| status != article.status) {
            return false;
        }
        if filter
            .category_id
            .is_some_and(|category| Some(category) != article.category_id)
        {
            return false;
        }
        if filter
            .author_id
            .as_ref()
            .is_some_and(|author| author != &article.author_id)
        {
            return false;
        }
        if filter.has_tag_filter() {
            let carried = self.article_tags.get(&article.id);
            let any = filter
                .tags
                .iter()
                .any(|code| carried.is_some_and(|set| set.contains(code)));
            if !any {
                return false;
            }
        }
        if let Some(text) = &filter.text {
            let needle = text.to_lowercase();
            let hit = article.title.as_str().to_lowercase().contains(&needle)
                || article.body.as_str().to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }

    fn published_live(&self) -> impl Iterator<Item = &Article> {
        self.articles
            .iter()
            .filter(|article| !article.is_deleted() && article.status == ArticleStatus::Published)
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    race_next_insert: AtomicBool,
    fail_next_tag_write: AtomicBool,
    slug_lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an article as-is, bypassing every service rule.
    pub fn put_article(&self, article: Article, tags: &[&str]) {
        let mut state = self.state.lock().unwrap();
        let codes = tags.iter().map(|code| TagCode::new(*code).unwrap()).collect();
        state.article_tags.insert(article.id, codes);
        state.articles.push(article);
    }

    pub fn put_tag(&self, code: &str, name: LocalizedName) -> Tag {
        let tag = Tag {
            id: TagId(Uuid::new_v4()),
            code: TagCode::new(code).unwrap(),
            name,
        };
        self.state.lock().unwrap().tags.push(tag.clone());
        tag
    }

    pub fn article(&self, id: ArticleId) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.articles.iter().find(|article| article.id == id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    /// The next insert behaves as if another writer had claimed the same slug
    /// between the probe and the write.
    pub fn race_next_insert(&self) {
        self.race_next_insert.store(true, Ordering::SeqCst);
    }

    /// The next write carrying tags fails at the tag step. Like a rolled-back
    /// transaction, the article row is left untouched.
    pub fn fail_next_tag_write(&self) {
        self.fail_next_tag_write.store(true, Ordering::SeqCst);
    }

    fn tag_write_fails(&self) -> bool {
        self.fail_next_tag_write.swap(false, Ordering::SeqCst)
    }

    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();

        if self.race_next_insert.swap(false, Ordering::SeqCst) {
            state.articles.push(Article {
                id: ArticleId::generate(),
                title: article.title.clone(),
                slug: article.slug.clone(),
                body: article.body.clone(),
                category_id: None,
                author_id: UserId::new("racer").unwrap(),
                status: ArticleStatus::Draft,
                published_at: None,
                created_at: article.created_at,
                updated_at: article.updated_at,
                deleted_at: None,
            });
        }

        if state.slug_holder(&article.slug).is_some() {
            return Err(DomainError::DuplicateSlug(article.slug.into_inner()));
        }
        if !article.tags.is_empty() && self.tag_write_fails() {
            return Err(DomainError::Persistence("article_tags insert failed".into()));
        }
        let tags = state.known_tags(&article.tags);

        let stored = Article {
            id: article.id,
            title: article.title,
            slug: article.slug,
            body: article.body,
            category_id: article.category_id,
            author_id: article.author_id,
            status: article.status,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: None,
        };
        state.article_tags.insert(stored.id, tags);
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let current = state
            .live(update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if current.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("article was modified concurrently".into()));
        }
        let taken = update.slug.as_ref().is_some_and(|slug| {
            state
                .slug_holder(slug)
                .is_some_and(|holder| holder.id != update.id)
        });
        if taken {
            let slug = update.slug.as_ref().map(ToString::to_string).unwrap_or_default();
            return Err(DomainError::DuplicateSlug(slug));
        }
        if update.tags.is_some() && self.tag_write_fails() {
            return Err(DomainError::Persistence("article_tags insert failed".into()));
        }
        if let Some(tags) = &update.tags {
            let known = state.known_tags(tags);
            state.article_tags.insert(update.id, known);
        }

        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id && !article.is_deleted())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(category_id) = update.category_id {
            article.category_id = category_id;
        }
        if let Some(status) = update.status {
            article.status = status.status;
            article.published_at = status.published_at;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == id && !article.is_deleted())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.deleted_at = Some(at);
        article.updated_at = at;
        Ok(())
    }

    async fn add_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let known = state.known_tags(tags);
        state.article_tags.entry(id).or_default().extend(known);
        Ok(())
    }

    async fn remove_tags(&self, id: ArticleId, tags: &[TagCode]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(set) = state.article_tags.get_mut(&id) {
            for code in tags {
                set.remove(code);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().live(id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().slug_holder(slug).cloned())
    }

    async fn find_page(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| state.matches(article, filter))
            .cloned()
            .collect();
        match filter.sort {
            ArticleSort::PublishedAt => matching.sort_by_key(|article| {
                (
                    article.published_at.is_none(),
                    Reverse(article.published_at),
                    Reverse(article.id.as_uuid()),
                )
            }),
            ArticleSort::CreatedAt => matching.sort_by_key(|article| {
                (Reverse(article.created_at), Reverse(article.id.as_uuid()))
            }),
        }
        Ok(matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn count_matching(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|article| state.matches(article, filter))
            .count() as u64)
    }

    async fn tags_for(
        &self,
        ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, Vec<TagCode>>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| {
                let codes = state.article_tags.get(id)?;
                (!codes.is_empty()).then(|| (*id, codes.iter().cloned().collect()))
            })
            .collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn list_page(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)> {
        let state = self.state.lock().unwrap();
        let needle = search.map(str::to_lowercase);
        let mut matching: Vec<Tag> = state
            .tags
            .iter()
            .filter(|tag| {
                needle.as_deref().is_none_or(|needle| {
                    tag.code.as_str().contains(needle)
                        || tag
                            .name
                            .as_map()
                            .values()
                            .any(|name| name.to_lowercase().contains(needle))
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.code.cmp(&b.code));
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn find_by_code(&self, code: &TagCode) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|tag| &tag.code == code).cloned())
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if state.tags.iter().any(|existing| existing.code == tag.code) {
            return Err(DomainError::Conflict(format!("tag '{}' already exists", tag.code)));
        }
        let stored = Tag {
            id: TagId(Uuid::new_v4()),
            code: tag.code,
            name: tag.name,
        };
        state.tags.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        code: &TagCode,
        new_code: TagCode,
        name: LocalizedName,
    ) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        let tag = state
            .tags
            .iter_mut()
            .find(|tag| &tag.code == code)
            .ok_or_else(|| DomainError::NotFound(format!("tag '{code}' not found")))?;
        tag.code = new_code.clone();
        tag.name = name;
        let updated = tag.clone();
        for set in state.article_tags.values_mut() {
            if set.remove(code) {
                set.insert(new_code.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, code: &TagCode) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.tags.len();
        state.tags.retain(|tag| &tag.code != code);
        if state.tags.len() == before {
            return Err(DomainError::NotFound(format!("tag '{code}' not found")));
        }
        for set in state.article_tags.values_mut() {
            set.remove(code);
        }
        Ok(())
    }

    async fn list_with_counts(&self, limit: Option<u32>) -> DomainResult<Vec<TagWithCount>> {
        let state = self.state.lock().unwrap();
        let mut counts: HashMap<TagCode, u64> = HashMap::new();
        for article in state.published_live() {
            for code in state.article_tags.get(&article.id).into_iter().flatten() {
                *counts.entry(code.clone()).or_default() += 1;
            }
        }
        let mut rows: Vec<TagWithCount> = counts
            .into_iter()
            .map(|(code, article_count)| TagWithCount {
                code,
                article_count,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.article_count
                .cmp(&a.article_count)
                .then_with(|| a.code.cmp(&b.code))
        });
        if let Some(limit) = limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_active(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut active: Vec<Category> = state
            .categories
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(category, _)| category.clone())
            .collect();
        active.sort_by(|a, b| a.code.as_str().cmp(b.code.as_str()));
        Ok(active)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|(category, deleted)| category.id == id && !deleted)
            .map(|(category, _)| category.clone()))
    }

    async fn code_in_use(
        &self,
        code: &CategoryCode,
        exclude: Option<CategoryId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().any(|(category, deleted)| {
            !deleted && &category.code == code && Some(category.id) != exclude
        }))
    }

    async fn has_active_children(&self, id: CategoryId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .any(|(category, deleted)| !deleted && category.parent_id == Some(id)))
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let stored = Category {
            id: CategoryId::from_uuid(Uuid::new_v4()),
            code: category.code,
            name: category.name,
            parent_id: category.parent_id,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        self.state
            .lock()
            .unwrap()
            .categories
            .push((stored.clone(), false));
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        let (category, _) = state
            .categories
            .iter_mut()
            .find(|(category, deleted)| category.id == update.id && !deleted)
            .ok_or_else(|| DomainError::NotFound(format!("category {} not found", update.id)))?;
        category.code = update.code;
        category.name = update.name;
        category.parent_id = update.parent_id;
        category.updated_at = update.updated_at;
        Ok(category.clone())
    }

    async fn soft_delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let entry = state
            .categories
            .iter_mut()
            .find(|(category, deleted)| category.id == id && !deleted)
            .ok_or_else(|| DomainError::NotFound(format!("category {id} not found")))?;
        entry.1 = true;
        Ok(())
    }

    async fn list_with_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<CategoryWithCount> = state
            .categories
            .iter()
            .filter(|(_, deleted)| !deleted)
            .map(|(category, _)| CategoryWithCount {
                id: category.id,
                code: category.code.clone(),
                name: category.name.clone(),
                article_count: state
                    .published_live()
                    .filter(|article| article.category_id == Some(category.id))
                    .count() as u64,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.article_count
                .cmp(&a.article_count)
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
        });
        Ok(rows)
    }
}

#[async_trait]
impl InteractionRepository for InMemoryStore {
    async fn add_comment(&self, comment: NewComment) -> DomainResult<Comment> {
        let stored = Comment {
            id: CommentId(Uuid::new_v4()),
            article_id: comment.article_id,
            user_id: comment.user_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        self.state.lock().unwrap().comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_comments(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .rev()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn set_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
        reaction: Reaction,
        _at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .reactions
            .insert((article_id, user_id.clone()), reaction);
        Ok(())
    }

    async fn remove_reaction(&self, article_id: ArticleId, user_id: &UserId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .reactions
            .remove(&(article_id, user_id.clone()));
        Ok(())
    }

    async fn tally(&self, article_id: ArticleId) -> DomainResult<ReactionTally> {
        let state = self.state.lock().unwrap();
        let mut tally = ReactionTally::default();
        for ((id, _), reaction) in &state.reactions {
            if *id == article_id {
                if reaction.is_like() {
                    tally.likes += 1;
                } else {
                    tally.dislikes += 1;
                }
            }
        }
        Ok(tally)
    }

    async fn find_reaction(
        &self,
        article_id: ArticleId,
        user_id: &UserId,
    ) -> DomainResult<Option<Reaction>> {
        let state = self.state.lock().unwrap();
        Ok(state.reactions.get(&(article_id, user_id.clone())).copied())
    }
}
