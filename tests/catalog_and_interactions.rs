// tests/catalog_and_interactions.rs
use newsroom_core::application::commands::categories::{
    CreateCategoryCommand, UpdateCategoryCommand,
};
use newsroom_core::application::commands::tags::{CreateTagCommand, UpdateTagCommand};
use newsroom_core::application::error::ApplicationError;
use newsroom_core::application::queries::tags::ListTagsQuery;
use newsroom_core::domain::category::CategoryId;

mod support;
use support::{
    ArticleSeed, TestContext, admin_user, author_user, editor_user, english_name, name_map,
    other_author_user,
};

#[tokio::test]
async fn tags_are_paged_and_searchable_by_name() {
    let ctx = TestContext::new();
    let commands = &ctx.services.tag_commands;
    for (code, name) in [("rust", "Rust"), ("go", "Golang"), ("db", "Databases")] {
        commands
            .create_tag(
                &editor_user(),
                CreateTagCommand {
                    code: code.into(),
                    name: name_map(name),
                },
            )
            .await
            .unwrap();
    }

    let page = ctx
        .services
        .tag_queries
        .list_tags(ListTagsQuery {
            limit: Some(2),
            offset: None,
            search: None,
        })
        .await
        .unwrap();
    let codes: Vec<_> = page.items.iter().map(|tag| tag.code.as_str()).collect();
    assert_eq!(codes, ["db", "go"]);
    assert_eq!(page.total, 3);
    assert!(page.has_more);

    let found = ctx
        .services
        .tag_queries
        .list_tags(ListTagsQuery {
            limit: None,
            offset: None,
            search: Some("golang".into()),
        })
        .await
        .unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].code, "go");
    assert_eq!(found.limit, 20);
    assert!(!found.has_more);
}

#[tokio::test]
async fn tag_writes_need_manage_capability_and_unique_codes() {
    let ctx = TestContext::new();
    let commands = &ctx.services.tag_commands;
    let create = || CreateTagCommand {
        code: "rust".into(),
        name: name_map("Rust"),
    };

    let err = commands.create_tag(&author_user(), create()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    commands.create_tag(&admin_user(), create()).await.unwrap();
    let err = commands.create_tag(&admin_user(), create()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn renaming_a_tag_carries_its_articles() {
    let ctx = TestContext::new();
    ctx.store.put_tag("rs", english_name("Rust"));
    let article = ctx.seed(ArticleSeed::new("Tagged", "tagged").published(1).build(), &["rs"]);

    let renamed = ctx
        .services
        .tag_commands
        .update_tag(
            &admin_user(),
            UpdateTagCommand {
                code: "rs".into(),
                new_code: Some("rust".into()),
                name: name_map("Rust"),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.code, "rust");

    let counts = ctx.services.tag_queries.tag_counts(None).await.unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].code, "rust");
    assert_eq!(counts[0].article_count, 1);

    ctx.services
        .tag_commands
        .delete_tag(&admin_user(), "rust")
        .await
        .unwrap();
    assert!(ctx.services.tag_queries.tag_counts(None).await.unwrap().is_empty());
    assert!(matches!(
        ctx.services.tag_queries.get_tag("rust").await,
        Err(ApplicationError::NotFound(_))
    ));
    assert!(ctx.store.article(article.id).is_some());
}

#[tokio::test]
async fn tag_counts_only_see_published_live_articles() {
    let ctx = TestContext::new();
    ctx.seed(ArticleSeed::new("A", "a").published(1).build(), &["web", "rust"]);
    ctx.seed(ArticleSeed::new("B", "b").published(2).build(), &["web"]);
    ctx.seed(ArticleSeed::new("C", "c").build(), &["web"]);
    ctx.seed(ArticleSeed::new("D", "d").published(3).deleted().build(), &["web"]);

    let counts = ctx.services.tag_queries.tag_counts(None).await.unwrap();
    let pairs: Vec<_> = counts
        .iter()
        .map(|row| (row.code.as_str(), row.article_count))
        .collect();
    assert_eq!(pairs, [("web", 2), ("rust", 1)]);

    let top = ctx.services.tag_queries.tag_counts(Some(1)).await.unwrap();
    assert_eq!(top.len(), 1);
}

#[tokio::test]
async fn categories_form_a_tree_that_protects_parents() {
    let ctx = TestContext::new();
    let commands = &ctx.services.category_commands;
    let parent = commands
        .create_category(
            &admin_user(),
            CreateCategoryCommand {
                code: "news".into(),
                name: name_map("News"),
                parent_id: None,
            },
        )
        .await
        .unwrap();
    let child = commands
        .create_category(
            &admin_user(),
            CreateCategoryCommand {
                code: "world".into(),
                name: name_map("World"),
                parent_id: Some(parent.id.to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(child.parent_id, Some(parent.id));

    let err = commands
        .delete_category(&admin_user(), &parent.id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    commands
        .delete_category(&admin_user(), &child.id.to_string())
        .await
        .unwrap();
    commands
        .delete_category(&admin_user(), &parent.id.to_string())
        .await
        .unwrap();
    assert!(
        ctx.services
            .category_queries
            .list_categories()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn category_codes_stay_unique_among_active_rows() {
    let ctx = TestContext::new();
    let commands = &ctx.services.category_commands;
    let create = |code: &str| CreateCategoryCommand {
        code: code.into(),
        name: name_map(code),
        parent_id: None,
    };
    let sport = commands.create_category(&admin_user(), create("sport")).await.unwrap();
    commands.create_category(&admin_user(), create("tech")).await.unwrap();

    let err = commands
        .create_category(&admin_user(), create("Sport"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let err = commands
        .update_category(
            &admin_user(),
            UpdateCategoryCommand {
                id: sport.id.to_string(),
                code: "tech".into(),
                name: name_map("Tech"),
                parent_id: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let same_code = commands
        .update_category(
            &admin_user(),
            UpdateCategoryCommand {
                id: sport.id.to_string(),
                code: "sport".into(),
                name: name_map("Sports"),
                parent_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(same_code.name["en"], "Sports");

    let err = commands
        .update_category(
            &admin_user(),
            UpdateCategoryCommand {
                id: sport.id.to_string(),
                code: "sport".into(),
                name: name_map("Sports"),
                parent_id: Some(sport.id.to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = commands
        .create_category(&editor_user(), create("music"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn category_counts_use_published_articles() {
    let ctx = TestContext::new();
    let category = ctx
        .services
        .category_commands
        .create_category(
            &admin_user(),
            CreateCategoryCommand {
                code: "news".into(),
                name: name_map("News"),
                parent_id: None,
            },
        )
        .await
        .unwrap();
    let id = CategoryId::from_uuid(category.id);
    ctx.seed(ArticleSeed::new("A", "a").category(id).published(1).build(), &[]);
    ctx.seed(ArticleSeed::new("B", "b").category(id).build(), &[]);

    let counts = ctx.services.category_queries.category_counts().await.unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].article_count, 1);
}

#[tokio::test]
async fn comments_require_a_published_article() {
    let ctx = TestContext::new();
    let live = ctx.seed(ArticleSeed::new("Live", "live").published(1).build(), &[]);
    let draft = ctx.seed(ArticleSeed::new("Draft", "draft").build(), &[]);
    let commands = &ctx.services.interaction_commands;

    commands
        .add_comment(&author_user(), &live.id.to_string(), "first".into())
        .await
        .unwrap();
    commands
        .add_comment(&other_author_user(), &live.id.to_string(), "second".into())
        .await
        .unwrap();

    let comments = ctx
        .services
        .interaction_queries
        .list_comments(&live.id.to_string())
        .await
        .unwrap();
    let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["second", "first"]);

    let err = commands
        .add_comment(&author_user(), &draft.id.to_string(), "hidden".into())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = commands
        .add_comment(&author_user(), &live.id.to_string(), "   ".into())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn one_reaction_per_user_is_kept() {
    let ctx = TestContext::new();
    let live = ctx.seed(ArticleSeed::new("Live", "live").published(1).build(), &[]);
    let id = live.id.to_string();
    let commands = &ctx.services.interaction_commands;

    commands.set_reaction(&author_user(), &id, true).await.unwrap();
    let summary = commands
        .set_reaction(&author_user(), &id, false)
        .await
        .unwrap();
    assert_eq!((summary.likes, summary.dislikes), (0, 1));
    assert_eq!(summary.user_reaction, Some(false));

    commands
        .set_reaction(&other_author_user(), &id, true)
        .await
        .unwrap();
    let seen_by_author = ctx
        .services
        .interaction_queries
        .reaction_summary(Some(&author_user()), &id)
        .await
        .unwrap();
    assert_eq!((seen_by_author.likes, seen_by_author.dislikes), (1, 1));
    assert_eq!(seen_by_author.user_reaction, Some(false));

    let cleared = commands.remove_reaction(&author_user(), &id).await.unwrap();
    assert_eq!((cleared.likes, cleared.dislikes), (1, 0));
    assert_eq!(cleared.user_reaction, None);

    let anonymous = ctx
        .services
        .interaction_queries
        .reaction_summary(None, &id)
        .await
        .unwrap();
    assert_eq!(anonymous.user_reaction, None);
}
