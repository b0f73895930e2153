// src/domain/article/services/preview.rs
use once_cell::sync::Lazy;
use regex::Regex;

pub const PREVIEW_MAX_LINES: usize = 10;
pub const PREVIEW_MAX_CHARS: usize = 300;

const ELLIPSIS: &str = "...";

static HEADING: Lazy<Regex> = Lazy::new(|| compiled(r"(?m)^#{1,6}\s+"));
static IMAGE: Lazy<Regex> = Lazy::new(|| compiled(r"!\[.*?\]\(.*?\)"));
static LINK: Lazy<Regex> = Lazy::new(|| compiled(r"\[(.*?)\]\(.*?\)"));
static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| compiled(r"```[\s\S]*?```"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| compiled(r"`.*?`"));
static EMPHASIS: Lazy<Regex> = Lazy::new(|| compiled(r"(\*\*|__|\*|_)"));

#[allow(clippy::expect_used)]
fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static preview pattern must compile")
}

/// Reduces a markdown body to a short plain-text teaser for public listings.
pub fn markdown_preview(markdown: &str) -> String {
    let text = HEADING.replace_all(markdown, "");
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = CODE_BLOCK.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");

    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed.split('\n').collect();
    let mut preview = if lines.len() > PREVIEW_MAX_LINES {
        let mut head = lines[..PREVIEW_MAX_LINES].join("\n");
        head.push_str(ELLIPSIS);
        head
    } else {
        lines.join("\n")
    };

    if preview.chars().count() > PREVIEW_MAX_CHARS {
        preview = preview.chars().take(PREVIEW_MAX_CHARS).collect();
        preview.push_str(ELLIPSIS);
    }

    preview
}
