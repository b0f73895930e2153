use crate::domain::article::services::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static NON_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("static slug pattern must compile"));

/// ASCII slugs: lowercase, every run of characters outside `[a-z0-9]`
/// collapses to one `-`, and leading or trailing `-` are dropped.
#[derive(Default, Clone)]
pub struct AsciiSlugGenerator;

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        NON_SLUG
            .replace_all(&lowered, "-")
            .trim_matches('-')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        AsciiSlugGenerator.slugify(input)
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slug("Hello, World!"), "hello-world");
        assert_eq!(slug("  Rust   2024 -- edition "), "rust-2024-edition");
        assert_eq!(slug("Hello World"), "hello-world");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slug("Café au lait"), "caf-au-lait");
        assert_eq!(slug("Привет мир"), "");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn trims_edge_separators() {
        assert_eq!(slug("--Edge Case--"), "edge-case");
        assert_eq!(slug("\tTabs\nand lines "), "tabs-and-lines");
    }

    #[test]
    fn keeps_existing_slugs_stable() {
        assert_eq!(slug("already-a-slug-2"), "already-a-slug-2");
    }
}
