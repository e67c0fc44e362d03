use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// 已發佈的 case study 頁面，標題必須完全相同才會命中
pub const PROJECT_SLUGS: &[(&str, &str)] = &[
    (
        "Python FastAPI MCP Appointment Manager (AI Integration)",
        "mcp-appointment-manager",
    ),
    ("Java Spring Boot Task Manager", "springboot-task-manager"),
    ("FastAPI Portfolio Website", "fastapi-portfolio"),
    ("Binary Search Tree Data Parser", "bst-parser"),
    ("SQL Inventory Management System", "inventory-tracker"),
];

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn non_slug_regex() -> &'static Regex {
    static NON_SLUG: OnceLock<Regex> = OnceLock::new();
    NON_SLUG.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("slug pattern is valid"))
}

pub fn mapped_slug(title: &str) -> Option<&'static str> {
    PROJECT_SLUGS
        .iter()
        .find(|(mapped_title, _)| *mapped_title == title)
        .map(|(_, slug)| *slug)
}

/// 小寫、連續空白轉成單一 `-`、移除 `[A-Za-z0-9_-]` 以外的字元
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = whitespace_regex().replace_all(&lowered, "-");
    non_slug_regex().replace_all(&hyphenated, "").into_owned()
}

pub fn project_slug(title: &str) -> Cow<'static, str> {
    let slug = match mapped_slug(title) {
        Some(slug) => Cow::Borrowed(slug),
        None => Cow::Owned(derive_slug(title)),
    };
    tracing::debug!("Slug for '{}': {}", title, slug);
    slug
}
