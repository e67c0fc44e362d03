use crate::page::{ElementId, HostPage, TextSlot};
use crate::utils::error::Result;
use askama::Template;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::sync::OnceLock;

/// 送出中按鈕顯示的文字
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
struct EscapedText<'a> {
    text: &'a str,
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(
            r#"<(?P<close>/?)(?P<name>[A-Za-z][A-Za-z0-9-]*)(?P<attrs>(?:"[^"]*"|'[^']*'|[^'">])*)>"#,
        )
        .expect("tag pattern is valid")
    })
}

fn attribute_regex() -> &'static Regex {
    static ATTR: OnceLock<Regex> = OnceLock::new();
    ATTR.get_or_init(|| {
        Regex::new(
            r#"\s(?P<name>[A-Za-z_:][-\w:.]*)(?:\s*=\s*(?P<value>"[^"]*"|'[^']*'|[^\s"'>]+))?"#,
        )
        .expect("attribute pattern is valid")
    })
}

/// markup 中的一個開始或結束標籤，位置皆為絕對 byte offset
#[derive(Debug, Clone)]
struct Tag {
    range: Range<usize>,
    attrs: Range<usize>,
    name: String,
    closing: bool,
    self_closing: bool,
}

#[derive(Debug, Clone)]
struct Attribute {
    name: String,
    value: Option<String>,
    range: Range<usize>,
}

fn tags(markup: &str, from: usize) -> impl Iterator<Item = Tag> + '_ {
    tag_regex().captures_iter(&markup[from..]).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let attrs = caps.name("attrs")?;
        Some(Tag {
            range: from + whole.start()..from + whole.end(),
            attrs: from + attrs.start()..from + attrs.end(),
            name: caps["name"].to_ascii_lowercase(),
            closing: !caps["close"].is_empty(),
            self_closing: attrs.as_str().trim_end().ends_with('/'),
        })
    })
}

fn attributes(markup: &str, tag: &Tag) -> Vec<Attribute> {
    let offset = tag.attrs.start;
    attribute_regex()
        .captures_iter(&markup[tag.attrs.clone()])
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.name("value").map(|v| {
                v.as_str()
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string()
            });
            Some(Attribute {
                name: caps["name"].to_ascii_lowercase(),
                value,
                range: offset + whole.start()..offset + whole.end(),
            })
        })
        .collect()
}

fn find_element(markup: &str, id: &str) -> Option<Tag> {
    tags(markup, 0).filter(|tag| !tag.closing).find(|tag| {
        attributes(markup, tag)
            .iter()
            .any(|attr| attr.name == "id" && attr.value.as_deref() == Some(id))
    })
}

/// 元素內容的結尾：對應結束標籤的起點，巢狀的同名標籤會計入深度
fn content_end(markup: &str, open: &Tag) -> usize {
    if open.self_closing {
        return open.range.end;
    }
    let mut depth = 0usize;
    for tag in tags(markup, open.range.end) {
        if tag.name != open.name {
            continue;
        }
        if tag.closing {
            if depth == 0 {
                return tag.range.start;
            }
            depth -= 1;
        } else if !tag.self_closing {
            depth += 1;
        }
    }
    open.range.end
}

/// 在 `>` 或 `/>` 之前加入屬性
fn insert_attribute(markup: &mut String, tag: &Tag, attribute: &str) {
    let at = if tag.self_closing {
        markup[..tag.attrs.end]
            .rfind('/')
            .unwrap_or(tag.attrs.end)
    } else {
        tag.attrs.end
    };
    markup.insert_str(at, &format!(" {}", attribute));
}

/// 渲染目標：只允許附加子元素與切換顯示狀態
#[derive(Debug, Clone)]
pub struct PageView {
    host: HostPage,
    children: BTreeMap<ElementId, Vec<String>>,
    revealed: BTreeSet<ElementId>,
    text: BTreeMap<TextSlot, String>,
    submitting: bool,
}

impl PageView {
    pub fn new(host: HostPage) -> Self {
        Self {
            host,
            children: BTreeMap::new(),
            revealed: BTreeSet::new(),
            text: BTreeMap::new(),
            submitting: false,
        }
    }

    pub fn append(&mut self, id: ElementId, fragment: String) {
        self.children.entry(id).or_default().push(fragment);
    }

    pub fn children(&self, id: ElementId) -> &[String] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reveal(&mut self, id: ElementId) {
        tracing::debug!("Revealing #{}", id);
        self.revealed.insert(id);
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn set_text(&mut self, slot: TextSlot, text: impl Into<String>) {
        self.text.insert(slot, text.into());
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.text.get(&slot).map(String::as_str)
    }

    /// `#contactForm` 的送出按鈕是否停用
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn host(&self) -> &HostPage {
        &self.host
    }

    /// 將渲染結果寫回 host markup
    pub fn compose(&self) -> Result<String> {
        let mut markup = self.host.markup().to_string();

        // 附加在既有子元素之後
        for (id, fragments) in &self.children {
            if fragments.is_empty() {
                continue;
            }
            if let Some(open) = find_element(&markup, id.as_str()) {
                let insert_at = content_end(&markup, &open);
                markup.insert_str(insert_at, &fragments.concat());
            }
        }

        for id in ElementId::ALL.iter().filter(|id| id.is_toggle()) {
            markup = self.apply_visibility(markup, *id);
        }

        if self.submitting {
            markup = disable_submit_button(markup);
        }

        for (slot, text) in &self.text {
            let open = match find_element(&markup, slot.as_str()) {
                Some(open) if self.host.has_id(slot.as_str()) => open,
                _ => {
                    tracing::debug!("Host page has no #{}, skipping", slot.as_str());
                    continue;
                }
            };
            let escaped = EscapedText {
                text: text.as_str(),
            }
            .render()?;
            let end = markup[open.range.end..]
                .find('<')
                .map(|offset| open.range.end + offset)
                .unwrap_or(markup.len());
            markup.replace_range(open.range.end..end, &escaped);
        }

        Ok(markup)
    }

    fn apply_visibility(&self, mut markup: String, id: ElementId) -> String {
        let Some(open) = find_element(&markup, id.as_str()) else {
            return markup;
        };
        let hidden: Vec<Range<usize>> = attributes(&markup, &open)
            .into_iter()
            .filter(|attr| attr.name == "hidden")
            .map(|attr| attr.range)
            .collect();

        if self.is_revealed(id) {
            for range in hidden.into_iter().rev() {
                markup.replace_range(range, "");
            }
        } else if hidden.is_empty() {
            insert_attribute(&mut markup, &open, "hidden");
        }
        markup
    }
}

/// 停用表單內第一個 submit 按鈕並換上送出中文字
fn disable_submit_button(mut markup: String) -> String {
    let Some(form) = find_element(&markup, ElementId::ContactForm.as_str()) else {
        return markup;
    };
    let form_end = content_end(&markup, &form);
    let button = tags(&markup, form.range.end)
        .take_while(|tag| tag.range.start < form_end)
        .find(|tag| {
            !tag.closing
                && tag.name == "button"
                && attributes(&markup, tag).iter().all(|attr| {
                    attr.name != "type" || attr.value.as_deref() == Some("submit")
                })
        });
    let Some(button) = button else {
        tracing::debug!("No submit button inside #{}", ElementId::ContactForm);
        return markup;
    };

    let already_disabled = attributes(&markup, &button)
        .iter()
        .any(|attr| attr.name == "disabled");
    let label_end = content_end(&markup, &button);
    markup.replace_range(button.range.end..label_end, SUBMITTING_LABEL);
    if !already_disabled {
        insert_attribute(&mut markup, &button, "disabled");
    }
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_with(extra: &str) -> HostPage {
        let mut markup: String = ElementId::ALL
            .iter()
            .filter(|id| !id.is_toggle())
            .map(|id| format!(r#"<div id="{}"></div>"#, id))
            .collect();
        markup.push_str(r#"<section id="reviews-section" class="reviews" hidden></section>"#);
        markup.push_str(r#"<a id="view-more-reviews" href="/reviews">More</a>"#);
        markup.push_str(extra);
        HostPage::bind(markup).unwrap()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut view = PageView::new(host_with(""));
        view.append(ElementId::ProjectsContainer, "<p>one</p>".to_string());
        view.append(ElementId::ProjectsContainer, "<p>two</p>".to_string());

        assert_eq!(view.children(ElementId::ProjectsContainer).len(), 2);
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<div id="projects-container"><p>one</p><p>two</p></div>"#));
    }

    #[test]
    fn test_toggles_stay_hidden_until_revealed() {
        let view = PageView::new(host_with(""));
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<section id="reviews-section" class="reviews" hidden>"#));
        assert!(page.contains(r#"<a id="view-more-reviews" href="/reviews" hidden>"#));
    }

    #[test]
    fn test_reveal_removes_hidden_attribute() {
        let mut view = PageView::new(host_with(""));
        view.reveal(ElementId::ReviewsSection);
        view.reveal(ElementId::ViewMoreReviews);
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<section id="reviews-section" class="reviews">"#));
        assert!(page.contains(r#"<a id="view-more-reviews" href="/reviews">"#));
    }

    #[test]
    fn test_text_slot_is_escaped_and_optional() {
        let mut view = PageView::new(host_with(r#"<span id="current-year">1999</span>"#));
        view.set_text(TextSlot::CurrentYear, "2026 <b>");
        view.set_text(TextSlot::TypingText, "not in host");
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<span id="current-year">2026 &lt;b&gt;</span>"#));
        assert!(!page.contains("not in host"));
    }

    fn host_replacing(from: &str, to: &str) -> HostPage {
        let markup = host_with("").markup().replace(from, to);
        HostPage::bind(markup).unwrap()
    }

    #[test]
    fn test_fragments_follow_existing_children() {
        let host = host_replacing(
            r#"<div id="projects-container"></div>"#,
            r#"<div id="projects-container"><p>static</p><div class="row"><div>nested</div></div></div>"#,
        );
        let mut view = PageView::new(host);
        view.append(ElementId::ProjectsContainer, "<p>rendered</p>".to_string());

        let page = view.compose().unwrap();
        assert!(page.contains(
            r#"<div id="projects-container"><p>static</p><div class="row"><div>nested</div></div><p>rendered</p></div>"#
        ));
    }

    #[test]
    fn test_hidden_class_token_is_not_the_hidden_attribute() {
        let host = host_replacing(
            r#"<section id="reviews-section" class="reviews" hidden>"#,
            r#"<section id="reviews-section" class="reviews hidden fade">"#,
        );

        let page = PageView::new(host.clone()).compose().unwrap();
        assert!(page.contains(r#"<section id="reviews-section" class="reviews hidden fade" hidden>"#));

        let mut view = PageView::new(host);
        view.reveal(ElementId::ReviewsSection);
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<section id="reviews-section" class="reviews hidden fade">"#));
    }

    #[test]
    fn test_reveal_removes_valued_hidden_attribute() {
        let host = host_replacing(
            r#"<section id="reviews-section" class="reviews" hidden>"#,
            r#"<section id="reviews-section" hidden="hidden" class="reviews">"#,
        );
        let mut view = PageView::new(host);
        view.reveal(ElementId::ReviewsSection);
        let page = view.compose().unwrap();
        assert!(page.contains(r#"<section id="reviews-section" class="reviews">"#));
    }

    #[test]
    fn test_submitting_disables_submit_button() {
        let host = host_replacing(
            r#"<div id="contactForm"></div>"#,
            r#"<form id="contactForm"><button type="button">Clear</button><button type="submit">Send Message</button></form>"#,
        );
        let mut view = PageView::new(host);

        let idle = view.compose().unwrap();
        assert!(idle.contains(r#"<button type="submit">Send Message</button>"#));

        view.set_submitting(true);
        let busy = view.compose().unwrap();
        assert!(busy.contains(r#"<button type="button">Clear</button>"#));
        assert!(busy.contains(r#"<button type="submit" disabled>Sending...</button>"#));

        view.set_submitting(false);
        assert_eq!(view.compose().unwrap(), idle);
    }
}
