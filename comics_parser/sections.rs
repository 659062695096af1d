use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());

/// Content tags collected under every section heading.
const CONTENT_TAGS: [&str; 4] = ["p", "ul", "ol", "li"];

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Elements whose contents never count as page text.
const NON_TEXT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Text nodes under `el`, skipping anything inside `script`, `style` or `template`.
fn visible_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.descendants().filter_map(move |node| {
        let text = node.value().as_text()?;
        let hidden = node
            .ancestors()
            .take_while(|a| a.id() != el.id())
            .any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| NON_TEXT_TAGS.contains(&e.name()))
            });
        if hidden {
            None
        } else {
            Some(&**text)
        }
    })
}

/// Visible text of `el`, text nodes separated by a space, whitespace-collapsed.
pub fn element_text(el: ElementRef) -> String {
    normalize_ws(&visible_text(el).collect::<Vec<_>>().join(" "))
}

/// Heading text as matched against section titles: every text node trimmed, glued without separator.
fn heading_text(el: ElementRef) -> String {
    visible_text(el).map(str::trim).collect()
}

fn find_heading<'a>(doc: &'a Html, section_title: &str) -> Option<ElementRef<'a>> {
    doc.select(&H2).find(|h| heading_text(*h) == section_title)
}

/// Find the first `<h2>` titled `section_title` and collect the text of its
/// following siblings up to the next `<h2>`.
///
/// Only `p`, `ul`, `ol`, `li` and any `extra_tags` contribute; everything else
/// between the headings is skipped. Returns `None` when the heading is missing
/// or nothing under it yields text.
pub fn extract_section_text(doc: &Html, section_title: &str, extra_tags: &[&str]) -> Option<String> {
    let header = find_heading(doc, section_title)?;

    let allowed: HashSet<&str> = CONTENT_TAGS
        .iter()
        .copied()
        .chain(extra_tags.iter().copied())
        .collect();

    let mut parts: Vec<String> = Vec::new();
    for sibling in header.next_siblings() {
        let Some(el) = ElementRef::wrap(sibling) else {
            continue;
        };
        let name = el.value().name();
        if name == "h2" {
            break;
        }
        if allowed.contains(name) {
            let text = element_text(el);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, title: &str, extra: &[&str]) -> Option<String> {
        let doc = Html::parse_document(html);
        extract_section_text(&doc, title, extra)
    }

    #[test]
    fn collects_until_next_h2() {
        let html = "<body>\
            <h2>Synopsis</h2>\
            <p>Megatron works the mines.</p>\
            <ul><li>Kaon</li><li>Tarn</li></ul>\
            <h2>Notes</h2>\
            <p>Not part of it.</p>\
            </body>";
        assert_eq!(
            extract(html, "Synopsis", &[]).as_deref(),
            Some("Megatron works the mines.\n\nKaon Tarn")
        );
    }

    #[test]
    fn runs_to_end_of_document() {
        let html = "<h2>Synopsis</h2><p>One.</p><ol><li>Two</li></ol>";
        assert_eq!(extract(html, "Synopsis", &[]).as_deref(), Some("One.\n\nTwo"));
    }

    #[test]
    fn missing_heading_is_none() {
        let html = "<h2>Notes</h2><p>Something.</p>";
        assert_eq!(extract(html, "Synopsis", &[]), None);
    }

    #[test]
    fn heading_with_only_disallowed_content_is_none() {
        let html = "<h2>Synopsis</h2><table><tr><td>cell</td></tr></table><div>box</div><h2>Next</h2>";
        assert_eq!(extract(html, "Synopsis", &[]), None);
    }

    #[test]
    fn empty_paragraphs_are_skipped() {
        let html = "<h2>Synopsis</h2><p>   </p><p>Kept.</p><p>\n</p>";
        assert_eq!(extract(html, "Synopsis", &[]).as_deref(), Some("Kept."));
    }

    #[test]
    fn heading_text_ignores_wrapping_markup_and_padding() {
        let html = "<h2>\n  <span class=\"mw-headline\"> Synopsis </span>\n</h2><p>Body.</p>";
        assert_eq!(extract(html, "Synopsis", &[]).as_deref(), Some("Body."));
    }

    #[test]
    fn match_is_exact() {
        let html = "<h2>Synopsis (part 1)</h2><p>No.</p><h2>synopsis</h2><p>No either.</p>";
        assert_eq!(extract(html, "Synopsis", &[]), None);
    }

    #[test]
    fn first_matching_heading_wins() {
        let html = "<h2>Synopsis</h2><p>First.</p><h2>Synopsis</h2><p>Second.</p>";
        assert_eq!(extract(html, "Synopsis", &[]).as_deref(), Some("First."));
    }

    #[test]
    fn whitespace_is_collapsed_across_inline_markup() {
        let html = "<h2>Synopsis</h2><p>Line one\n    continues  <b>here</b>\t now.</p>";
        assert_eq!(
            extract(html, "Synopsis", &[]).as_deref(),
            Some("Line one continues here now.")
        );
    }

    #[test]
    fn extra_tags_add_to_defaults() {
        let html = "<h2>Featured characters</h2>\
            <div><a>Megatron</a>, <a>Ratbat</a></div>\
            <p>Plus cameos.</p>\
            <h2>Notes</h2>";
        assert_eq!(
            extract(html, "Featured characters", &[]).as_deref(),
            Some("Plus cameos.")
        );
        assert_eq!(
            extract(html, "Featured characters", &["div"]).as_deref(),
            Some("Megatron , Ratbat\n\nPlus cameos.")
        );
    }

    #[test]
    fn extra_tags_alone_can_fill_a_section() {
        let html = "<h2>Featured characters</h2><div>Only in a div</div>";
        assert_eq!(extract(html, "Featured characters", &[]), None);
        assert_eq!(
            extract(html, "Featured characters", &["div"]).as_deref(),
            Some("Only in a div")
        );
    }

    #[test]
    fn nested_h2_does_not_stop_collection() {
        let html = "<h2>Featured characters</h2><div><h2>Inner</h2><p>Deep</p></div><p>After</p>";
        assert_eq!(
            extract(html, "Featured characters", &["div"]).as_deref(),
            Some("Inner Deep\n\nAfter")
        );
    }

    #[test]
    fn script_and_style_contents_are_not_text() {
        let html = "<h2>Featured characters</h2>\
            <div><style>.mw-parser-output .x{color:red}</style>\
            <ul><li>Megatron</li></ul>\
            <script>var a=1;</script></div>";
        assert_eq!(
            extract(html, "Featured characters", &["div"]).as_deref(),
            Some("Megatron")
        );
    }

    #[test]
    fn div_with_only_styles_is_empty() {
        let html = "<h2>Featured characters</h2><div><style>.a{}</style></div><p>Kept.</p>";
        assert_eq!(
            extract(html, "Featured characters", &["div"]).as_deref(),
            Some("Kept.")
        );
    }

    #[test]
    fn heading_match_ignores_script_text() {
        let html = "<h2>Synopsis<script>track()</script></h2><p>Body.</p>";
        assert_eq!(extract(html, "Synopsis", &[]).as_deref(), Some("Body."));
    }

    #[test]
    fn normalize_ws_trims_and_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(" \n "), "");
    }
}
