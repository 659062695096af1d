use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::sections::{element_text, extract_section_text};

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

pub const SYNOPSIS: &str = "Synopsis";
pub const FEATURED_CHARACTERS: &str = "Featured characters";

/// Separator placed between page fragments in the output document.
pub const FRAGMENT_SEPARATOR: &str = "\n---\n\n";

/// Markdown fragment for one page: title, source comment, Synopsis and
/// Featured characters, with a comment in place of any section not found.
pub fn build_markdown_fragment(url: &str, html_text: &str) -> String {
    let doc = Html::parse_document(html_text);

    let Some(h1) = doc.select(&H1).next() else {
        return format!("<!-- No <h1> title found for {} -->\n", url);
    };
    let title = element_text(h1);

    let synopsis = extract_section_text(&doc, SYNOPSIS, &[]);
    // Character lists on the wiki are often wrapped in plain divs.
    let featured = extract_section_text(&doc, FEATURED_CHARACTERS, &["div"]);

    let mut lines: Vec<String> = vec![
        format!("# {}", title),
        String::new(),
        format!("<!-- Source: {} -->", url),
        String::new(),
    ];
    push_section(&mut lines, SYNOPSIS, synopsis.as_deref());
    push_section(&mut lines, FEATURED_CHARACTERS, featured.as_deref());

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, name: &str, text: Option<&str>) {
    match text {
        Some(text) => {
            lines.push(format!("## {}", name));
            lines.push(String::new());
            lines.push(text.to_string());
            lines.push(String::new());
        }
        None => {
            lines.push(format!("<!-- {} section not found -->", name));
            lines.push(String::new());
        }
    }
}

/// Placeholder fragment recorded when a page could not be fetched.
pub fn failure_fragment(url: &str, error: &dyn std::fmt::Display) -> String {
    format!("<!-- FAILED to process {}: {} -->\n", url, error)
}

/// Join all fragments into the final document.
pub fn join_fragments(fragments: &[String]) -> String {
    fragments.join(FRAGMENT_SEPARATOR)
}

// ── Tests ──
