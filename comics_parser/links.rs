/// Pages to fetch, one URL per line.
pub const LINKS_TEXT: &str = "
https://tfwiki.net/wiki/Megatron_Origin_issue_1
https://tfwiki.net/wiki/Megatron_Origin_issue_2
https://tfwiki.net/wiki/Megatron_Origin_issue_3
https://tfwiki.net/wiki/Megatron_Origin_issue_4
";

/// Split a multi-line link block into trimmed URLs, dropping blank lines.
pub fn parse_links(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn default_links() -> Vec<String> {
    parse_links(LINKS_TEXT)
}
