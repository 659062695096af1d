use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Id from the first `/`-separated alias of a US name: lowercased, words run together,
/// everything but `a-z0-9` dropped.
pub fn make_id(us_name: Option<&str>) -> String {
    let Some(name) = us_name else {
        return String::new();
    };
    let first = name.split('/').next().unwrap_or_default().trim().to_lowercase();
    NON_ALNUM.replace_all(&first, "").into_owned()
}

/// `G1 s{season}` with the season truncated to an integer, or empty if it is not a number.
pub fn make_meta(season: Option<&str>) -> String {
    season
        .and_then(parse_season)
        .map(|s| format!("G1 s{}", s))
        .unwrap_or_default()
}

/// Season rendered as a whole number, truncated toward zero. Not bounded to any integer type.
fn parse_season(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // + 0.0 turns -0.0 into 0.0
    Some(format!("{:.0}", value.trunc() + 0.0))
}

/// Escape for a single-quoted literal. Backslashes must be doubled before quotes are escaped.
pub fn esc(value: Option<&str>) -> String {
    match value {
        Some(s) => s.replace('\\', "\\\\").replace('\'', "\\'"),
        None => String::new(),
    }
}
