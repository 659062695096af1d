use crate::record::{CompanionRow, Team};
use crate::utils::{esc, make_id, make_meta};

pub const OPENING: &str = "companions: [";
pub const CLOSING: &str = "]";

/// A character row that passed the team filter, with derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    pub id: String,
    /// Localized display name (`RU Name`).
    pub name: Option<String>,
    /// Original name (`US Name`).
    pub desc: Option<String>,
    pub meta: String,
    pub kind: Option<String>,
    pub team: Team,
}

impl Companion {
    pub fn from_row(row: CompanionRow) -> Option<Self> {
        let team = row.team.as_deref().and_then(Team::parse)?;
        Some(Companion {
            id: make_id(row.us_name.as_deref()),
            meta: make_meta(row.season.as_deref()),
            name: row.ru_name,
            desc: row.us_name,
            kind: row.kind,
            team,
        })
    }
}

/// Drop non-character rows, then put every Autobot before every Decepticon.
/// Input order is kept within each team.
pub fn select_companions(rows: Vec<CompanionRow>) -> Vec<Companion> {
    let (autobots, decepticons): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .filter_map(Companion::from_row)
        .partition(|c| c.team == Team::Autobot);

    autobots.into_iter().chain(decepticons).collect()
}

pub fn render_line(c: &Companion) -> String {
    let mut line = format!(
        "  {{ id: '{}', name: '{}', desc: '{}', meta: '{}' }},",
        esc(Some(&c.id)),
        esc(c.name.as_deref()),
        esc(c.desc.as_deref()),
        esc(Some(&c.meta)),
    );

    // Type goes out verbatim.
    if let Some(kind) = c.kind.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        line.push_str(" // ");
        line.push_str(kind);
    }
    line
}

pub fn render_companions(companions: &[Companion]) -> String {
    let mut lines = Vec::with_capacity(companions.len() + 2);
    lines.push(OPENING.to_string());
    lines.extend(companions.iter().map(render_line));
    lines.push(CLOSING.to_string());
    lines.join("\n")
}

// ── Tests ──
