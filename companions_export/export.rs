use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::record::{load_rows, Team};
use crate::render::{render_companions, select_companions};
use crate::settings::Settings;

pub struct ExportStats {
    pub loaded: usize,
    pub autobots: usize,
    pub decepticons: usize,
    pub output: PathBuf,
}

/// Load the table, keep Autobot and Decepticon rows, write the rendered block.
pub fn run(settings: &Settings) -> Result<ExportStats> {
    let rows = load_rows(&settings.csv_path)?;
    let loaded = rows.len();
    info!("Loaded {} rows from {}", loaded, settings.csv_path.display());

    let companions = select_companions(rows);
    let autobots = companions.iter().filter(|c| c.team == Team::Autobot).count();
    let decepticons = companions.len() - autobots;
    debug!(autobots, decepticons, dropped = loaded - companions.len(), "team split");

    let output = settings.output_path();
    fs::write(&output, render_companions(&companions))
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("Saved {} companions to {}", companions.len(), output.display());

    Ok(ExportStats {
        loaded,
        autobots,
        decepticons,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
US Name,RU Name,Team,Season,Type
Autobots,,,,
Optimus Prime/Orion Pax,Оптимус Прайм,Autobot,1.0,Leader
Megatron/Galvatron,Мегатрон,Decepticon,1,Leader
Spike Witwicky,Спайк Уитвики,Human,1,
Bumblebee,Бамблби,Autobot,,
Soundwave,Саундвейв,Decepticon,2,Communications
\"Sideswipe\",\"Сайдсвайп\",Autobot,abc,
";

    #[test]
    fn writes_block_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("G1_translations.csv");
        fs::write(&csv_path, TABLE).unwrap();

        let stats = run(&Settings { csv_path }).unwrap();
        assert_eq!(stats.loaded, 7);
        assert_eq!(stats.autobots, 3);
        assert_eq!(stats.decepticons, 2);
        assert_eq!(stats.output, dir.path().join("G1_translations.output.ts"));

        let written = fs::read_to_string(&stats.output).unwrap();
        let expected = "\
companions: [
  { id: 'optimusprime', name: 'Оптимус Прайм', desc: 'Optimus Prime/Orion Pax', meta: 'G1 s1' }, // Leader
  { id: 'bumblebee', name: 'Бамблби', desc: 'Bumblebee', meta: '' },
  { id: 'sideswipe', name: 'Сайдсвайп', desc: 'Sideswipe', meta: '' },
  { id: 'megatron', name: 'Мегатрон', desc: 'Megatron/Galvatron', meta: 'G1 s1' }, // Leader
  { id: 'soundwave', name: 'Саундвейв', desc: 'Soundwave', meta: 'G1 s2' }, // Communications
]";
        assert_eq!(written, expected);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            csv_path: dir.path().join("absent.csv"),
        };
        assert!(run(&settings).is_err());
        assert!(!settings.output_path().exists());
    }
}
