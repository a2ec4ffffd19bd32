//! Counter Ranking Example
//!
//! Loads a small inline record cache, builds a roster and an opponent team
//! from a trainer fight, and prints the best counters for each opponent
//! along with the best attack types against the whole team.

use anyhow::{Context, Result};
use matchdex_chart::{Effectiveness, TypeChart, query};
use matchdex_matchup::{Evaluator, EvaluatorConfig};
use matchdex_records::Dex;
use matchdex_team::{Fight, Roster, find_fights};

const POKEMON: &str = r#"{
    "Sumpex": {
        "Typen": ["Wasser", "Boden"],
        "Statuswerte": {"KP": 100, "Angriff": 110, "Verteidigung": 90,
                        "SpAngriff": 85, "SpVerteidigung": 90, "Initiative": 60},
        "Attacken": {"LevelUp": [{"Name": "Kaskade", "Level": "Start"},
                                 {"Name": "Erdbeben", "Level": "45"}]}
    },
    "Bisaflor": {
        "Typen": ["Pflanze", "Gift"],
        "Statuswerte": {"KP": 80, "Angriff": 82, "Verteidigung": 83,
                        "Sp_Angriff": 100, "Sp_Verteidigung": 100, "Initiative": 80},
        "Attacken": {"LevelUp": [{"Name": "Solarstrahl", "Level": "Start"},
                                 {"Name": "Synthese", "Level": "30"}]}
    },
    "Glurak": {
        "Typen": ["Feuer", "Flug"],
        "Statuswerte": {"KP": 78, "Angriff": 84, "Verteidigung": 78,
                        "SpAngriff": 109, "SpVerteidigung": 85, "Initiative": 100},
        "Attacken": {"LevelUp": [{"Name": "Flammenwurf", "Level": "Start"}]}
    },
    "Onix": {
        "Typen": ["Gestein", "Boden"],
        "Statuswerte": {"KP": 35, "Angriff": 45, "Verteidigung": 160,
                        "SpAngriff": 30, "SpVerteidigung": 45, "Initiative": 70},
        "Attacken": {"LevelUp": [{"Name": "Steinwurf", "Level": "Start"}]}
    },
    "Kleinstein": {
        "Typen": ["Gestein", "Boden"],
        "Statuswerte": {"KP": 40, "Angriff": 80, "Verteidigung": 100,
                        "SpAngriff": 30, "SpVerteidigung": 30, "Initiative": 20},
        "Attacken": {"LevelUp": [{"Name": "Tackle", "Level": "Start"}]}
    }
}"#;

const ATTACKS: &str = r#"{
    "Kaskade": {"Name": "Kaskade", "Typ": "Wasser", "Kategorie": "Physisch", "Stärke": "80", "Genauigkeit": "100"},
    "Erdbeben": {"Name": "Erdbeben", "Typ": "Boden", "Kategorie": "Physisch", "Stärke": "100", "Genauigkeit": "100"},
    "Solarstrahl": {"Name": "Solarstrahl", "Typ": "Pflanze", "Kategorie": "Speziell", "Stärke": "120", "Genauigkeit": "100"},
    "Synthese": {"Name": "Synthese", "Typ": "Pflanze", "Kategorie": "Status", "Stärke": "—", "Genauigkeit": "—"},
    "Flammenwurf": {"Name": "Flammenwurf", "Typ": "Feuer", "Kategorie": "Speziell", "Stärke": "90", "Genauigkeit": "100"},
    "Steinwurf": {"Name": "Steinwurf", "Typ": "Gestein", "Kategorie": "Physisch", "Stärke": "50", "Genauigkeit": "90"},
    "Tackle": {"Name": "Tackle", "Typ": "Normal", "Kategorie": "Physisch", "Stärke": "40", "Genauigkeit": "100"}
}"#;

const FIGHTS: &str = r#"[
    {"trainer_name": "Rocko", "trainer_class": "Arenaleiter", "location": "Marmoria City",
     "team": [{"id": "0074", "level": 12}, {"id": "0095", "level": 14, "moves": ["Tackle", "Steinwurf"]}]}
]"#;

fn id_to_name(id: &str) -> Option<String> {
    match id {
        "0074" => Some("Kleinstein".to_string()),
        "0095" => Some("Onix".to_string()),
        _ => None,
    }
}

fn main() -> Result<()> {
    let dex = Dex::from_cache_json(POKEMON, ATTACKS)?;
    let fights = Fight::parse_all(FIGHTS).context("Failed to parse fight data")?;
    let fight = find_fights(&fights, "rocko")
        .into_iter()
        .next()
        .context("No fight found for trainer")?;

    let roster = Roster::new(["Sumpex", "Bisaflor", "Glurak", "Mewtu"]);
    let own = roster.resolve(&dex);
    let opponents = fight.opponent_team(&dex, id_to_name);
    for name in own.missing.iter().chain(&opponents.missing) {
        println!("Not found: {}", name);
    }

    let chart = TypeChart::standard();
    let evaluator = Evaluator::new(&chart, EvaluatorConfig::default())?.with_move_source(&dex);
    let report = evaluator.evaluate(&own.combatants, &opponents.combatants);

    println!("=== {} ({}) ===", fight.trainer_name, fight.location.as_deref().unwrap_or("?"));
    for ranking in &report.rankings {
        println!("\nvs {}", ranking.opponent);
        for (i, counter) in ranking.counters.iter().enumerate() {
            let reasons: Vec<String> = counter.reasons.iter().map(|r| r.to_string()).collect();
            println!(
                "  {}. {:<10} {:>5.1}  [{}] uses {} / faces {}{}",
                i + 1,
                counter.own,
                counter.score,
                reasons.join(", "),
                counter.best_own_move.as_deref().unwrap_or("-"),
                counter.best_opponent_move.as_deref().unwrap_or("-"),
                if counter.exposure_warning { "  (exposed)" } else { "" },
            );
        }
    }
    for skipped in &report.skipped {
        println!("Skipped {} vs {}: {}", skipped.own, skipped.opponent, skipped.reason);
    }

    let team_types: Vec<_> = opponents.combatants.iter().map(|c| c.types.clone()).collect();
    println!("\nBest attack types:");
    for (attack, mean) in query::optimal_attack_types(&chart, &team_types) {
        let tier = Effectiveness::from_multiplier(mean).map_or("", |t| t.label());
        println!("  {:<10} {:.2} {}", attack.as_str(), mean, tier);
    }

    Ok(())
}
