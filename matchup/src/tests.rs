#[cfg(test)]
mod tests {
    use matchdex_chart::{BaseChart, ChartTable, Type, TypeChart};
    use matchdex_records::{
        Accuracy, Combatant, Dex, MoveCategory, MoveRecord, Power, RecordSource, StatBlock,
    };
    use matchdex_team::{Fight, Roster};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{
        CategorySource, Evaluator, EvaluatorConfig, MatchupError, Reason, SurvivalInput,
        estimate_damage, resolve_move, survival_estimate,
    };

    fn attack(name: &str, t: Type, category: MoveCategory, power: u32) -> MoveRecord {
        MoveRecord::new(name, t, category, Power::Fixed(power), Accuracy::Percent(100))
    }

    fn mon(name: &str, types: Vec<Type>, stats: StatBlock, moves: Vec<MoveRecord>) -> Combatant {
        Combatant::new(name, types, stats).with_moves(moves)
    }

    fn even_stats(value: u32) -> StatBlock {
        StatBlock::new(value, value, value, value, value, value)
    }

    #[test]
    fn test_damage_is_non_negative_and_monotonic() {
        let chart = TypeChart::standard();
        let config = EvaluatorConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..300 {
            let power = rng.gen_range(0..250u32);
            let attack_stat = rng.gen_range(0..255u32);
            let defense_stat = rng.gen_range(0..255u32);
            let move_type = Type::ALL[rng.gen_range(0..Type::ALL.len())];
            let defender_type = Type::ALL[rng.gen_range(0..Type::ALL.len())];

            let defender = Combatant::new(
                "defender",
                vec![defender_type],
                StatBlock::new(100, 0, defense_stat, 0, 0, 0),
            );
            let estimate = |power: u32, attack_stat: u32| {
                let attacker =
                    Combatant::new("attacker", vec![Type::Normal], StatBlock::new(100, attack_stat, 0, 0, 0, 0));
                let record = attack("move", move_type, MoveCategory::Physical, power);
                let resolved = resolve_move(&record, &attacker.stats, &config, None);
                estimate_damage(&chart, &attacker, &resolved, &defender)
                    .unwrap()
                    .expected
            };

            let base = estimate(power, attack_stat);
            assert!(base >= 0.0);
            assert!(estimate(power + rng.gen_range(1..50), attack_stat) >= base);
            assert!(estimate(power, attack_stat + rng.gen_range(1..50)) >= base);
        }
    }

    #[test]
    fn test_damage_monotonic_in_effectiveness() {
        let chart = TypeChart::standard();
        let config = EvaluatorConfig::default();
        let attacker = mon("Glurak", vec![Type::Fire], even_stats(80), Vec::new());
        let flamethrower = attack("Flammenwurf", Type::Fire, MoveCategory::Special, 90);
        let resolved = resolve_move(&flamethrower, &attacker.stats, &config, None);

        // 0.25, 0.5, 1, 2, 4
        let defenders = [
            vec![Type::Water, Type::Rock],
            vec![Type::Water],
            vec![Type::Normal],
            vec![Type::Grass],
            vec![Type::Grass, Type::Steel],
        ];
        let damages: Vec<f64> = defenders
            .iter()
            .map(|types| {
                let defender = Combatant::new("d", types.clone(), even_stats(80));
                estimate_damage(&chart, &attacker, &resolved, &defender)
                    .unwrap()
                    .expected
            })
            .collect();
        assert!(damages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(damages[4], damages[0] * 16.0);
    }

    #[test]
    fn test_degenerate_run_scores_fifty() {
        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();

        let own: Vec<Combatant> = ["A", "B", "C"]
            .iter()
            .map(|n| mon(n, vec![Type::Normal], even_stats(60), Vec::new()))
            .collect();
        let opponents: Vec<Combatant> = ["X", "Y"]
            .iter()
            .map(|n| mon(n, vec![Type::Water], even_stats(60), Vec::new()))
            .collect();

        let report = evaluator.evaluate(&own, &opponents);
        assert_eq!(report.pairs.len(), 6);
        for pair in &report.pairs {
            assert_eq!(pair.breakdown.damage, 0.5);
            assert_eq!(pair.score, 50.0);
        }
    }

    #[test]
    fn test_identical_damage_is_midpoint() {
        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();
        let tackle = attack("Tackle", Type::Normal, MoveCategory::Physical, 40);

        let own = vec![
            mon("A", vec![Type::Normal], even_stats(60), vec![tackle.clone()]),
            mon("B", vec![Type::Normal], even_stats(60), vec![tackle.clone()]),
        ];
        let opponents = vec![mon("X", vec![Type::Normal], even_stats(60), vec![tackle])];

        let report = evaluator.evaluate(&own, &opponents);
        for pair in &report.pairs {
            assert_eq!(pair.breakdown.damage, 0.5);
            assert_eq!(pair.breakdown.exposure, 0.5);
            assert_eq!(pair.score, 50.0);
        }
    }

    #[test]
    fn test_speed_tie_both_one_shot() {
        let input = SurvivalInput {
            own_speed: 100,
            opponent_speed: 100,
            outgoing: 250.0,
            opponent_hp: 90,
            incoming: 400.0,
            own_hp: 95,
        };
        assert_eq!(survival_estimate(&input, true), 1.0);
    }

    #[test]
    fn test_slower_takes_eighty_percent() {
        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();

        // Opponent's Tackle deals exactly 80 to our 100 HP; we cannot KO
        let own = mon(
            "Slow",
            vec![Type::Water],
            StatBlock::new(100, 10, 50, 10, 50, 30),
            vec![attack("Aquaknarre", Type::Water, MoveCategory::Special, 10)],
        );
        let opponent = mon(
            "Fast",
            vec![Type::Fighting],
            StatBlock::new(500, 100, 50, 10, 50, 90),
            vec![attack("Tackle", Type::Normal, MoveCategory::Physical, 40)],
        );

        let report = evaluator.evaluate(&[own], &[opponent]);
        let pair = report.pair("Slow", "Fast").unwrap();
        assert_eq!(pair.incoming_damage(), 80.0);
        assert!((pair.breakdown.survival - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chart_is_fatal() {
        let chart = TypeChart::from_table(&ChartTable::new()).unwrap();
        assert_eq!(
            Evaluator::new(&chart, EvaluatorConfig::default()).err(),
            Some(MatchupError::EmptyChart)
        );

        let neutral = TypeChart::build(&BaseChart::new());
        assert!(Evaluator::new(&neutral, EvaluatorConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_pair_is_skipped() {
        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();
        let tackle = attack("Tackle", Type::Normal, MoveCategory::Physical, 40);

        let own = vec![
            mon("Good", vec![Type::Normal], even_stats(60), vec![tackle.clone()]),
            mon("Broken", vec![], even_stats(60), vec![tackle.clone()]),
        ];
        let opponents = vec![mon("X", vec![Type::Rock], even_stats(60), vec![tackle])];

        let report = evaluator.evaluate(&own, &opponents);
        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].own, "Broken");
        assert!(report.skipped[0].reason.contains("1 or 2 types"));

        let ranking = report.ranking("X").unwrap();
        assert_eq!(ranking.counters.len(), 1);
        assert_eq!(ranking.counters[0].own, "Good");
    }

    #[test]
    fn test_ranking_order_and_details() {
        let chart = TypeChart::standard();
        let mut config = EvaluatorConfig::default();
        config.top_n = 2;
        let evaluator = Evaluator::new(&chart, config).unwrap();

        let own = vec![
            mon(
                "Sumpex",
                vec![Type::Water, Type::Ground],
                StatBlock::new(100, 110, 90, 85, 90, 60),
                vec![
                    attack("Tackle", Type::Normal, MoveCategory::Physical, 40),
                    attack("Erdbeben", Type::Ground, MoveCategory::Physical, 100),
                ],
            ),
            mon(
                "Bisaflor",
                vec![Type::Grass, Type::Poison],
                StatBlock::new(80, 82, 83, 100, 100, 80),
                vec![
                    attack("Solarstrahl", Type::Grass, MoveCategory::Special, 120),
                    attack("Synthese", Type::Grass, MoveCategory::Status, 0),
                ],
            ),
            mon(
                "Rattfratz",
                vec![Type::Normal],
                StatBlock::new(30, 56, 35, 25, 35, 72),
                vec![attack("Tackle", Type::Normal, MoveCategory::Physical, 40)],
            ),
        ];
        let opponents = vec![mon(
            "Raichu",
            vec![Type::Electric],
            StatBlock::new(60, 90, 55, 90, 80, 110),
            vec![attack("Donnerblitz", Type::Electric, MoveCategory::Special, 90)],
        )];

        let report = evaluator.evaluate(&own, &opponents);
        let ranking = report.ranking("Raichu").unwrap();
        assert_eq!(ranking.counters.len(), 2);

        let best = &ranking.counters[0];
        assert_eq!(best.own, "Sumpex");
        assert_eq!(best.score, 100.0);
        assert_eq!(best.best_own_move.as_deref(), Some("Erdbeben"));
        assert_eq!(best.best_opponent_move.as_deref(), Some("Donnerblitz"));
        assert!(!best.exposure_warning);
        assert_eq!(best.reasons.len(), 2);
        assert!(matches!(best.reasons[0], Reason::Survival(_)));
        assert!(matches!(best.reasons[1], Reason::Damage(_)));

        assert!(ranking.counters[0].score >= ranking.counters[1].score);
        assert!(report.pairs.iter().all(|p| (0.0..=100.0).contains(&p.score)));
    }

    #[test]
    fn test_exposure_warning() {
        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default()).unwrap();
        let surf = attack("Surfer", Type::Water, MoveCategory::Special, 90);

        let own = vec![
            mon("Arkani", vec![Type::Fire], even_stats(80), vec![]),
            mon("Lapras", vec![Type::Water, Type::Ice], even_stats(80), vec![]),
        ];
        let opponents = vec![mon("Garados", vec![Type::Water, Type::Flying], even_stats(80), vec![surf])];

        let report = evaluator.evaluate(&own, &opponents);
        let ranking = report.ranking("Garados").unwrap();
        let arcanine = ranking.counters.iter().find(|c| c.own == "Arkani").unwrap();
        let lapras = ranking.counters.iter().find(|c| c.own == "Lapras").unwrap();

        assert_eq!(arcanine.exposure, 1.0);
        assert!(arcanine.exposure_warning);
        assert!(lapras.exposure < 0.4);
        assert!(!lapras.exposure_warning);
        assert_eq!(ranking.counters[0].own, "Lapras");
    }

    #[test]
    fn test_exposure_warning_at_threshold() {
        let chart = TypeChart::standard();
        let config = EvaluatorConfig::default();
        let threshold = config.exposure_warning;
        let evaluator = Evaluator::new(&chart, config).unwrap();
        let body_slam = attack("Bodyslam", Type::Normal, MoveCategory::Physical, 80);

        // Incoming 80 and 100 against the same attacker: exposure 0.8 / 2
        let own = vec![
            mon("Relaxo", vec![Type::Normal], StatBlock::new(100, 50, 50, 50, 50, 50), vec![]),
            mon("Evoli", vec![Type::Normal], StatBlock::new(100, 50, 40, 50, 50, 50), vec![]),
        ];
        let opponents = vec![
            mon("Glurak", vec![Type::Fire], StatBlock::new(100, 50, 50, 50, 50, 50), vec![body_slam]),
            mon("Karpador", vec![Type::Water], even_stats(50), vec![]),
        ];

        let report = evaluator.evaluate(&own, &opponents);
        let ranking = report.ranking("Glurak").unwrap();
        let snorlax = ranking.counters.iter().find(|c| c.own == "Relaxo").unwrap();
        let eevee = ranking.counters.iter().find(|c| c.own == "Evoli").unwrap();

        assert_eq!(snorlax.exposure, threshold);
        assert!(snorlax.exposure_warning);
        assert_eq!(eevee.exposure, 0.5);
        assert!(eevee.exposure_warning);

        let mut config = EvaluatorConfig::default();
        config.exposure_warning = 0.41;
        let report = Evaluator::new(&chart, config).unwrap().evaluate(&own, &opponents);
        let ranking = report.ranking("Glurak").unwrap();
        let snorlax = ranking.counters.iter().find(|c| c.own == "Relaxo").unwrap();
        assert!(!snorlax.exposure_warning);
    }

    #[test]
    fn test_move_source_fills_category() {
        let chart = TypeChart::standard();
        let mut db = Dex::new();
        db.insert_move(attack("Psychokinese", Type::Psychic, MoveCategory::Special, 90));

        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default())
            .unwrap()
            .with_move_source(&db);

        // Physical attacker, but the database knows the move is special
        let attacker = mon(
            "Kadabra",
            vec![Type::Psychic],
            StatBlock::new(40, 90, 30, 40, 70, 105),
            Vec::new(),
        );
        let bare = MoveRecord {
            move_type: None,
            ..attack("Psychokinese", Type::Psychic, MoveCategory::Special, 90)
        }
        .without_category();
        let defender = mon("Machomei", vec![Type::Fighting], even_stats(80), Vec::new());

        let estimate = evaluator.estimate_damage(&attacker, &bare, &defender).unwrap();
        assert_eq!(estimate.category, MoveCategory::Special);
        assert_eq!(estimate.category_source, CategorySource::Cached);
        assert_eq!(estimate.effectiveness, 2.0);
        assert_eq!(estimate.stab, 1.5);
    }

    #[test]
    fn test_end_to_end_from_cache() {
        let pokemon = r#"{
            "Pikachu": {
                "Typen": ["Elektro"],
                "Statuswerte": {"KP": 35, "Angriff": 55, "Verteidigung": 40,
                                "Sp_Angriff": 50, "SpVerteidigung": 50, "Initiative": 90},
                "Attacken": {"LevelUp": [{"Name": "Donnerschock", "Level": "Start"},
                                         {"Name": "Donner", "Level": "50"}]}
            },
            "Onix": {
                "Typen": ["Gestein", "Boden"],
                "Statuswerte": {"KP": 35, "Angriff": 45, "Verteidigung": 160,
                                "SpAngriff": 30, "SpVerteidigung": 45, "Initiative": 70},
                "Attacken": {"LevelUp": [{"Name": "Steinwurf", "Level": "Start"}]}
            },
            "Garados": {
                "Typen": ["Wasser", "Flug"],
                "Statuswerte": {"KP": 95, "Angriff": 125, "Verteidigung": 79,
                                "SpAngriff": 60, "SpVerteidigung": 100, "Initiative": 81},
                "Attacken": {"LevelUp": [{"Name": "Kaskade", "Level": "Start"}]}
            }
        }"#;
        let attacks = r#"{
            "Donnerschock": {"Name": "Donnerschock", "Typ": "Elektro", "Kategorie": "Speziell",
                             "Stärke": "40", "Genauigkeit": "100", "AP": "30"},
            "Donner": {"Name": "Donner", "Typ": "Elektro", "Kategorie": "Speziell",
                       "Stärke": "110", "Genauigkeit": "70", "AP": "10"},
            "Steinwurf": {"Name": "Steinwurf", "Typ": "Gestein", "Kategorie": "Physisch",
                          "Stärke": "50", "Genauigkeit": "90", "AP": "15"},
            "Kaskade": {"Name": "Kaskade", "Typ": "Wasser", "Kategorie": "Physisch",
                        "Stärke": "80", "Genauigkeit": "100", "AP": "15"}
        }"#;
        let fights = r#"[{"trainer_name": "Rocko", "team": [{"id": "0095", "level": 14}]}]"#;

        let dex = Dex::from_cache_json(pokemon, attacks).unwrap();
        let roster = Roster::new(["Pikachu", "Garados", "Mewtu"]);
        let own = roster.resolve(&dex);
        assert_eq!(own.missing, vec!["Mewtu".to_string()]);

        let fights = Fight::parse_all(fights).unwrap();
        let opponents = fights[0].opponent_team(&dex, |id| (id == "0095").then(|| "Onix".to_string()));
        assert!(opponents.is_complete());

        let chart = TypeChart::standard();
        let evaluator = Evaluator::new(&chart, EvaluatorConfig::default())
            .unwrap()
            .with_move_source(&dex);
        let report = evaluator.evaluate(&own.combatants, &opponents.combatants);

        assert!(report.skipped.is_empty());
        let ranking = report.ranking("Onix").unwrap();
        assert_eq!(ranking.counters[0].own, "Garados");
        assert_eq!(ranking.counters[0].best_own_move.as_deref(), Some("Kaskade"));

        // Electric against Rock/Ground does nothing
        let pikachu = report.pair("Pikachu", "Onix").unwrap();
        assert_eq!(pikachu.outgoing_damage(), 0.0);
        assert!(dex.combatant("Pikachu").unwrap().moves.len() == 2);
    }
}
