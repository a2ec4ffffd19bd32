#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{BaseChart, ChartError, DefenderKey, ENTRIES_PER_ATTACKER, Type, TypeChart};

    fn random_type(rng: &mut StdRng) -> Type {
        Type::ALL[rng.gen_range(0..Type::ALL.len())]
    }

    #[test]
    fn test_build_is_total() {
        let chart = TypeChart::standard();
        assert_eq!(ENTRIES_PER_ATTACKER, 171);
        for attack in Type::all() {
            assert_eq!(chart.row_len(*attack), 171);
        }
        assert!(chart.is_complete());

        let empty = TypeChart::build(&BaseChart::new());
        assert!(empty.is_complete());
    }

    #[test]
    fn test_single_entries_match_base() {
        let base = BaseChart::new()
            .with(Type::Fire, Type::Grass, 2.0)
            .with(Type::Water, Type::Water, 0.5);
        let chart = TypeChart::build(&base);

        for attack in Type::all() {
            for defend in Type::all() {
                assert_eq!(
                    chart.effectiveness(*attack, &[*defend]).unwrap(),
                    base.get(*attack, *defend)
                );
            }
        }
        // Type against itself stays neutral unless overridden
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Fire]).unwrap(), 1.0);
        assert_eq!(chart.effectiveness(Type::Water, &[Type::Water]).unwrap(), 0.5);
    }

    #[test]
    fn test_dual_is_product_and_order_independent() {
        let chart = TypeChart::standard();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let attack = random_type(&mut rng);
            let t1 = random_type(&mut rng);
            let t2 = random_type(&mut rng);
            if t1 == t2 {
                continue;
            }
            let forward = chart.effectiveness(attack, &[t1, t2]).unwrap();
            let backward = chart.effectiveness(attack, &[t2, t1]).unwrap();
            let product = chart.effectiveness(attack, &[t1]).unwrap()
                * chart.effectiveness(attack, &[t2]).unwrap();
            assert_eq!(forward, backward);
            assert_eq!(forward, product);
        }
    }

    #[test]
    fn test_duplicate_type_collapses() {
        let chart = TypeChart::standard();
        for attack in Type::all() {
            for defend in Type::all() {
                assert_eq!(
                    chart.effectiveness(*attack, &[*defend, *defend]).unwrap(),
                    chart.effectiveness(*attack, &[*defend]).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_fire_against_grass_poison_scenario() {
        let base = BaseChart::new()
            .with(Type::Fire, Type::Grass, 2.0)
            .with(Type::Fire, Type::Poison, 0.5);
        let chart = TypeChart::build(&base);
        assert_eq!(
            chart.effectiveness_by_name("Fire", &["Grass", "Poison"]).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_standard_dual_values() {
        let chart = TypeChart::standard();
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Grass, Type::Steel]).unwrap(), 4.0);
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Water, Type::Rock]).unwrap(), 0.25);
        assert_eq!(
            chart.effectiveness(Type::Electric, &[Type::Water, Type::Flying]).unwrap(),
            4.0
        );
        assert_eq!(
            chart.effectiveness(Type::Ground, &[Type::Flying, Type::Steel]).unwrap(),
            0.0
        );
        // Lookup in German, as the cached chart was written
        assert_eq!(chart.effectiveness_by_name("Elektro", &["Wasser", "Boden"]).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_input() {
        let chart = TypeChart::standard();

        let err = chart.effectiveness(Type::Fire, &[]).unwrap_err();
        assert_eq!(err, ChartError::InvalidCardinality(0));
        assert!(err.is_invalid_input());

        let err = chart
            .effectiveness(Type::Fire, &[Type::Grass, Type::Ice, Type::Bug])
            .unwrap_err();
        assert_eq!(err, ChartError::InvalidCardinality(3));

        let err = chart.effectiveness_by_name("Laser", &["Grass"]).unwrap_err();
        assert_eq!(err, ChartError::UnknownType("Laser".to_string()));
        assert!(err.is_invalid_input());

        let err = chart.effectiveness_by_name("Fire", &["Grass", "Plastic"]).unwrap_err();
        assert_eq!(err, ChartError::UnknownType("Plastic".to_string()));
    }

    #[test]
    fn test_defender_key_canonical() {
        assert_eq!(
            DefenderKey::pair(Type::Poison, Type::Grass),
            DefenderKey::Pair(Type::Grass, Type::Poison)
        );
        assert_eq!(DefenderKey::pair(Type::Ice, Type::Ice), DefenderKey::Single(Type::Ice));
        assert_eq!(
            DefenderKey::Pair(Type::Grass, Type::Poison).to_key_string(),
            "Grass, Poison"
        );
        assert_eq!(DefenderKey::Single(Type::Fire).to_key_string(), "Fire, None");
    }

    #[test]
    fn test_defender_key_parse() {
        assert_eq!(
            DefenderKey::parse("Fire, None").unwrap(),
            DefenderKey::Single(Type::Fire)
        );
        // German keys sorted by German name still canonicalize
        assert_eq!(
            DefenderKey::parse("Boden, Wasser").unwrap(),
            DefenderKey::Pair(Type::Ground, Type::Water)
        );
        assert_eq!(
            DefenderKey::parse("Fire"),
            Err(ChartError::MalformedKey("Fire".to_string()))
        );
    }

    #[test]
    fn test_table_keys_and_roundtrip() {
        let chart = TypeChart::standard();
        let table = chart.to_table();

        assert_eq!(table.len(), 18);
        assert_eq!(table["Fire"]["Grass, Steel"], 4.0);
        assert_eq!(table["Electric"]["Ground, None"], 0.0);
        assert!(!table["Fire"].contains_key("Steel, Grass"));

        let restored = TypeChart::from_table(&table).unwrap();
        assert_eq!(restored, chart);
    }

    #[test]
    fn test_missing_entry_from_sparse_table() {
        let mut table = crate::ChartTable::new();
        table
            .entry("Fire".to_string())
            .or_default()
            .insert("Grass, None".to_string(), 2.0);
        let chart = TypeChart::from_table(&table).unwrap();

        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Grass]).unwrap(), 2.0);
        let err = chart.effectiveness(Type::Fire, &[Type::Water]).unwrap_err();
        assert!(matches!(err, ChartError::MissingEntry { attack: Type::Fire, .. }));
        assert!(!err.is_invalid_input());
        assert!(!chart.has_attacker(Type::Water));
        assert!(!chart.is_complete());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_roundtrip() {
        let chart = TypeChart::standard();
        let json = serde_json::to_string(&chart).unwrap();
        let restored: TypeChart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, chart);

        let bad = r#"{"Fire": {"Grass, Nothing": 2.0}}"#;
        assert!(serde_json::from_str::<TypeChart>(bad).is_err());
    }
}
