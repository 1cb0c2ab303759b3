//! Property tests over arbitrary selections.

use obabaz_core::{
    generate_with_seed, Catalogs, Choice, NarrativeStage, SelectionState, StapleTemperature,
};
use proptest::prelude::*;

fn choice() -> impl Strategy<Value = Choice> {
    let catalog_values = prop::sample::select(vec![
        "", "鶏もも肉", "白身魚", "卵", "豆腐", "キャベツ", "ごはん", "無し（おかずのみ）",
        "炒める", "蒸す", "味噌", "塩",
    ]);
    prop_oneof![
        catalog_values.prop_map(Choice::from),
        "[ぁ-んァ-ン一-龥a-z]{0,6}".prop_map(Choice::Custom),
    ]
}

fn selection() -> impl Strategy<Value = SelectionState> {
    let arrangement_ids = prop::sample::select(vec!["garnish", "topping", "oil", "spice", "bogus"]);
    (
        choice(),
        prop::collection::vec(choice(), 0..=3),
        choice(),
        any::<bool>(),
        (choice(), choice(), choice()),
        prop::collection::btree_map(arrangement_ids.prop_map(String::from), choice(), 0..4),
    )
        .prop_map(
            |(main, vegetables, staple, cold, (method, umami, salt), arrangements)| SelectionState {
                main,
                vegetables,
                staple,
                staple_temperature: if cold {
                    StapleTemperature::Cold
                } else {
                    StapleTemperature::Hot
                },
                method,
                umami,
                salt,
                arrangements,
            },
        )
}

proptest! {
    #[test]
    fn steps_are_five_and_non_empty(selection in selection(), seed in any::<u64>()) {
        let doc = generate_with_seed(&selection, Catalogs::embedded(), seed).unwrap();
        prop_assert_eq!(doc.steps.len(), NarrativeStage::ALL.len());
        for step in &doc.steps {
            prop_assert!(!step.is_empty());
        }
        prop_assert!(Catalogs::embedded().tips.contains(&doc.tip));
    }

    #[test]
    fn same_seed_gives_identical_document(selection in selection(), seed in any::<u64>()) {
        let a = generate_with_seed(&selection, Catalogs::embedded(), seed).unwrap();
        let b = generate_with_seed(&selection, Catalogs::embedded(), seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prompt_keeps_its_sections(selection in selection()) {
        let doc = generate_with_seed(&selection, Catalogs::embedded(), 0).unwrap();
        for header in ["【材料】", "【調理方針】", "【要望】"] {
            prop_assert!(doc.prompt.contains(header));
        }
    }
}
