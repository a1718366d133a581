//! Black-box tests over the public inventory API.

use gildedrose_inventory::{
    GildedRose, Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, RULE_TABLE, Rule, rule_for,
};
use proptest::prelude::*;

const LEGENDARY: &str = "Sulfuras, Hand of Ragnaros";
const BACKSTAGE: &str = "Backstage passes to a TAFKAL80ETC concert";

fn item_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Aged Brie".to_string()),
        Just(BACKSTAGE.to_string()),
        Just("Normal Item".to_string()),
        "[A-Za-z][A-Za-z ]{0,30}",
    ]
}

fn bounded_item() -> impl Strategy<Value = Item> {
    (item_name(), -20i32..60, MIN_QUALITY..=MAX_QUALITY)
        .prop_map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
}

#[test]
fn backstage_pass_over_a_full_run() {
    let mut items = vec![Item::new(BACKSTAGE, 12, 10)];
    let mut gr = GildedRose::new(&mut items);

    let mut seen = Vec::new();
    for _ in 0..14 {
        gr.update_quality();
        seen.push(gr.items()[0].quality());
    }

    // +1 until sell_in drops below 10, +2 until below 5, +3 until the concert, then 0.
    assert_eq!(seen, vec![11, 12, 14, 16, 18, 20, 22, 25, 28, 31, 34, 37, 0, 0]);
    assert_eq!(items[0].sell_in(), -2);
}

#[test]
fn starter_inventory_snapshot_after_one_day() {
    let mut items = vec![
        Item::new("Aged Brie", 2, 0),
        Item::new(BACKSTAGE, 15, 20),
        Item::new("Normal Item", 10, 20),
        Item::new(LEGENDARY, 0, LEGENDARY_QUALITY),
    ];
    let mut gr = GildedRose::new(&mut items);
    gr.update_quality();

    assert_eq!(
        gr.render(),
        "Updated Items:\n\
         \x20 - Aged Brie, 1, 1\n\
         \x20 - Backstage passes to a TAFKAL80ETC concert, 14, 21\n\
         \x20 - Normal Item, 9, 19\n\
         \x20 - Sulfuras, Hand of Ragnaros, 0, 80\n"
    );
}

#[test]
fn every_table_entry_has_a_dedicated_rule() {
    for (name, rule) in RULE_TABLE {
        assert_ne!(*rule, Rule::Normal, "{name}");
        assert_eq!(rule_for(name), *rule);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: Quality of a non-legendary item never leaves [0, 50].
    #[test]
    fn quality_stays_in_bounds(
        items in prop::collection::vec(bounded_item(), 1..8),
        days in 0usize..80
    ) {
        let mut items = items;
        let mut gr = GildedRose::new(&mut items);
        for _ in 0..days {
            gr.update_quality();
            for item in gr.items() {
                prop_assert!(
                    (MIN_QUALITY..=MAX_QUALITY).contains(&item.quality()),
                    "out of bounds: {item}"
                );
            }
        }
    }

    /// Property: Legendary items never change.
    #[test]
    fn legendary_is_immutable(sell_in in any::<i32>(), days in 1usize..200) {
        let mut items = vec![Item::new(LEGENDARY, sell_in, LEGENDARY_QUALITY)];
        let mut gr = GildedRose::new(&mut items);
        for _ in 0..days {
            gr.update_quality();
        }
        prop_assert_eq!(&items[0], &Item::new(LEGENDARY, sell_in, LEGENDARY_QUALITY));
    }

    /// Property: n manager updates match n single-day rule applications, day by day.
    #[test]
    fn updates_match_day_by_day_rule_application(
        items in prop::collection::vec(bounded_item(), 0..8),
        days in 0usize..40
    ) {
        let mut managed = items.clone();
        let mut expected = items;
        let mut gr = GildedRose::new(&mut managed);

        for _ in 0..days {
            gr.update_quality();
            for item in expected.iter_mut() {
                rule_for(item.name()).apply(item);
            }
            prop_assert_eq!(gr.items(), expected.as_slice());
        }
    }

    /// Property: Non-legendary items lose exactly one day of sell_in per update.
    #[test]
    fn sell_in_counts_down_once_per_day(item in bounded_item(), days in 0usize..50) {
        let start = item.sell_in();
        let mut items = vec![item];
        let mut gr = GildedRose::new(&mut items);
        for _ in 0..days {
            gr.update_quality();
        }
        prop_assert_eq!(items[0].sell_in(), start - days as i32);
    }
}
