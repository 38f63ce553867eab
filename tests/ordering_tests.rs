use std::collections::BTreeSet;

use menu_render::menu::{CategoryOrderer, PreferredOrder};

fn orderer() -> CategoryOrderer {
    CategoryOrderer::new(PreferredOrder::default())
}

#[test]
fn preferred_categories_follow_table_positions() {
    let ordered = orderer().order([
        "Refrigerantes e Energéticos",
        "Tapiocas",
        "Lanches e Salgados",
    ]);
    assert_eq!(
        ordered,
        ["Lanches e Salgados", "Tapiocas", "Refrigerantes e Energéticos"]
    );
}

#[test]
fn all_preferred_precede_all_others() {
    let names = ["Zebra", "Tapiocas", "Açaí", "Cafés e Bebidas Quentes", "bolos"];
    let ordered = orderer().order(names);
    let preferred = PreferredOrder::default();
    let last_preferred = ordered
        .iter()
        .rposition(|name| preferred.rank(name).is_some())
        .unwrap();
    let first_other = ordered
        .iter()
        .position(|name| preferred.rank(name).is_none())
        .unwrap();
    assert!(last_preferred < first_other);
}

#[test]
fn non_preferred_tail_is_plain_lexicographic_sort() {
    let others = ["bebidas", "Zebra", "Açaí", "Bebidas", "água"];
    let ordered = orderer().order(others);
    let mut expected: Vec<String> = others.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(ordered, expected);
}

#[test]
fn ordering_is_deterministic_regardless_of_input_order() {
    let set: BTreeSet<&str> = ["Bebidas", "Tapiocas", "Outros", "Lanches e Salgados"]
        .into_iter()
        .collect();
    let first = orderer().order(set.iter().copied());
    let second = orderer().order(set.iter().rev().copied());
    assert_eq!(first, second);
    assert_eq!(first, orderer().order(set.iter().copied()));
}

#[test]
fn empty_input_yields_empty_order() {
    assert!(orderer().order(std::iter::empty::<&str>()).is_empty());
}
