use super::*;

#[test]
fn sanitize_strips_punctuation_and_joins_with_hyphens() {
    assert_eq!(sanitize("Spider-Man: Far From Home!"), "Spider-Man-Far-From-Home");
    assert_eq!(sanitize("Batman v1"), "Batman-v1");
    assert_eq!(sanitize("  Sword   &  Sorcery  "), "Sword-&-Sorcery");
}

#[test]
fn sanitize_collapses_repeated_hyphens() {
    assert_eq!(sanitize("X-Men -- Red"), "X-Men-Red");
    assert_eq!(sanitize("???"), "");
}

#[test]
fn natural_cmp_orders_numbers_by_value() {
    assert_eq!(natural_cmp("Issue 2", "Issue 10"), Ordering::Less);
    assert_eq!(natural_cmp("10", "9"), Ordering::Greater);
    assert_eq!(natural_cmp("007", "7"), Ordering::Less);
}

#[test]
fn natural_cmp_ignores_case_for_text() {
    assert_eq!(natural_cmp("alpha", "Beta"), Ordering::Less);
    assert_eq!(natural_cmp("Zeta", "alpha"), Ordering::Greater);
}

#[test]
fn natural_cmp_is_total_for_case_variants() {
    assert_ne!(natural_cmp("Gotham", "gotham"), Ordering::Equal);
    assert_eq!(natural_cmp("Gotham", "Gotham"), Ordering::Equal);
}

#[test]
fn split_list_dedups_and_sorts() {
    assert_eq!(
        split_list("Gotham, Metropolis, gotham"),
        vec!["Gotham".to_string(), "Metropolis".to_string()]
    );
}

#[test]
fn split_list_drops_empty_entries() {
    assert_eq!(split_list(" , ,"), Vec::<String>::new());
    assert_eq!(split_list("Robin,,Batman"), vec!["Batman", "Robin"]);
}

#[test]
fn sorted_unique_uses_natural_order() {
    let values = sorted_unique(["Arc 10", "Arc 2", "Arc 1"]);
    assert_eq!(values, vec!["Arc 1", "Arc 2", "Arc 10"]);
}
