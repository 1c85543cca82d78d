//! Smoke test for regcat

use std::sync::Arc;

use regcat::{PredicateCache, Registry};

fn main() {
    println!("Running regcat smoke tests...\n");

    let registry = Registry::new().unwrap();

    test_lookup(&registry);
    test_super_categories(&registry);
    test_whitespace(&registry);
    test_identifiers(&registry);
    test_case_folding();
    test_brackets();
    test_predicates(&registry);

    println!("\n✅ All smoke tests passed!");
}

fn test_lookup(registry: &Registry) {
    let nd = registry.lookup("Nd").unwrap();
    assert!(nd.contains_char('7'));
    assert!(!nd.contains_char('x'));

    let lu = registry.lookup_property('L', Some('u')).unwrap();
    assert!(lu.contains_char('Q'));
    assert!(!lu.contains_char('q'));

    assert!(registry.lookup("Qq").is_none());
    println!("✓ Lookup ({} tags)", registry.categories().count());
}

fn test_super_categories(registry: &Registry) {
    for (c, expected) in [('a', "L"), ('5', "N"), (' ', "Z"), ('?', "P"), ('€', "S")] {
        let code = u16::try_from(u32::from(c)).unwrap();
        assert_eq!(registry.super_category_of(code), Some(expected));
    }
    println!("✓ Super categories");
}

fn test_whitespace(registry: &Registry) {
    assert!(registry.horizontal().contains_char('\t'));
    assert!(registry.vertical().contains_char('\n'));
    assert!(registry.space().contains_char('\u{2029}'));
    assert!(Arc::ptr_eq(
        registry.lookup("Zh").unwrap(),
        registry.lookup("Gh").unwrap()
    ));
    println!("✓ Whitespace");
}

fn test_identifiers(registry: &Registry) {
    assert!(registry.identifier_start().contains_char('$'));
    assert!(!registry.identifier_start().contains_char('9'));
    assert!(registry.identifier_part().contains_char('9'));
    assert!(registry.word().contains_char('_'));
    println!("✓ Identifiers");
}

fn test_case_folding() {
    assert_eq!(regcat::case_fold('Ÿ'), 'ÿ');
    assert_eq!(regcat::case_up('s'), 'S');
    assert_eq!(regcat::case_fold('ß'), 'ß');
    assert!(regcat::fold_eq('\u{212A}', 'k'));
    println!("✓ Case folding");
}

fn test_brackets() {
    assert_eq!(regcat::match_bracket('<'), '>');
    assert_eq!(regcat::reverse_with_brackets("f(x)"), "(x)f");
    assert!(regcat::reverse_equal(Some("abc"), Some("cba")));
    assert!(regcat::reverse_bracket_equal(Some("a)"), Some("(a")));
    println!("✓ Brackets");
}

fn test_predicates(registry: &Registry) {
    let cache = PredicateCache::new();
    let letters = cache.class(registry.lookup("L").unwrap());
    let upper = cache.class(registry.lookup("Lu").unwrap());
    let not_upper = cache.intersection(&[letters, cache.not(&upper)]);

    assert!(not_upper.matches_char('a'));
    assert!(!not_upper.matches_char('A'));
    assert!(Arc::ptr_eq(
        &cache.class(registry.lookup("Gv").unwrap()),
        &cache.class(registry.vertical())
    ));
    println!("✓ Predicates ({} nodes)", cache.len());
}
