use super::*;
use crate::registry::test_registry;
use crate::tables;
use quickcheck_macros::quickcheck;

const ALL: [&EncodedClass; 44] = [
    &tables::C,
    &tables::CO,
    &tables::CN,
    &tables::CC,
    &tables::CF,
    &tables::CS,
    &tables::L,
    &tables::LU,
    &tables::LL,
    &tables::LT,
    &tables::LM,
    &tables::LO,
    &tables::M,
    &tables::MN,
    &tables::ME,
    &tables::MC,
    &tables::N,
    &tables::ND,
    &tables::NL,
    &tables::NO,
    &tables::Z,
    &tables::ZS,
    &tables::ZL,
    &tables::ZP,
    &tables::P,
    &tables::PD,
    &tables::PS,
    &tables::PI,
    &tables::PE,
    &tables::PF,
    &tables::PC,
    &tables::PO,
    &tables::S,
    &tables::SM,
    &tables::SC,
    &tables::SK,
    &tables::SO,
    &tables::WORD,
    &tables::IDENTIFIER,
    &tables::IDENTIFIER_START,
    &tables::IDENTIFIER_PART,
    &tables::HORIZONTAL,
    &tables::VERTICAL,
    &tables::SPACE,
];

fn category(name: &str) -> &'static Category {
    test_registry().lookup(name).unwrap()
}

fn membership(set: &RangeSet) -> Vec<bool> {
    let mut members = vec![false; 0x10000];
    for code in set.iter() {
        members[usize::from(code)] = true;
    }
    members
}

#[test]
fn test_every_table_decodes() {
    for encoded in ALL {
        let category = Category::from_encoded(encoded).unwrap();
        assert!(!category.is_empty(), "{} is empty", encoded.name());
        assert_eq!(category.name(), encoded.name());
    }
}

#[test]
fn test_ranges_sorted_and_disjoint() {
    for encoded in ALL {
        let set = encoded.decode().unwrap();
        for range in set.ranges() {
            assert!(range.lo <= range.hi, "{}: {:?}", encoded.name(), range);
        }
        for pair in set.ranges().windows(2) {
            assert!(pair[0].hi < pair[1].lo, "{}: {:?}", encoded.name(), pair);
        }
    }
}

#[test]
fn test_index_agrees_with_ranges() {
    for encoded in ALL {
        let category = Category::from_encoded(encoded).unwrap();
        let members = membership(category.ranges());
        for code in 0..=u16::MAX {
            assert_eq!(
                category.contains(code),
                members[usize::from(code)],
                "{} at {:#06x}",
                encoded.name(),
                code
            );
        }
        assert_eq!(category.index().count(), category.len(), "{}", encoded.name());
        assert_eq!(category.contents().len(), category.len());
    }
}

#[test]
fn test_scan_agrees_with_index_on_samples() {
    let lu = category("Lu");
    for code in (0..=u16::MAX).step_by(97) {
        assert_eq!(lu.ranges().contains(code), lu.contains(code), "{:#06x}", code);
    }
}

#[test]
fn test_range_counts() {
    let counts = [
        ("C", 362),
        ("Lu", 594),
        ("Ll", 604),
        ("Cc", 2),
        ("Zl", 1),
        ("Zp", 1),
        ("Zh", 8),
        ("Zv", 3),
        ("G", 10),
        ("J", 467),
    ];
    for (name, ranges) in counts {
        assert_eq!(category(name).ranges().ranges().len(), ranges, "{}", name);
    }
    assert_eq!(test_registry().word().ranges().ranges().len(), 449);
}

#[test]
fn test_top_level_partition() {
    let top: Vec<_> = ["C", "L", "M", "N", "Z", "P", "S"]
        .iter()
        .map(|name| category(name))
        .collect();
    for code in 0..=u16::MAX {
        let owners = top.iter().filter(|c| c.contains(code)).count();
        assert_eq!(owners, 1, "{:#06x} is in {} top-level groups", code, owners);
    }
    let total: usize = top.iter().map(|c| c.len()).sum();
    assert_eq!(total, 0x10000);
}

#[test]
fn test_subcategories_cover_group() {
    // C is left out: U+08E2 is in C but in none of its subcategories.
    let groups: [(&str, &[&str]); 6] = [
        ("L", &["Lu", "Ll", "Lt", "Lm", "Lo"]),
        ("M", &["Mn", "Me", "Mc"]),
        ("N", &["Nd", "Nl", "No"]),
        ("Z", &["Zs", "Zl", "Zp"]),
        ("P", &["Pd", "Ps", "Pi", "Pe", "Pf", "Pc", "Po"]),
        ("S", &["Sm", "Sc", "Sk", "So"]),
    ];
    for (group, subs) in groups {
        let group = category(group);
        let subs: Vec<_> = subs.iter().map(|name| category(name)).collect();
        for code in 0..=u16::MAX {
            let in_sub = subs.iter().any(|c| c.contains(code));
            assert_eq!(group.contains(code), in_sub, "{} at {:#06x}", group.name(), code);
        }
    }
}

#[test]
fn test_control_subcategories() {
    let c = category("C");
    for name in ["Cc", "Cf", "Co", "Cn", "Cs"] {
        let sub = category(name);
        for code in sub.ranges().iter() {
            assert!(c.contains(code), "{} at {:#06x}", name, code);
        }
    }
    assert!(c.contains(0x08E2));
    for name in ["Cc", "Cf", "Co", "Cn", "Cs"] {
        assert!(!category(name).contains(0x08E2), "{}", name);
    }
    assert!(category("Cn").contains(0xFFFF));
    assert!(category("Cs").contains(0xD800));
    assert!(category("Co").contains(0xE000));
}

#[test]
fn test_whitespace_split() {
    let zh = category("Zh");
    let zv = category("Zv");
    let g = category("G");
    for code in 0..=u16::MAX {
        assert!(!(zh.contains(code) && zv.contains(code)), "{:#06x}", code);
        assert_eq!(g.contains(code), zh.contains(code) || zv.contains(code));
    }
    assert_eq!(
        zh.contents(),
        [
            9, 32, 160, 5760, 8192, 8193, 8194, 8195, 8196, 8197, 8198, 8199, 8200, 8201, 8202,
            8239, 8287, 12288
        ]
    );
    assert_eq!(zv.contents(), [10, 11, 12, 13, 133, 8232, 8233]);
}

#[test]
fn test_identifier_classes() {
    let registry = test_registry();
    let start = registry.identifier_start();
    let part = registry.identifier_part();
    for code in start.ranges().iter() {
        assert!(part.contains(code), "{:#06x}", code);
    }
    for code in registry.word().ranges().iter() {
        assert!(registry.identifier().contains(code), "{:#06x}", code);
    }
    assert!(start.contains_char('$'));
    assert!(start.contains_char('_'));
    assert!(!start.contains_char('0'));
    assert!(part.contains_char('0'));
}

#[test]
fn test_set_equality() {
    let registry = test_registry();
    assert_eq!(**registry.identifier(), **registry.identifier_part());
    assert_ne!(
        registry.identifier().name(),
        registry.identifier_part().name()
    );
    assert_ne!(*category("Lu"), *category("Ll"));
    assert_eq!(*category("Zh"), *category("Gh"));
}

#[test]
fn test_digits() {
    let nd = category("Nd");
    for c in '0'..='9' {
        assert!(nd.contains_char(c));
    }
    assert!(nd.contains_char('٣'));
    assert!(!nd.contains_char('x'));
    assert!(!nd.contains_char('\u{1D7CE}'));
    assert!(category("No").contains_char('²'));
    assert!(category("Nl").contains_char('Ⅻ'));
}

#[test]
fn test_display() {
    let cc = Category::from_encoded(&tables::CC).unwrap();
    assert_eq!(cc.to_string(), "Cc[0000-001F, 007F-009F]");
    assert_eq!(category("Zl").to_string(), "Zl[2028]");
}

#[quickcheck]
fn index_agrees_with_scan(points: Vec<u16>, probes: Vec<u16>) -> bool {
    let mut points = points;
    points.sort_unstable();
    points.dedup();
    // Pair up distinct sorted points; drop a trailing odd one.
    let ranges = points
        .chunks_exact(2)
        .map(|pair| CodePointRange::new(pair[0], pair[1]))
        .collect();
    let set = RangeSet::from_ranges("arbitrary", ranges).unwrap();
    let category = Category::from_ranges("arbitrary", set);
    category.index().count() == category.len()
        && probes
            .iter()
            .chain(points.iter())
            .all(|&code| category.contains(code) == category.ranges().contains(code))
}
