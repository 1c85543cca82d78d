//! Name → category tables.
//!
//! A `Registry` decodes and indexes every class once and is immutable
//! afterwards. Build it at startup and share it by reference or `Arc` with
//! every pattern compiler and matcher; no locking is involved.

use std::sync::Arc;

use log::info;
use rustc_hash::FxHashMap;

use crate::category::{Category, EncodedClass};
use crate::{tables, Result};

/// The seven Unicode top-level groups, in registration order.
const TOP_LEVEL: [&EncodedClass; 7] = [
    &tables::C,
    &tables::L,
    &tables::M,
    &tables::N,
    &tables::Z,
    &tables::P,
    &tables::S,
];

/// Unicode general categories, registered under their table names.
const GENERAL: [&EncodedClass; 30] = [
    &tables::CC,
    &tables::CF,
    &tables::CO,
    &tables::CN,
    &tables::CS,
    &tables::LU,
    &tables::LL,
    &tables::LT,
    &tables::LM,
    &tables::LO,
    &tables::MN,
    &tables::ME,
    &tables::MC,
    &tables::ND,
    &tables::NL,
    &tables::NO,
    &tables::ZS,
    &tables::ZL,
    &tables::ZP,
    &tables::PD,
    &tables::PS,
    &tables::PI,
    &tables::PE,
    &tables::PF,
    &tables::PC,
    &tables::PO,
    &tables::SM,
    &tables::SC,
    &tables::SK,
    &tables::SO,
];

/// Insertion-ordered name table.
#[derive(Debug, Clone, Default)]
struct NameTable {
    entries: Vec<(&'static str, Arc<Category>)>,
    index: FxHashMap<&'static str, usize>,
}

impl NameTable {
    fn insert(&mut self, name: &'static str, category: Arc<Category>) {
        self.index.insert(name, self.entries.len());
        self.entries.push((name, category));
    }

    fn get(&self, name: &str) -> Option<&Arc<Category>> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }
}

fn build(encoded: &EncodedClass) -> Result<Arc<Category>> {
    Category::from_encoded(encoded).map(Arc::new)
}

/// Every named class, decoded and indexed.
///
/// `categories` maps each short tag to its class:
///
/// | tag            | class |
/// |----------------|-------|
/// | `C` `L` `M` `N` `Z` `P` `S` | Unicode top-level groups |
/// | `Cc` … `So`    | Unicode general categories |
/// | `J`            | identifier characters |
/// | `Js` / `Jp`    | identifier start / identifier part |
/// | `G`            | all whitespace (`Zh` ∪ `Zv`) |
/// | `Zh` / `Gh`    | horizontal whitespace, tab included |
/// | `Zv` / `Gv`    | vertical whitespace, newline and CR included |
///
/// `super_categories` holds only the top-level groups plus `J` and `G`.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: NameTable,
    super_categories: NameTable,
    word: Arc<Category>,
    identifier: Arc<Category>,
    identifier_start: Arc<Category>,
    identifier_part: Arc<Category>,
    horizontal: Arc<Category>,
    vertical: Arc<Category>,
    space: Arc<Category>,
}

impl Registry {
    /// Decode and index every table.
    ///
    /// An error means the compiled-in tables are corrupt; there is no partial
    /// registry to fall back to.
    pub fn new() -> Result<Self> {
        let word = build(&tables::WORD)?;
        let identifier = build(&tables::IDENTIFIER)?;
        let identifier_start = build(&tables::IDENTIFIER_START)?;
        let identifier_part = build(&tables::IDENTIFIER_PART)?;
        let horizontal = build(&tables::HORIZONTAL)?;
        let vertical = build(&tables::VERTICAL)?;
        let space = build(&tables::SPACE)?;

        let mut categories = NameTable::default();
        let mut super_categories = NameTable::default();

        for encoded in TOP_LEVEL {
            let category = build(encoded)?;
            categories.insert(encoded.name(), category.clone());
            super_categories.insert(encoded.name(), category);
        }
        for (tag, category) in [("J", &identifier), ("G", &space)] {
            categories.insert(tag, category.clone());
            super_categories.insert(tag, category.clone());
        }
        for encoded in GENERAL {
            categories.insert(encoded.name(), build(encoded)?);
        }
        for (tag, category) in [
            ("Zh", &horizontal),
            ("Zv", &vertical),
            ("Gh", &horizontal),
            ("Gv", &vertical),
            ("Js", &identifier_start),
            ("Jp", &identifier_part),
        ] {
            categories.insert(tag, category.clone());
        }

        info!(
            "category registry built: {} tags, {} super tags",
            categories.entries.len(),
            super_categories.entries.len()
        );

        Ok(Self {
            categories,
            super_categories,
            word,
            identifier,
            identifier_start,
            identifier_part,
            horizontal,
            vertical,
            space,
        })
    }

    /// Class registered under `name`, e.g. `"Lu"` or `"Zh"`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Arc<Category>> {
        self.categories.get(name)
    }

    /// Top-level class registered under `name` (`C L M N Z P S J G`).
    #[inline]
    pub fn lookup_super(&self, name: &str) -> Option<&Arc<Category>> {
        self.super_categories.get(name)
    }

    /// Resolve a property written as an initial plus an optional detail
    /// letter, the way `\p{L}` and `\p{Lu}` split.
    pub fn lookup_property(&self, initial: char, detail: Option<char>) -> Option<&Arc<Category>> {
        let mut buf = [0u8; 8];
        let mut len = initial.encode_utf8(&mut buf).len();
        if let Some(detail) = detail {
            len += detail.encode_utf8(&mut buf[len..]).len();
        }
        let name = std::str::from_utf8(&buf[..len]).ok()?;
        self.lookup(name)
    }

    /// The Unicode top-level group (`C L M N Z P S`) containing `code`.
    ///
    /// The groups partition the BMP, so this is `Some` for every `u16`.
    pub fn super_category_of(&self, code: u16) -> Option<&'static str> {
        self.super_categories
            .entries
            .iter()
            .take(TOP_LEVEL.len())
            .find(|(_, category)| category.contains(code))
            .map(|&(name, _)| name)
    }

    /// All tags with their classes, in registration order.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &Arc<Category>)> + '_ {
        self.categories.entries.iter().map(|(name, c)| (*name, c))
    }

    /// Top-level tags with their classes, in registration order.
    pub fn super_categories(&self) -> impl Iterator<Item = (&'static str, &Arc<Category>)> + '_ {
        self.super_categories.entries.iter().map(|(name, c)| (*name, c))
    }

    /// Letters, numbers and `_`. Not registered under a tag.
    pub fn word(&self) -> &Arc<Category> {
        &self.word
    }

    pub fn identifier(&self) -> &Arc<Category> {
        &self.identifier
    }

    pub fn identifier_start(&self) -> &Arc<Category> {
        &self.identifier_start
    }

    pub fn identifier_part(&self) -> &Arc<Category> {
        &self.identifier_part
    }

    pub fn horizontal(&self) -> &Arc<Category> {
        &self.horizontal
    }

    pub fn vertical(&self) -> &Arc<Category> {
        &self.vertical
    }

    pub fn space(&self) -> &Arc<Category> {
        &self.space
    }
}

/// One registry for the whole test binary; building it decodes every table.
#[cfg(test)]
pub(crate) fn test_registry() -> &'static Registry {
    use std::sync::OnceLock;

    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Registry::new().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [&str; 45] = [
        "C", "L", "M", "N", "Z", "P", "S", "J", "G", "Cc", "Cf", "Co", "Cn", "Cs", "Lu", "Ll",
        "Lt", "Lm", "Lo", "Mn", "Me", "Mc", "Nd", "Nl", "No", "Zs", "Zl", "Zp", "Pd", "Ps", "Pi",
        "Pe", "Pf", "Pc", "Po", "Sm", "Sc", "Sk", "So", "Zh", "Zv", "Gh", "Gv", "Js", "Jp",
    ];

    #[test]
    fn test_registration_order() {
        let registry = test_registry();
        let names: Vec<_> = registry.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ORDER);

        let supers: Vec<_> = registry.super_categories().map(|(name, _)| name).collect();
        assert_eq!(supers, ["C", "L", "M", "N", "Z", "P", "S", "J", "G"]);
    }

    #[test]
    fn test_lookup() {
        let registry = test_registry();
        let nd = registry.lookup("Nd").unwrap();
        assert!(nd.contains_char('7'));
        assert!(!nd.contains_char('x'));

        let lu = registry.lookup("Lu").unwrap();
        assert!(lu.contains_char('A'));
        assert!(!lu.contains_char('a'));

        assert!(registry.lookup("Xx").is_none());
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("lu").is_none());
        // Word is reachable only through its accessor.
        assert!(registry.lookup("w").is_none());
    }

    #[test]
    fn test_lookup_super() {
        let registry = test_registry();
        assert!(registry.lookup_super("L").is_some());
        assert!(registry.lookup_super("J").is_some());
        assert!(registry.lookup_super("G").is_some());
        assert!(registry.lookup_super("Lu").is_none());
        assert!(registry.lookup_super("Zh").is_none());
        assert!(Arc::ptr_eq(
            registry.lookup_super("N").unwrap(),
            registry.lookup("N").unwrap()
        ));
    }

    #[test]
    fn test_aliases_share_instances() {
        let registry = test_registry();
        let zh = registry.lookup("Zh").unwrap();
        assert!(Arc::ptr_eq(zh, registry.lookup("Gh").unwrap()));
        assert!(Arc::ptr_eq(zh, registry.horizontal()));
        assert!(Arc::ptr_eq(
            registry.lookup("Zv").unwrap(),
            registry.lookup("Gv").unwrap()
        ));
        assert!(Arc::ptr_eq(registry.lookup("J").unwrap(), registry.identifier()));
        assert!(Arc::ptr_eq(registry.lookup("G").unwrap(), registry.space()));
    }

    #[test]
    fn test_identifier_part_equals_identifier() {
        // Different tables, same code points.
        let registry = test_registry();
        assert!(!Arc::ptr_eq(registry.identifier(), registry.identifier_part()));
        assert_eq!(**registry.identifier(), **registry.identifier_part());
        assert_ne!(**registry.identifier(), **registry.identifier_start());
    }

    #[test]
    fn test_lookup_property() {
        let registry = test_registry();
        assert!(Arc::ptr_eq(
            registry.lookup_property('L', None).unwrap(),
            registry.lookup("L").unwrap()
        ));
        assert!(Arc::ptr_eq(
            registry.lookup_property('L', Some('u')).unwrap(),
            registry.lookup("Lu").unwrap()
        ));
        assert!(Arc::ptr_eq(
            registry.lookup_property('J', Some('s')).unwrap(),
            registry.identifier_start()
        ));
        assert!(registry.lookup_property('X', None).is_none());
        assert!(registry.lookup_property('L', Some('x')).is_none());
        assert!(registry.lookup_property('\u{10400}', Some('\u{10400}')).is_none());
    }

    #[test]
    fn test_super_category_of() {
        let registry = test_registry();
        assert_eq!(registry.super_category_of(u16::from(b'a')), Some("L"));
        assert_eq!(registry.super_category_of(u16::from(b'7')), Some("N"));
        assert_eq!(registry.super_category_of(u16::from(b' ')), Some("Z"));
        assert_eq!(registry.super_category_of(u16::from(b'!')), Some("P"));
        assert_eq!(registry.super_category_of(u16::from(b'+')), Some("S"));
        assert_eq!(registry.super_category_of(0x0301), Some("M"));
        assert_eq!(registry.super_category_of(0x0000), Some("C"));
        assert_eq!(registry.super_category_of(0xD800), Some("C"));
        assert_eq!(registry.super_category_of(0xFFFF), Some("C"));
    }

    #[test]
    fn test_whitespace_classes() {
        let registry = test_registry();
        let zh = registry.horizontal();
        let zv = registry.vertical();
        let z = registry.lookup("Z").unwrap();

        assert!(zh.contains_char('\t'));
        assert!(zh.contains_char(' '));
        assert!(!zh.contains_char('\n'));
        assert!(zv.contains_char('\n'));
        assert!(zv.contains_char('\r'));
        assert!(zv.contains_char('\u{2028}'));
        assert!(!zv.contains_char(' '));
        assert!(!z.contains_char('\t'));
        assert!(!z.contains_char('\n'));
        assert!(z.contains_char('\u{3000}'));
    }

    #[test]
    fn test_engine_classes() {
        let registry = test_registry();
        let word = registry.word();
        assert!(word.contains_char('_'));
        assert!(word.contains_char('é'));
        assert!(word.contains_char('٣'));
        assert!(!word.contains_char('-'));

        assert!(registry.identifier_start().contains_char('$'));
        assert!(registry.identifier_start().contains_char('_'));
        assert!(!registry.identifier_start().contains_char('1'));
        assert!(registry.identifier_part().contains_char('1'));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<Arc<Category>>();

        let registry = Arc::new(Registry::new().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let nd = registry.lookup("Nd").unwrap();
                    (0..=u16::MAX).filter(|&c| nd.contains(c)).count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), registry.lookup("Nd").unwrap().len());
        }
    }
}
