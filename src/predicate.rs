//! Compound class expressions with hash-consing.
//!
//! A pattern compiler builds `[\p{L}&&[^\p{Lu}]]` and friends out of
//! [`Predicate`] nodes. [`PredicateCache`] hands out one shared node per
//! distinct expression, so repeated sub-expressions across patterns cost one
//! allocation and compare by pointer.
//!
//! Classes are keyed by their member set: `Zh` and `Gh`, or `J` and `Jp`,
//! become the same node even though they come from different tables.

use std::sync::Arc;

use log::trace;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::category::Category;

/// Operand list of a union or intersection.
pub type Operands = SmallVec<[Arc<Predicate>; 4]>;

/// A class expression over BMP code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    Class(Arc<Category>),
    Not(Arc<Predicate>),
    /// Matches if any operand matches; empty matches nothing.
    Union(Operands),
    /// Matches if every operand matches; empty matches everything.
    Intersection(Operands),
}

impl Predicate {
    pub fn matches(&self, code: u16) -> bool {
        match self {
            Predicate::Class(category) => category.contains(code),
            Predicate::Not(inner) => !inner.matches(code),
            Predicate::Union(operands) => operands.iter().any(|p| p.matches(code)),
            Predicate::Intersection(operands) => operands.iter().all(|p| p.matches(code)),
        }
    }

    /// Anything above `U+FFFF` is only matched through a `Not`.
    pub fn matches_char(&self, c: char) -> bool {
        match u16::try_from(u32::from(c)) {
            Ok(code) => self.matches(code),
            Err(_) => self.matches_outside_bmp(),
        }
    }

    fn matches_outside_bmp(&self) -> bool {
        match self {
            Predicate::Class(_) => false,
            Predicate::Not(inner) => !inner.matches_outside_bmp(),
            Predicate::Union(operands) => operands.iter().any(|p| p.matches_outside_bmp()),
            Predicate::Intersection(operands) => operands.iter().all(|p| p.matches_outside_bmp()),
        }
    }
}

/// Structural key of an interned node. Children are already interned, so
/// their addresses identify them.
#[derive(Debug, PartialEq, Eq, Hash)]
enum Key {
    Class(Arc<Category>),
    Not(usize),
    Union(SmallVec<[usize; 4]>),
    Intersection(SmallVec<[usize; 4]>),
}

fn addr(node: &Arc<Predicate>) -> usize {
    Arc::as_ptr(node) as usize
}

#[derive(Debug, Default)]
struct Interner {
    nodes: FxHashMap<Key, Arc<Predicate>>,
}

impl Interner {
    fn get_or_insert(&mut self, key: Key, build: impl FnOnce() -> Predicate) -> Arc<Predicate> {
        if let Some(node) = self.nodes.get(&key) {
            return node.clone();
        }
        let node = Arc::new(build());
        trace!("interned predicate node {}: {:?}", self.nodes.len(), key);
        self.nodes.insert(key, node.clone());
        node
    }

    fn class(&mut self, category: &Arc<Category>) -> Arc<Predicate> {
        let category = category.clone();
        self.get_or_insert(Key::Class(category.clone()), || Predicate::Class(category))
    }

    fn not(&mut self, inner: Arc<Predicate>) -> Arc<Predicate> {
        if let Predicate::Not(twice) = &*inner {
            return twice.clone();
        }
        self.get_or_insert(Key::Not(addr(&inner)), || Predicate::Not(inner))
    }

    fn combine(
        &mut self,
        mut operands: Operands,
        key: fn(SmallVec<[usize; 4]>) -> Key,
        node: fn(Operands) -> Predicate,
    ) -> Arc<Predicate> {
        operands.sort_by_key(addr);
        operands.dedup_by(|a, b| Arc::ptr_eq(a, b));
        if operands.len() == 1 {
            return operands.remove(0);
        }
        let addrs = operands.iter().map(addr).collect();
        self.get_or_insert(key(addrs), || node(operands))
    }

    /// Intern `predicate` bottom-up.
    fn canonical(&mut self, predicate: &Predicate) -> Arc<Predicate> {
        match predicate {
            Predicate::Class(category) => self.class(category),
            Predicate::Not(inner) => {
                let inner = self.canonical(inner);
                self.not(inner)
            }
            Predicate::Union(operands) => {
                let operands = operands.iter().map(|p| self.canonical(p)).collect();
                self.combine(operands, Key::Union, Predicate::Union)
            }
            Predicate::Intersection(operands) => {
                let operands = operands.iter().map(|p| self.canonical(p)).collect();
                self.combine(operands, Key::Intersection, Predicate::Intersection)
            }
        }
    }
}

/// Hash-consing table for [`Predicate`] nodes.
///
/// Only pattern compilation touches the cache; the nodes it returns are
/// immutable and matched without locking. Nodes live as long as the cache.
///
/// Every node the cache returns is canonical: structurally equal expressions
/// (after dropping double negation, ordering and deduplicating operands, and
/// collapsing single-operand unions and intersections) are the same `Arc`.
#[derive(Debug, Default)]
pub struct PredicateCache {
    interner: Mutex<Interner>,
}

impl PredicateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&self, category: &Arc<Category>) -> Arc<Predicate> {
        self.interner.lock().class(category)
    }

    pub fn not(&self, inner: &Predicate) -> Arc<Predicate> {
        let mut interner = self.interner.lock();
        let inner = interner.canonical(inner);
        interner.not(inner)
    }

    pub fn union(&self, operands: &[Arc<Predicate>]) -> Arc<Predicate> {
        let mut interner = self.interner.lock();
        let operands = operands.iter().map(|p| interner.canonical(p)).collect();
        interner.combine(operands, Key::Union, Predicate::Union)
    }

    pub fn intersection(&self, operands: &[Arc<Predicate>]) -> Arc<Predicate> {
        let mut interner = self.interner.lock();
        let operands = operands.iter().map(|p| interner.canonical(p)).collect();
        interner.combine(operands, Key::Intersection, Predicate::Intersection)
    }

    /// The canonical node for an expression built by hand.
    pub fn intern(&self, predicate: &Predicate) -> Arc<Predicate> {
        self.interner.lock().canonical(predicate)
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.interner.lock().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::test_registry;
    use smallvec::smallvec;

    fn class(cache: &PredicateCache, name: &str) -> Arc<Predicate> {
        cache.class(test_registry().lookup(name).unwrap())
    }

    #[test]
    fn test_aliases_intern_once() {
        let cache = PredicateCache::new();
        let zh = class(&cache, "Zh");
        let gh = class(&cache, "Gh");
        assert!(Arc::ptr_eq(&zh, &gh));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_equal_sets_intern_once() {
        // Separate tables, same members.
        let cache = PredicateCache::new();
        let registry = test_registry();
        let j = cache.class(registry.identifier());
        let jp = cache.class(registry.identifier_part());
        assert!(Arc::ptr_eq(&j, &jp));

        let js = cache.class(registry.identifier_start());
        assert!(!Arc::ptr_eq(&j, &js));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_union_is_order_insensitive() {
        let cache = PredicateCache::new();
        let lu = class(&cache, "Lu");
        let nd = class(&cache, "Nd");
        let a = cache.union(&[lu.clone(), nd.clone()]);
        let b = cache.union(&[nd.clone(), lu.clone(), nd.clone()]);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &cache.intersection(&[lu.clone(), nd])));
        assert!(Arc::ptr_eq(&cache.union(&[lu.clone(), lu.clone()]), &lu));
    }

    #[test]
    fn test_double_negation() {
        let cache = PredicateCache::new();
        let nd = class(&cache, "Nd");
        let not_nd = cache.not(&nd);
        assert!(Arc::ptr_eq(&cache.not(&not_nd), &nd));
        assert!(Arc::ptr_eq(&cache.not(&nd), &not_nd));
    }

    #[test]
    fn test_matches() {
        let cache = PredicateCache::new();
        let l = class(&cache, "L");
        let lu = class(&cache, "Lu");
        let nd = class(&cache, "Nd");

        let lu_or_nd = cache.union(&[lu.clone(), nd]);
        assert!(lu_or_nd.matches_char('A'));
        assert!(lu_or_nd.matches_char('7'));
        assert!(!lu_or_nd.matches_char('a'));

        let lower_ish = cache.intersection(&[l, cache.not(&lu)]);
        assert!(lower_ish.matches_char('a'));
        assert!(lower_ish.matches_char('ǅ'));
        assert!(!lower_ish.matches_char('A'));
        assert!(!lower_ish.matches_char('7'));
    }

    #[test]
    fn test_union_of_whitespace_is_space() {
        let cache = PredicateCache::new();
        let registry = test_registry();
        let either = cache.union(&[class(&cache, "Zh"), class(&cache, "Zv")]);
        for code in 0..=u16::MAX {
            assert_eq!(
                either.matches(code),
                registry.space().contains(code),
                "at {:#06x}",
                code
            );
        }
    }

    #[test]
    fn test_empty_operands() {
        let cache = PredicateCache::new();
        let nothing = cache.union(&[]);
        let everything = cache.intersection(&[]);
        assert!(!nothing.matches(0x41));
        assert!(everything.matches(0x41));
        assert!(everything.matches_char('\u{10400}'));
        assert!(!nothing.matches_char('\u{10400}'));
    }

    #[test]
    fn test_outside_bmp() {
        let cache = PredicateCache::new();
        let l = class(&cache, "L");
        assert!(!l.matches_char('\u{1D400}'));
        assert!(cache.not(&l).matches_char('\u{1D400}'));
    }

    #[test]
    fn test_intern_hand_built() {
        let cache = PredicateCache::new();
        let registry = test_registry();
        let built = Predicate::Union(smallvec![
            Arc::new(Predicate::Class(registry.lookup("Nd").unwrap().clone())),
            Arc::new(Predicate::Not(Arc::new(Predicate::Class(
                registry.lookup("Gv").unwrap().clone()
            )))),
        ]);
        let interned = cache.intern(&built);
        let expected = cache.union(&[
            cache.not(&class(&cache, "Zv")),
            class(&cache, "Nd"),
        ]);
        assert!(Arc::ptr_eq(&interned, &expected));
        for code in [0x30, 0x39, 0x0A, 0x2028, 0x41] {
            assert_eq!(interned.matches(code), built.matches(code));
        }
        assert!(Arc::ptr_eq(&cache.intern(&built), &interned));
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(PredicateCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let lu = class(&cache, "Lu");
                    let ll = class(&cache, "Ll");
                    cache.union(&[lu, ll])
                })
            })
            .collect();
        let nodes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(nodes.iter().all(|n| Arc::ptr_eq(n, &nodes[0])));
        assert_eq!(cache.len(), 3);
    }
}
