//! Single-character case folding and bracket pairing.
//!
//! Folding never fails: characters without a single-character mapping
//! (digits, already folded letters, `ß`, anything outside the BMP) come back
//! unchanged.
//!
//! `<` and `>` pair up like brackets even though Unicode does not classify
//! them as such; a pattern has to ask for bracket matching explicitly, so the
//! wider set does not change the meaning of plain `<` or `>`.

use std::sync::OnceLock;

use crate::char_map::CharMap;
use crate::tables;

const _: () = assert!(tables::UPPER.len() == tables::LOWER.len());
const _: () = assert!(tables::OPENERS.len() == tables::CLOSERS.len());

/// The case and bracket maps, built once from the literal tables.
#[derive(Debug, Clone)]
pub struct Folding {
    /// Uppercase keys, lowercase values.
    case: CharMap,
    /// Opening keys, closing values.
    brackets: CharMap,
}

impl Default for Folding {
    fn default() -> Self {
        Self::new()
    }
}

impl Folding {
    pub fn new() -> Self {
        Self {
            case: CharMap::from_parallel(tables::UPPER, tables::LOWER),
            brackets: CharMap::from_parallel(tables::OPENERS, tables::CLOSERS),
        }
    }

    /// Process-wide instance used by the free functions.
    pub fn shared() -> &'static Folding {
        static SHARED: OnceLock<Folding> = OnceLock::new();
        SHARED.get_or_init(Folding::new)
    }

    #[inline]
    pub fn fold_code(&self, code: u16) -> u16 {
        self.case.get(code).unwrap_or(code)
    }

    #[inline]
    pub fn up_code(&self, code: u16) -> u16 {
        self.case.get_key(code).unwrap_or(code)
    }

    #[inline]
    pub fn bracket_code(&self, code: u16) -> u16 {
        self.brackets
            .get(code)
            .or_else(|| self.brackets.get_key(code))
            .unwrap_or(code)
    }

    /// Lowercase form of `c`, or `c` itself.
    #[inline]
    pub fn case_fold(&self, c: char) -> char {
        map_char(c, |code| self.fold_code(code))
    }

    /// Uppercase form of `c`, or `c` itself.
    #[inline]
    pub fn case_up(&self, c: char) -> char {
        map_char(c, |code| self.up_code(code))
    }

    /// The counterpart of an opening or closing bracket, or `c` itself.
    #[inline]
    pub fn match_bracket(&self, c: char) -> char {
        map_char(c, |code| self.bracket_code(code))
    }

    /// Case-insensitive comparison of two characters.
    #[inline]
    pub fn fold_eq(&self, a: char, b: char) -> bool {
        a == b || self.case_fold(a) == self.case_fold(b)
    }

    /// Reverse `s`, swapping every bracket for its counterpart.
    ///
    /// `"(a"` becomes `"a)"`. The result has as many characters as `s`.
    pub fn reverse_with_brackets(&self, s: &str) -> String {
        s.chars().rev().map(|c| self.match_bracket(c)).collect()
    }

    /// True if `left` equals `right` read back to front with every bracket of
    /// `right` swapped. Two absent strings are equal, one absent is not.
    pub fn reverse_bracket_equal(&self, left: Option<&str>, right: Option<&str>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left
                .chars()
                .eq(right.chars().rev().map(|c| self.match_bracket(c))),
            _ => false,
        }
    }
}

fn map_char(c: char, map: impl FnOnce(u16) -> u16) -> char {
    match u16::try_from(u32::from(c)) {
        Ok(code) => char::from_u32(u32::from(map(code))).unwrap_or(c),
        Err(_) => c,
    }
}

/// Lowercase form of `c`, or `c` itself.
pub fn case_fold(c: char) -> char {
    Folding::shared().case_fold(c)
}

/// Uppercase form of `c`, or `c` itself.
pub fn case_up(c: char) -> char {
    Folding::shared().case_up(c)
}

/// The counterpart of an opening or closing bracket, or `c` itself.
pub fn match_bracket(c: char) -> char {
    Folding::shared().match_bracket(c)
}

/// Case-insensitive comparison of two characters.
pub fn fold_eq(a: char, b: char) -> bool {
    Folding::shared().fold_eq(a, b)
}

/// Reverse `s`, swapping every bracket for its counterpart.
pub fn reverse_with_brackets(s: &str) -> String {
    Folding::shared().reverse_with_brackets(s)
}

/// True if `left` equals `right` read back to front. Two absent strings are
/// equal, one absent is not.
pub fn reverse_equal(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            left.len() == right.len() && left.chars().eq(right.chars().rev())
        }
        _ => false,
    }
}

/// [`reverse_equal`] with every bracket of `right` swapped before comparing.
pub fn reverse_bracket_equal(left: Option<&str>, right: Option<&str>) -> bool {
    Folding::shared().reverse_bracket_equal(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_case_fold() {
        assert_eq!(case_fold('A'), 'a');
        assert_eq!(case_fold('Z'), 'z');
        assert_eq!(case_fold('1'), '1');
        assert_eq!(case_fold('a'), 'a');
        assert_eq!(case_fold('ß'), 'ß');
        assert_eq!(case_fold('Ÿ'), 'ÿ');
        assert_eq!(case_fold('Σ'), 'σ');
        assert_eq!(case_fold('\u{212A}'), 'k'); // KELVIN SIGN
        assert_eq!(case_fold('ſ'), 's');
        assert_eq!(case_fold('\u{10400}'), '\u{10400}');
    }

    #[test]
    fn test_case_up() {
        assert_eq!(case_up('a'), 'A');
        assert_eq!(case_up('ÿ'), 'Ÿ');
        assert_eq!(case_up('s'), 'S');
        assert_eq!(case_up('k'), 'K');
        assert_eq!(case_up('μ'), 'Μ');
        assert_eq!(case_up('σ'), 'Σ');
        assert_eq!(case_up('A'), 'A');
        assert_eq!(case_up('7'), '7');
    }

    #[test]
    fn test_fold_is_idempotent() {
        let folding = Folding::new();
        for code in 0..=u16::MAX {
            let once = folding.fold_code(code);
            assert_eq!(folding.fold_code(once), once, "at {:#06x}", code);
        }
    }

    #[test]
    fn test_up_is_idempotent() {
        let folding = Folding::new();
        for code in 0..=u16::MAX {
            let once = folding.up_code(code);
            assert_eq!(folding.up_code(once), once, "at {:#06x}", code);
        }
    }

    #[test]
    fn test_fold_eq() {
        assert!(fold_eq('a', 'A'));
        assert!(fold_eq('Ω', 'ω'));
        assert!(fold_eq('\u{212A}', 'K'));
        assert!(fold_eq('x', 'x'));
        assert!(!fold_eq('a', 'b'));
    }

    #[test]
    fn test_match_bracket() {
        assert_eq!(match_bracket('('), ')');
        assert_eq!(match_bracket(')'), '(');
        assert_eq!(match_bracket('<'), '>');
        assert_eq!(match_bracket('>'), '<');
        assert_eq!(match_bracket('['), ']');
        assert_eq!(match_bracket('}'), '{');
        assert_eq!(match_bracket('「'), '」');
        assert_eq!(match_bracket('x'), 'x');
        assert_eq!(match_bracket('a'), 'a');
    }

    #[test]
    fn test_bracket_involution() {
        let folding = Folding::new();
        let mut brackets = 0;
        for code in 0..=u16::MAX {
            let matched = folding.bracket_code(code);
            if matched != code {
                brackets += 1;
                assert_eq!(folding.bracket_code(matched), code, "at {:#06x}", code);
            }
        }
        assert_eq!(brackets, 2 * tables::OPENERS.len());
    }

    #[test]
    fn test_reverse_with_brackets() {
        assert_eq!(reverse_with_brackets("(a"), "a)");
        assert_eq!(reverse_with_brackets("f(x)"), "(x)f");
        assert_eq!(reverse_with_brackets("<[b]>"), "<[b]>");
        assert_eq!(reverse_with_brackets(""), "");
    }

    #[test]
    fn test_reverse_equal() {
        assert!(reverse_equal(Some("abc"), Some("cba")));
        assert!(!reverse_equal(Some("abc"), Some("abc")));
        assert!(!reverse_equal(Some("abc"), Some("ba")));
        assert!(reverse_equal(Some(""), Some("")));
        assert!(reverse_equal(None, None));
        assert!(!reverse_equal(Some("a"), None));
        assert!(!reverse_equal(None, Some("a")));
    }

    #[test]
    fn test_reverse_bracket_equal() {
        assert!(reverse_bracket_equal(Some("a)"), Some("(a")));
        assert!(reverse_bracket_equal(Some("(x)"), Some("(x)")));
        assert!(!reverse_bracket_equal(Some("(a"), Some("(a")));
        assert!(!reverse_bracket_equal(Some("a)"), Some("(a ")));
        assert!(reverse_bracket_equal(None, None));
        assert!(!reverse_bracket_equal(None, Some("")));
    }

    #[quickcheck]
    fn reverse_with_brackets_keeps_length(s: String) -> bool {
        reverse_with_brackets(&s).chars().count() == s.chars().count()
    }

    #[quickcheck]
    fn reverse_with_brackets_twice_is_identity(s: String) -> bool {
        reverse_with_brackets(&reverse_with_brackets(&s)) == s
    }

    #[quickcheck]
    fn reversed_string_is_reverse_equal(s: String) -> bool {
        let reversed: String = s.chars().rev().collect();
        reverse_equal(Some(&reversed), Some(&s))
    }

    #[quickcheck]
    fn bracket_reversed_string_is_reverse_bracket_equal(s: String) -> bool {
        reverse_bracket_equal(Some(&reverse_with_brackets(&s)), Some(&s))
    }
}
