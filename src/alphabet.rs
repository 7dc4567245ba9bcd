use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

/// ASCII letters, digits, and the 32 standard punctuation characters.
const ASCII_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
                              !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Hand-vetted currency and typographic marks appended when Unicode output
/// is requested. Not user-configurable.
const UNICODE_EXTENSION: &str = "\u{a1}\u{a2}\u{a3}\u{a4}\u{a5}\u{a7}\u{a9}\u{ae}\u{b1}\u{b5}\
                                 \u{b6}\u{2022}\u{2013}\u{2014}\u{2026}\u{b0}\u{20ac}\u{2020}\u{2021}";

static ASCII_CHARS: OnceLock<Vec<char>> = OnceLock::new();
static EXTENDED_CHARS: OnceLock<Vec<char>> = OnceLock::new();

/// Returns the alphabet to draw password characters from. Each distinct
/// code point appears exactly once, so `len()` is directly usable for
/// entropy estimation. Built once per process.
pub fn for_charset(use_unicode: bool) -> &'static [char] {
    if use_unicode {
        EXTENDED_CHARS.get_or_init(|| {
            let mut chars = dedup_code_points(ASCII_ALPHABET.chars());
            let extension: String = UNICODE_EXTENSION.nfc().collect();
            let mut seen: HashSet<char> = chars.iter().copied().collect();
            for ch in extension.chars() {
                if !ch.is_control() && !ch.is_whitespace() && seen.insert(ch) {
                    chars.push(ch);
                }
            }
            chars
        })
    } else {
        ASCII_CHARS.get_or_init(|| dedup_code_points(ASCII_ALPHABET.chars()))
    }
}

fn dedup_code_points(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut seen = HashSet::new();
    chars.filter(|ch| seen.insert(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_alphabet_size() {
        // 26 upper + 26 lower + 10 digits + 32 punctuation
        assert_eq!(for_charset(false).len(), 94);
    }

    #[test]
    fn test_extended_alphabet_size() {
        assert_eq!(for_charset(true).len(), 94 + 19);
    }

    #[test]
    fn test_no_duplicate_code_points() {
        for use_unicode in [false, true] {
            let chars = for_charset(use_unicode);
            let unique: HashSet<_> = chars.iter().collect();
            assert_eq!(unique.len(), chars.len(), "alphabet contains duplicates");
        }
    }

    #[test]
    fn test_ascii_alphabet_is_ascii() {
        assert!(for_charset(false).iter().all(|c| c.is_ascii()));
    }

    #[test]
    fn test_extension_excludes_whitespace_and_control() {
        for ch in for_charset(true) {
            assert!(!ch.is_whitespace(), "alphabet contains whitespace: {ch:?}");
            assert!(!ch.is_control(), "alphabet contains control char: {ch:?}");
        }
    }

    #[test]
    fn test_extension_contains_vetted_marks() {
        let extended = for_charset(true);
        for expected in ['€', '£', '¥', '±', '†'] {
            assert!(extended.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_computed_once_per_process() {
        let first = for_charset(true);
        let second = for_charset(true);
        assert!(std::ptr::eq(first, second));
    }
}
