use crate::generator::SecretKind;

/// Secrets estimated below this many bits trigger an advisory warning.
pub const LOW_ENTROPY_THRESHOLD_BITS: f64 = 64.0;

/// Estimates the entropy of a generated secret in bits.
///
/// Passwords: `length * log2(alphabet_size)` over distinct code points.
/// Passphrases: `word_count * log2(wordlist_size)`, using the word count the
/// strategy actually drew. The count is carried through explicitly instead of
/// being recovered by splitting the value on the separator, which would
/// overcount whenever a drawn word contains the separator substring.
///
/// The estimate is advisory only; it never blocks generation.
pub fn estimate_entropy_bits(value: &str, kind: &SecretKind) -> f64 {
    match kind {
        SecretKind::Password { alphabet_size } => {
            if *alphabet_size == 0 {
                return 0.0;
            }
            value.chars().count() as f64 * (*alphabet_size as f64).log2()
        }
        SecretKind::Passphrase {
            wordlist_size,
            word_count,
            ..
        } => {
            if *wordlist_size == 0 {
                return 0.0;
            }
            *word_count as f64 * (*wordlist_size as f64).log2()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_entropy_formula() {
        let kind = SecretKind::Password { alphabet_size: 94 };
        let bits = estimate_entropy_bits("a".repeat(16).as_str(), &kind);
        assert!((bits - 16.0 * 94.0_f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_password_entropy_counts_code_points_not_bytes() {
        let kind = SecretKind::Password { alphabet_size: 113 };
        // Four code points, more than four bytes.
        let bits = estimate_entropy_bits("€£¥±", &kind);
        assert!((bits - 4.0 * 113.0_f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_passphrase_entropy_formula() {
        let kind = SecretKind::Passphrase {
            wordlist_size: 2048,
            word_count: 6,
            separator: "-".to_string(),
        };
        let bits = estimate_entropy_bits("six-words-drawn-from-the-list", &kind);
        assert!((bits - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_separator_inside_word_does_not_inflate_estimate() {
        // A drawn word containing the separator must not count twice.
        let kind = SecretKind::Passphrase {
            wordlist_size: 1024,
            word_count: 2,
            separator: "-".to_string(),
        };
        let bits = estimate_entropy_bits("self-aware-zebra", &kind);
        assert!((bits - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pool_yields_zero() {
        let password = SecretKind::Password { alphabet_size: 0 };
        assert_eq!(estimate_entropy_bits("anything", &password), 0.0);

        let passphrase = SecretKind::Passphrase {
            wordlist_size: 0,
            word_count: 4,
            separator: "-".to_string(),
        };
        assert_eq!(estimate_entropy_bits("anything", &passphrase), 0.0);
    }
}
