use std::str::FromStr;

use rand::rngs::OsRng;
use rand::Rng;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::alphabet;
use crate::entropy::{estimate_entropy_bits, LOW_ENTROPY_THRESHOLD_BITS};
use crate::error::{Error, Result};
use crate::wordlist::WordlistCache;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;

pub const MAX_PASSPHRASE_WORDS: usize = 12;

/// Passphrases below this word count are generated but flagged as weak.
pub const WEAK_PASSPHRASE_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretType {
    Password,
    Passphrase,
}

impl FromStr for SecretType {
    type Err = Error;

    /// Parses an untyped tag. Unrecognized tags fail outright; there is no
    /// fallback to a default strategy.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "password" => Ok(Self::Password),
            "passphrase" => Ok(Self::Passphrase),
            other => Err(Error::InvalidArgument(format!(
                "unsupported secret type: {other:?}"
            ))),
        }
    }
}

/// Per-call generation parameters. Never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub secret_type: SecretType,
    pub use_unicode: bool,
    pub password_length: usize,
    pub passphrase_word_count: usize,
    pub separator: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            secret_type: SecretType::Password,
            use_unicode: false,
            password_length: 16,
            passphrase_word_count: 4,
            separator: "-".to_string(),
        }
    }
}

/// Metadata describing how a secret was produced, with explicit fields per
/// variant so the entropy estimator never has to re-derive anything from the
/// value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretKind {
    Password {
        alphabet_size: usize,
    },
    Passphrase {
        wordlist_size: usize,
        word_count: usize,
        separator: String,
    },
}

/// A generated secret plus its advisory entropy estimate. The value is wiped
/// on drop; callers are responsible for not persisting it.
#[derive(Debug)]
pub struct GeneratedSecret {
    pub value: Zeroizing<String>,
    pub entropy_bits: f64,
    pub kind: SecretKind,
}

impl GeneratedSecret {
    pub fn secret_type(&self) -> SecretType {
        match self.kind {
            SecretKind::Password { .. } => SecretType::Password,
            SecretKind::Passphrase { .. } => SecretType::Passphrase,
        }
    }
}

/// Dispatches generation requests to the password or passphrase strategy.
///
/// Owns the wordlist cache it consults, so tests and embedders can compose a
/// generator around a fresh or pre-seeded cache instead of sharing hidden
/// module state.
#[derive(Debug, Default)]
pub struct SecretGenerator {
    wordlist: WordlistCache,
}

impl SecretGenerator {
    pub fn new(wordlist: WordlistCache) -> Self {
        Self { wordlist }
    }

    /// A generator backed by the wordlist shipped in `assets/`.
    pub fn with_default_wordlist() -> Self {
        Self::default()
    }

    pub fn wordlist(&self) -> &WordlistCache {
        &self.wordlist
    }

    /// Generates a secret and its entropy estimate.
    ///
    /// The returned value is NFC-normalized. An estimate below
    /// [`LOW_ENTROPY_THRESHOLD_BITS`] emits a warning but never fails the
    /// call. The secret value itself is never logged.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedSecret> {
        let (raw, kind) = match request.secret_type {
            SecretType::Password => {
                self.generate_password(request.use_unicode, request.password_length)?
            }
            SecretType::Passphrase => {
                self.generate_passphrase(request.passphrase_word_count, &request.separator)?
            }
        };

        let value: Zeroizing<String> = Zeroizing::new(raw.nfc().collect());
        let entropy_bits = estimate_entropy_bits(&value, &kind);

        if entropy_bits < LOW_ENTROPY_THRESHOLD_BITS {
            warn!(
                "generated secret has a low entropy estimate of {:.2} bits",
                entropy_bits
            );
        }

        Ok(GeneratedSecret {
            value,
            entropy_bits,
            kind,
        })
    }

    fn generate_password(
        &self,
        use_unicode: bool,
        requested_length: usize,
    ) -> Result<(Zeroizing<String>, SecretKind)> {
        let length = requested_length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);

        let alphabet = alphabet::for_charset(use_unicode);
        if alphabet.is_empty() {
            return Err(Error::InvalidArgument(
                "password alphabet is empty; check the charset configuration".to_string(),
            ));
        }

        let mut rng = OsRng;
        let mut password = Zeroizing::new(String::with_capacity(length * 4));
        for _ in 0..length {
            password.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }

        let normalized = Zeroizing::new(password.nfc().collect::<String>());
        let kind = SecretKind::Password {
            alphabet_size: alphabet.len(),
        };
        Ok((normalized, kind))
    }

    fn generate_passphrase(
        &self,
        word_count: usize,
        separator: &str,
    ) -> Result<(Zeroizing<String>, SecretKind)> {
        if word_count < 1 {
            return Err(Error::InvalidArgument(
                "passphrase word count must be >= 1".to_string(),
            ));
        }
        if word_count < WEAK_PASSPHRASE_WORDS {
            warn!(
                "passphrases with fewer than {} words may be weak",
                WEAK_PASSPHRASE_WORDS
            );
        }

        let effective = word_count.min(MAX_PASSPHRASE_WORDS);

        let words = self.wordlist.load()?;
        if words.is_empty() {
            return Err(Error::InvalidState(
                "wordlist is empty; cannot generate passphrase".to_string(),
            ));
        }

        // Draws are with replacement: each word is an independent uniform
        // sample, which is what the entropy estimate assumes.
        let mut rng = OsRng;
        let drawn: Vec<&str> = (0..effective)
            .map(|_| words[rng.gen_range(0..words.len())].as_str())
            .collect();

        let value = Zeroizing::new(drawn.join(separator));
        let kind = SecretKind::Passphrase {
            wordlist_size: words.len(),
            word_count: effective,
            separator: separator.to_string(),
        };
        Ok((value, kind))
    }
}
