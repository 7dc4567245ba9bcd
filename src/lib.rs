pub mod alphabet;
pub mod breach;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod wordlist;

pub use breach::is_breached;
pub use entropy::{estimate_entropy_bits, LOW_ENTROPY_THRESHOLD_BITS};
pub use error::{Error, Result};
pub use generator::{
    GeneratedSecret, GenerationRequest, SecretGenerator, SecretKind, SecretType,
};
pub use wordlist::{WordlistCache, DEFAULT_WORDLIST_PATH};
