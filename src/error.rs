use std::path::PathBuf;

/// Errors raised by secret generation and wordlist loading.
///
/// All variants are raised synchronously at the point of detection and are
/// never retried internally. Retrying is a caller concern.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied value is unusable: an unrecognized secret type tag,
    /// a non-positive passphrase word count, or an empty character alphabet.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The wordlist file does not exist at the expected location.
    #[error("wordlist not found at expected path: {}", path.display())]
    NotFound { path: PathBuf },

    /// The wordlist parsed to zero words.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An I/O failure other than a missing wordlist file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
