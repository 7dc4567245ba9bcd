mod clipboard;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use passmith::{Error, GenerationRequest, SecretGenerator, SecretType};

#[derive(Parser)]
#[command(
    name = "passmith",
    version,
    about = "Generate cryptographically secure passwords or memorable passphrases"
)]
struct Cli {
    /// Type of secret to generate
    #[arg(short = 't', long = "type", value_enum, default_value = "password")]
    secret_type: SecretTypeArg,

    /// Length for character-based passwords (clamped to 8..=64)
    #[arg(short = 'l', long, default_value_t = 16)]
    length: usize,

    /// Number of words for passphrases (at most 12)
    #[arg(short = 'w', long, default_value_t = 4)]
    words: usize,

    /// Separator between passphrase words
    #[arg(short = 's', long, default_value = "-")]
    separator: String,

    /// Include a small set of extra Unicode characters in passwords
    #[arg(long)]
    unicode: bool,

    /// Number of secrets to generate
    #[arg(short = 'c', long, default_value_t = 1)]
    count: i64,

    /// Copy the first generated secret to the clipboard
    #[arg(long)]
    copy: bool,

    /// Check the first generated secret against the Pwned Passwords corpus
    #[arg(long)]
    check_breach: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum SecretTypeArg {
    Password,
    Passphrase,
}

impl From<SecretTypeArg> for SecretType {
    fn from(arg: SecretTypeArg) -> Self {
        match arg {
            SecretTypeArg::Password => Self::Password,
            SecretTypeArg::Passphrase => Self::Passphrase,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.count < 1 {
        eprintln!("Error: --count must be >= 1");
        return ExitCode::from(2);
    }

    let request = GenerationRequest {
        secret_type: cli.secret_type.into(),
        use_unicode: cli.unicode,
        password_length: cli.length,
        passphrase_word_count: cli.words,
        separator: cli.separator.clone(),
    };

    let generator = SecretGenerator::with_default_wordlist();

    let mut secrets = Vec::with_capacity(cli.count as usize);
    for _ in 0..cli.count {
        match generator.generate(&request) {
            Ok(secret) => secrets.push(secret),
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::from(exit_code_for(&err));
            }
        }
    }

    for secret in &secrets {
        println!("{}", secret.value.as_str());
    }

    if let Some(first) = secrets.first() {
        if cli.copy {
            clipboard::copy(&first.value);
        }
        if cli.check_breach {
            if passmith::is_breached(&first.value) {
                eprintln!("Warning: the first secret appears in known breach data; discard it.");
            } else {
                eprintln!("First secret not found in known breach data (or the check was unavailable).");
            }
        }
    }

    ExitCode::SUCCESS
}

fn exit_code_for(err: &Error) -> u8 {
    match err {
        Error::NotFound { .. } => 3,
        Error::InvalidArgument(_) | Error::InvalidState(_) => 4,
        Error::Io(_) => 1,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
