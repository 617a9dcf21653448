//! Thin CLI glue: pick the input source, hash, render, exit. The sequence is
//! intentionally linear and auditable so operators can see exactly how the
//! plaintext is handled.

use std::env;
use std::process::ExitCode;

use thiserror::Error;

use rootpw_gen::crypt::hasher::SecretHasher;
use rootpw_gen::crypt::provider::SystemCrypt;
use rootpw_gen::crypt::CryptError;
use rootpw_gen::input::{InputError, InputSource};
use rootpw_gen::output::OutputMode;

/// Application-level error combining the input and hashing concerns. Every
/// failure is terminal for this single-shot process.
#[derive(Debug, Error)]
enum AppError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("hashing error: {0}")]
    Crypt(#[from] CryptError),
}

fn run() -> Result<(), AppError> {
    // With an argument: bare records for scripting. Without: prompt once and
    // emit ready-to-paste kickstart directives.
    let (source, mode) = match env::args().nth(1) {
        Some(arg) => (InputSource::Argv(arg), OutputMode::Plain),
        None => (InputSource::InteractivePrompt, OutputMode::Kickstart),
    };

    let secret = source.read_secret()?;
    let records = SecretHasher::new(SystemCrypt).hash_all(&secret)?;
    print!("{}", mode.render(&records));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
