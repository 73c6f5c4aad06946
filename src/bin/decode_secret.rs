// src/bin/decode_secret.rs

//! `decode_secret` — recover an encrypted secret value given its Base32
//! encoding and the hexadecimal AES-128 key.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use secretdec_rs::{decrypt_secret, logger, KeyFault, SecretdecError};

fn usage(program: &str) {
    eprintln!(
        "usage: {program} [--hex-output|-x] <base32-secret> <hex-key>\n\
         \n\
         Decrypts the secret value and writes the payload (raw, or hex with\n\
         --hex-output) to STDOUT."
    );
}

fn fail(message: &str) -> ExitCode {
    eprintln!("{message}\u{7}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    logger::setup_logger();

    let args: Vec<String> = env::args().collect();
    let mut hex_output = false;
    let mut positional: Vec<&str> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--hex-output" | "-x" => hex_output = true,
            "--help" | "-h" => {
                usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            other if other.starts_with('-') && positional.is_empty() => {
                return fail(&format!("Unknown option '{other}'."));
            }
            other => positional.push(other),
        }
    }

    if positional.len() != 2 {
        return fail(
            "Exactly two arguments (base32 encrypted value and hexadecimal key) are required.",
        );
    }

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let result = decrypt_secret(positional[0], positional[1], hex_output, &mut output)
        .and_then(|()| output.flush().map_err(SecretdecError::Write));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(SecretdecError::InvalidKey(KeyFault::WrongSize)) => {
            fail("The specified key has a wrong size.")
        }
        Err(SecretdecError::InvalidKey(KeyFault::WrongPassword)) => {
            fail("The specified password is wrong.")
        }
        Err(SecretdecError::InvalidCharacter(_) | SecretdecError::InvalidLength) => {
            fail("The specified arguments contain invalid data.")
        }
        Err(SecretdecError::InvalidSecretEncoding) => {
            fail("The specified arguments contain invalid data.")
        }
        Err(SecretdecError::Write(_)) => fail("Write to STDOUT failed."),
        Err(e) => fail(&format!("Unexpected error encountered: {e}.")),
    }
}
