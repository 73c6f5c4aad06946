// src/bin/b64enc.rs

//! `b64enc` — encode binary data from stdin to Base64 on stdout.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use secretdec_rs::{logger, stream_encode, SecretdecError, StreamOptions};

fn usage(program: &str) {
    eprintln!(
        "usage: {program} [--hex-input|-x] [--pad-output|-p] [--wrap-lines[=N]|-w [N]]\n\
         \n\
         Reads binary data (or, with --hex-input, whitespace-tolerant hex text)\n\
         from STDIN and writes Base64 encoded data to STDOUT.\n\
         --wrap-lines defaults the line width to 76 when no number is given."
    );
}

fn fail(message: &str) -> ExitCode {
    eprintln!("{message}\u{7}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    logger::setup_logger();

    let args: Vec<String> = env::args().collect();
    let mut options = StreamOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--hex-input" | "-x" => options.hex_input = true,
            "--pad-output" | "-p" => options.pad = true,
            "--wrap-lines" | "-w" => {
                options.wrap = true;
                // optional width: consume the next argument when it is not an option
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    options.line_width = match args[i].parse() {
                        Ok(width) => width,
                        Err(_) => {
                            return fail(&format!(
                                "Invalid line size '{}' specified for -w option.",
                                args[i]
                            ));
                        }
                    };
                }
            }
            arg if arg.starts_with("--wrap-lines=") => {
                options.wrap = true;
                let value = &arg["--wrap-lines=".len()..];
                options.line_width = match value.parse() {
                    Ok(width) => width,
                    Err(_) => {
                        return fail(&format!(
                            "Invalid line size '{value}' specified for -w option."
                        ));
                    }
                };
            }
            "--help" | "-h" => {
                usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            arg => return fail(&format!("Unknown option '{arg}'.")),
        }
        i += 1;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = stream_encode(&mut input, &mut output, &options)
        .and_then(|()| output.flush().map_err(SecretdecError::Write));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(SecretdecError::Write(_)) => fail("Write to STDOUT failed."),
        Err(SecretdecError::InvalidCharacter(_)) => {
            fail("Invalid hexadecimal data value encountered on STDIN.")
        }
        Err(SecretdecError::InvalidLength) => {
            fail("Invalid hexadecimal data size encountered on STDIN.")
        }
        Err(e) => fail(&format!("Unexpected error encountered: {e}.")),
    }
}
