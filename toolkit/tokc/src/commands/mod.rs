//! Subcommand implementations for the `tok` binary.
//!
//! Each command takes the raw input text, runs the matching extractor,
//! prints the result, and returns the process exit code.

use tok_at::{parse_cgpaddr, parse_quoted, parse_temperature, Scale};

/// `tok ip`: extract the IPv4 address from a `+CGPADDR` response.
pub fn run_ip(input: &str) -> i32 {
    match parse_cgpaddr(input) {
        Ok(ip) => {
            println!("{ip}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// `tok quoted`: extract the body of a double-quoted string.
pub fn run_quoted(input: &str) -> i32 {
    match parse_quoted(input) {
        Ok(body) => {
            println!("{body}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// `tok temp`: decode a temperature reading such as `19C` or `-40F`.
pub fn run_temp(input: &str) -> i32 {
    match parse_temperature(input) {
        Ok(reading) => {
            let unit = match reading.scale {
                Scale::Celsius => "C",
                Scale::Fahrenheit => "F",
            };
            println!("{} {unit}", reading.degrees);
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}
