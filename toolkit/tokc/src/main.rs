//! tok CLI
//!
//! Drives the AT-response extractors from the command line.

use tokc::commands::{run_ip, run_quoted, run_temp};

fn main() {
    tokc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "ip" => {
            let input = arg_or_stdin(&args);
            std::process::exit(run_ip(&input));
        }
        "quoted" => {
            let input = arg_or_stdin(&args);
            std::process::exit(run_quoted(&input));
        }
        "temp" => {
            let input = arg_or_stdin(&args);
            std::process::exit(run_temp(&input));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Take the input from the trailing argument, or read all of stdin when
/// no argument was given (responses with CR/LF guards arrive that way).
fn arg_or_stdin(args: &[String]) -> String {
    if let Some(arg) = args.get(2) {
        return arg.clone();
    }
    match std::io::read_to_string(std::io::stdin()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: failed to read stdin: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: tok <command> [input]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  ip [response]    Extract the IPv4 address from a +CGPADDR response");
    eprintln!("  quoted [input]   Extract the body of a double-quoted string");
    eprintln!("  temp [reading]   Decode a temperature reading such as 19C or -40F");
    eprintln!();
    eprintln!("Reads from stdin when [input] is omitted.");
}
