//! pqfactor: split numbers into factor pairs from the command line.
//!
//! # Run
//! ```
//! cargo run -p pqfactor-cli -- 1470626929934143021
//! ```
//!
//! Prints one `<n>: <p> <q>` line per argument. Arguments that fail to
//! parse or to split are reported on stderr and flip the exit code to 1.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Enable logging: RUST_LOG=debug cargo run -p pqfactor-cli -- <number>
    if std::env::var("RUST_LOG").is_err() {
        // SAFETY: single-threaded at this point, no other threads reading env
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: pqfactor <number> [<number>…]");
        return ExitCode::from(2);
    }

    let mut failed = false;
    for arg in &args {
        match split(arg) {
            Ok((n, p, q)) => println!("{n}: {p} {q}"),
            Err(e) => {
                eprintln!("{arg}: {e}");
                failed = true;
            }
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn split(arg: &str) -> Result<(u64, u64, u64), Box<dyn std::error::Error>> {
    let n: u64 = arg.parse()?;
    if n <= 1 {
        return Err(format!("{n} has no nontrivial factors").into());
    }
    log::debug!("splitting {n}");
    let (p, q) = pqfactor_core::factorize(n)?;
    Ok((n, p, q))
}
