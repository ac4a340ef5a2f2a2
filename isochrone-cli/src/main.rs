//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = isochrone_cli::run() {
        eprintln!("isochrone: {err}");
        std::process::exit(1);
    }
}
