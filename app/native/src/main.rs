#![allow(clippy::multiple_crate_versions)]

//! netlock binary. See `netlock --help`.

fn main() {
    if let Err(err) = netlock_lib::cli::run() {
        eprintln!("netlock: {err}");
        std::process::exit(1);
    }
}
