//! # Zentro Storefront Entry Point
//!
//! Thin binary wrapper; the actual setup lives in lib.rs for testability.

fn main() {
    if let Err(err) = zentro_storefront::run() {
        eprintln!("zentro-storefront: {}", err);
        std::process::exit(1);
    }
}
