//! `itemlink digest` – SHA-512 of a string.

use itemlink_core::digest;

pub fn run_digest(text: &str) {
    println!("{}", digest::sha512_hex(text));
}
