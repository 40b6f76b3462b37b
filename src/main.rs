//! # aisc
//!
//! Compiles AI script files to little-endian instruction words.
//!

mod term;

fn main() {
    std::process::exit(term::main());
}
