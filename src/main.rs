//! `sigil`
//!
//! Command-line entry point: writes the full icon set into the current
//! working directory and prints a confirmation.

use std::path::Path;

use sigil::write_icon_set;

/// Writes the icon set into the current working directory.
///
/// Takes no arguments; the set of sizes and filenames is fixed. On failure
/// the error is printed and the process exits with a non-zero status.
fn main() -> Result<(), sigil::WriteIconSetError> {
    env_logger::init();

    write_icon_set(Path::new("."))?;
    println!("Done!");

    Ok(())
}
