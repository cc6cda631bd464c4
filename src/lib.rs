//! `sigil`
//!
//! A utility for generating a web-app icon set: a solid-colour square with a
//! centred white disc, rendered at a fixed set of sizes and written out as
//! PNG files.

pub mod icon;
pub mod outputs;

use std::path::Path;

pub use icon::{generate_icon, Icon};
pub use outputs::{OutputEntry, ICON_SIZES, OUTPUTS};

/// Errors that can occur when writing the icon set to disk.
///
/// Canvas allocation failures are not represented here: running out of memory
/// aborts the process.
#[derive(Debug)]
pub enum WriteIconSetError {
    /// An icon could not be encoded as PNG or written to disk, for example
    /// because the output directory does not exist or is not writable.
    FailedToWriteIcon {
        /// The file that was being written.
        filename: &'static str,
        /// The underlying encoder or filesystem error.
        error: image::ImageError,
    },
}

/// Renders every icon in [`OUTPUTS`] and writes it into `output_dir`,
/// overwriting any file already at that path.
///
/// Outputs are independent of each other, so the first failure aborts the run
/// and any files already written are left in place; re-running regenerates
/// the whole set.
///
/// # Arguments
/// * `output_dir`: The directory to write the icon set into. Must already
///   exist.
///
/// # Returns
/// `Ok(())` if every file was written, otherwise a [`WriteIconSetError`]
/// naming the file that failed.
pub fn write_icon_set(output_dir: &Path) -> Result<(), WriteIconSetError> {
    for entry in OUTPUTS {
        let rendered = generate_icon(entry.size);
        let path = output_dir.join(entry.filename);
        rendered
            .save(&path)
            .map_err(|error| WriteIconSetError::FailedToWriteIcon {
                filename: entry.filename,
                error,
            })?;
        log::info!("wrote {} ({}px)", path.display(), entry.size);
    }

    Ok(())
}
