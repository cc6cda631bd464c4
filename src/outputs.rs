//! `outputs`
//!
//! The fixed manifest of files that make up the icon set.

/// A single file of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputEntry {
    /// Edge length of the (square) icon in pixels.
    pub size: u32,
    /// Name of the file to write, relative to the output directory.
    pub filename: &'static str,
}

/// The icon sizes generated for the standard `icon-<size>.png` outputs.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Every file of the icon set, in the order the files are written.
///
/// The maskable and badge entries are pixel-identical to the standard icon of
/// the same size; only the filename differs.
pub const OUTPUTS: [OutputEntry; 11] = [
    OutputEntry {
        size: 72,
        filename: "icon-72.png",
    },
    OutputEntry {
        size: 96,
        filename: "icon-96.png",
    },
    OutputEntry {
        size: 128,
        filename: "icon-128.png",
    },
    OutputEntry {
        size: 144,
        filename: "icon-144.png",
    },
    OutputEntry {
        size: 152,
        filename: "icon-152.png",
    },
    OutputEntry {
        size: 192,
        filename: "icon-192.png",
    },
    OutputEntry {
        size: 384,
        filename: "icon-384.png",
    },
    OutputEntry {
        size: 512,
        filename: "icon-512.png",
    },
    OutputEntry {
        size: 192,
        filename: "icon-192-maskable.png",
    },
    OutputEntry {
        size: 512,
        filename: "icon-512-maskable.png",
    },
    OutputEntry {
        size: 72,
        filename: "badge-72.png",
    },
];
