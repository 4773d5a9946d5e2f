use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Extensions accepted as input images (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Resolve a file or directory into a sorted list of image paths.
///
/// A file is returned on its own when its extension is supported. A directory
/// is listed without recursion. Anything else yields an empty list.
pub fn discover_images(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(if has_image_extension(path) {
            vec![path.to_path_buf()]
        } else {
            debug!("Ignoring unsupported file: {:?}", path);
            Vec::new()
        });
    }

    if !path.is_dir() {
        debug!("Path is neither a file nor a directory: {:?}", path);
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_file() && has_image_extension(&entry_path) {
            images.push(entry_path);
        }
    }
    images.sort();
    debug!("Found {} images in {:?}", images.len(), path);
    Ok(images)
}
