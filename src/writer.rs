use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dicom::object::DefaultDicomObject;

/// Serialize `obj` to `dest`, creating parent directories as needed.
///
/// An existing destination is a hard error: the run-level contract already
/// guarantees a fresh output root, so a collision mid-run means two inputs
/// mapped to the same output path.
pub fn write_object(obj: &DefaultDicomObject, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    if dest.exists() {
        bail!("Output file already exists: {}", dest.display());
    }
    obj.write_to_file(dest)
        .with_context(|| format!("Failed to write {}", dest.display()))
}
