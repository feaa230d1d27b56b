//
// convert.rs
// dicom-scrub
//
// The sequential per-file pipeline: walk, load, scrub, remap, write.
//

use std::path::Path;

use anyhow::{Context, Result};
use dicom::object::open_file;
use tracing::info;

use crate::scrub::Scrubber;
use crate::{remap, walker, writer};

/// Process every recognized DICOM file under `input_root` into `output_root`.
///
/// Files are handled strictly one at a time; the first unrecovered error
/// aborts the run. Returns the number of files written.
pub fn convert_tree(input_root: &Path, output_root: &Path) -> Result<usize> {
    convert_tree_with(input_root, output_root, &Scrubber::default())
}

/// Same as [`convert_tree`], with a caller-supplied scrubber (e.g. a
/// different pixel-data policy).
pub fn convert_tree_with(
    input_root: &Path,
    output_root: &Path,
    scrubber: &Scrubber,
) -> Result<usize> {
    let mut processed = 0_usize;

    for path in walker::dicom_files(input_root) {
        let obj = open_file(&path)
            .with_context(|| format!("Failed to open DICOM file {}", path.display()))?;
        let obj = scrubber.scrub(obj)?;
        let dest = remap::remap(input_root, &path, output_root)?;
        writer::write_object(&obj, &dest)?;
        info!("{} -> {}", path.display(), dest.display());
        processed += 1;
    }

    info!(
        "processed {processed} file(s) into {}",
        output_root.display()
    );
    Ok(processed)
}
