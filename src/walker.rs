//
// walker.rs
// dicom-scrub
//
// Recursive traversal yielding only files whose content sniffs as DICOM.
//

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

// DICOM Part 10: a 128-byte preamble followed by the `DICM` magic.
const MAGIC_OFFSET: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

/// Lazily yield every regular file under `root` that sniffs as DICOM.
///
/// Recognition is content-based, not extension-based. Traversal order is
/// whatever the directory walk produces. Unreadable candidates and walk
/// errors are logged and skipped as unrecognized.
pub fn dicom_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable directory entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| match is_dicom_file(path) {
            Ok(true) => true,
            Ok(false) => {
                debug!("not a DICOM file: {}", path.display());
                false
            }
            Err(err) => {
                warn!("cannot sniff {}: {err}", path.display());
                false
            }
        })
}

/// Content-based format sniff on the Part 10 header.
pub fn is_dicom_file(path: &Path) -> std::io::Result<bool> {
    let mut header = [0_u8; MAGIC_OFFSET + MAGIC.len()];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => Ok(header[MAGIC_OFFSET..] == *MAGIC),
        // Shorter than the preamble cannot be DICOM.
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err),
    }
}
