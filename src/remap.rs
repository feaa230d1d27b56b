//
// remap.rs
// dicom-scrub
//
// Derives output paths: the study directory loses its tracking identifier and keeps a short numeric prefix.
//

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Structural problems with the input tree layout. These abort the run;
/// the rename contract needs a study directory between root and file.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("file {0:?} is not under the input root")]
    OutsideRoot(PathBuf),
    #[error("file {0:?} sits directly in the input root; expected a \"<tracking-id> <description>\" directory above it")]
    TooShallow(PathBuf),
    #[error("study directory name above {0:?} is not valid UTF-8")]
    NonUtf8Segment(PathBuf),
}

/// Compute the destination for `file` under `output_root`.
///
/// The first directory under the input root is named
/// `"<tracking-id> <description>"`; it becomes `"<NN>_<description>"`,
/// where `NN` is the identifier's last dot-segment zero-padded to two
/// digits. Everything below that level is preserved unchanged.
pub fn remap(input_root: &Path, file: &Path, output_root: &Path) -> Result<PathBuf, LayoutError> {
    let relative = file
        .strip_prefix(input_root)
        .map_err(|_| LayoutError::OutsideRoot(file.to_path_buf()))?;

    let mut components = relative.components();
    let leading = match components.next() {
        Some(Component::Normal(segment)) => segment,
        _ => return Err(LayoutError::TooShallow(file.to_path_buf())),
    };
    // A lone file name means there is no study directory to rename.
    if components.clone().next().is_none() {
        return Err(LayoutError::TooShallow(file.to_path_buf()));
    }

    let leading = leading
        .to_str()
        .ok_or_else(|| LayoutError::NonUtf8Segment(file.to_path_buf()))?;

    Ok(output_root
        .join(rename_leading_segment(leading))
        .join(components.as_path()))
}

/// `"1.2.3.456 BrainScan"` becomes `"456_BrainScan"`.
pub fn rename_leading_segment(segment: &str) -> String {
    let mut tokens = segment.split_whitespace();
    let tracking_id = tokens.next().unwrap_or("");
    let description = tokens.collect::<Vec<_>>().join(" ");
    let short_id = tracking_id.rsplit('.').next().unwrap_or("");
    format!("{short_id:0>2}_{description}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_segment_keeps_last_id_component_and_description() {
        assert_eq!(
            rename_leading_segment("1.2.3.456 BrainScan"),
            "456_BrainScan"
        );
    }

    #[test]
    fn short_id_components_are_zero_padded() {
        assert_eq!(
            rename_leading_segment("1.5.12.4 Tutorial Data"),
            "04_Tutorial Data"
        );
    }

    #[test]
    fn missing_description_leaves_a_bare_prefix() {
        assert_eq!(rename_leading_segment("1.2.3.7"), "07_");
    }

    #[test]
    fn remap_preserves_structure_below_the_study_directory() {
        let dest = remap(
            Path::new("/in"),
            Path::new("/in/1.2.3.456 BrainScan/sub/img.dat"),
            Path::new("/out"),
        )
        .expect("remap");
        assert_eq!(dest, Path::new("/out/456_BrainScan/sub/img.dat"));
    }

    #[test]
    fn files_directly_in_the_root_are_rejected() {
        let err = remap(
            Path::new("/in"),
            Path::new("/in/img.dat"),
            Path::new("/out"),
        )
        .expect_err("shallow layout");
        assert!(matches!(err, LayoutError::TooShallow(_)));
    }

    #[test]
    fn files_outside_the_root_are_rejected() {
        let err = remap(
            Path::new("/in"),
            Path::new("/elsewhere/a/img.dat"),
            Path::new("/out"),
        )
        .expect_err("outside root");
        assert!(matches!(err, LayoutError::OutsideRoot(_)));
    }
}
