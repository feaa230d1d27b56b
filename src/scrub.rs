//
// scrub.rs
// dicom-scrub
//
// The in-memory redaction passes applied to each loaded DICOM object before it is written back out.
//

use anyhow::{Context, Result};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{DefaultDicomObject, FileDicomObject, FileMetaTableBuilder};

use crate::dicom_access::ElementAccess;
use crate::tables;

/// Decides per object whether the pixel payload is erased.
///
/// The default erases everything. Earlier revisions of this workflow kept
/// selected series (DWI magnitude/phase, spin-echo EPIs) by Series Number;
/// such rules plug in here without touching the pipeline.
pub type PixelDataPolicy = fn(&DefaultDicomObject) -> bool;

pub const ERASE_ALL_PIXEL_DATA: PixelDataPolicy = |_| true;

/// Applies the redaction passes in a fixed order: null, anonymize, UID
/// trimming (dataset, then file meta), private-block erasure, pixel erasure.
pub struct Scrubber {
    pixel_data_policy: PixelDataPolicy,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self {
            pixel_data_policy: ERASE_ALL_PIXEL_DATA,
        }
    }
}

impl Scrubber {
    pub fn with_pixel_data_policy(policy: PixelDataPolicy) -> Self {
        Self {
            pixel_data_policy: policy,
        }
    }

    /// Run every pass and return the object ready for serialization.
    pub fn scrub(&self, mut obj: DefaultDicomObject) -> Result<DefaultDicomObject> {
        null_fields(&mut obj);
        anonymize_fields(&mut obj);
        trim_uids(&mut obj);

        // The file-meta instance UID is a required attribute of the Part 10
        // wrapper; a file without it already failed at open time.
        let meta_uid = obj
            .meta()
            .media_storage_sop_instance_uid
            .trim_end_matches('\0')
            .trim_end()
            .to_string();
        let trimmed_meta_uid = remove_uid_segment(&meta_uid, tables::META_SOP_INSTANCE_TRIM_INDEX);

        let delete_pixel_data = (self.pixel_data_policy)(&obj);

        erase_private_blocks(&mut obj);

        if delete_pixel_data {
            obj.remove(tables::PIXEL_DATA);
        }

        rebuild_with_meta_uid(obj, &trimmed_meta_uid)
    }
}

/// Blank every attribute in the null table that is present; absent ones stay absent.
pub fn null_fields<T: ElementAccess>(obj: &mut T) {
    for field in tables::TO_NULL {
        obj.clear_element(field.tag);
    }
}

/// Overwrite (or create) every attribute in the anonymize table with its placeholder.
pub fn anonymize_fields<T: ElementAccess>(obj: &mut T) {
    for field in tables::TO_ANONYMIZE {
        let placeholder = format!("Anonymous{}", field.keyword);
        obj.put_str(field.tag, field.vr, &placeholder);
    }
}

/// Drop one dot-segment from every UID attribute present in the dataset.
pub fn trim_uids<T: ElementAccess>(obj: &mut T) {
    for (field, index) in tables::UIDS_TO_TRIM {
        if let Some(value) = obj.element_str(field.tag) {
            let trimmed = remove_uid_segment(&value, *index);
            obj.put_str(field.tag, field.vr, &trimmed);
        }
    }
}

/// Delete every listed private block; absent addresses are no-ops.
pub fn erase_private_blocks<T: ElementAccess>(obj: &mut T) {
    for tag in tables::PRIVATE_BLOCKS {
        obj.remove(*tag);
    }
}

/// Remove the dot-delimited segment at `index`, keeping the rest in order.
///
/// Indexes at or beyond the segment count leave the value unchanged. The
/// result is not guaranteed to stay globally unique, and the original
/// value cannot be reconstructed from it.
pub fn remove_uid_segment(uid: &str, index: usize) -> String {
    uid.split('.')
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, segment)| segment)
        .collect::<Vec<_>>()
        .join(".")
}

fn rebuild_with_meta_uid(
    obj: DefaultDicomObject,
    sop_instance_uid: &str,
) -> Result<DefaultDicomObject> {
    // Rebuilding through the builder keeps the meta group length consistent.
    let transfer_syntax = obj.meta().transfer_syntax().to_string();
    let sop_class_uid = obj
        .meta()
        .media_storage_sop_class_uid
        .trim_end_matches('\0')
        .trim_end()
        .to_string();

    let meta = FileMetaTableBuilder::new()
        .transfer_syntax(transfer_syntax)
        .media_storage_sop_class_uid(sop_class_uid)
        .media_storage_sop_instance_uid(sop_instance_uid)
        .build()
        .context("Failed to rebuild file meta table")?;

    let mut file_obj = FileDicomObject::new_empty_with_dict_and_meta(StandardDataDictionary, meta);
    for elem in obj.into_inner() {
        file_obj.put(elem);
    }
    Ok(file_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{Tag, VR};
    use dicom::object::InMemDicomObject;

    fn empty_obj() -> InMemDicomObject<StandardDataDictionary> {
        InMemDicomObject::new_empty_with_dict(StandardDataDictionary)
    }

    #[test]
    fn uid_trim_removes_exactly_the_indexed_segment() {
        assert_eq!(
            remove_uid_segment("1.2.840.10008.1.2.3.4.5.6", 0),
            "2.840.10008.1.2.3.4.5.6"
        );
        assert_eq!(remove_uid_segment("1.2.3", 1), "1.3");
    }

    #[test]
    fn uid_trim_is_not_idempotent_across_applications() {
        // A second application at the same index removes a different segment.
        let once = remove_uid_segment("1.2.3.4", 1);
        assert_eq!(once, "1.3.4");
        assert_eq!(remove_uid_segment(&once, 1), "1.4");
    }

    #[test]
    fn uid_trim_past_the_end_changes_nothing() {
        assert_eq!(remove_uid_segment("PAT123", 10), "PAT123");
        assert_eq!(remove_uid_segment("1.2", 2), "1.2");
    }

    #[test]
    fn nulling_skips_absent_fields() {
        let mut obj = empty_obj();
        null_fields(&mut obj);
        for field in tables::TO_NULL {
            assert!(!obj.has_element(field.tag));
        }
    }

    #[test]
    fn nulling_blanks_present_fields_in_place() {
        let mut obj = empty_obj();
        let tag = Tag(0x0040, 0x0254); // Performed Procedure Step Description
        obj.put_str(tag, VR::LO, "HEAD ROUTINE");

        null_fields(&mut obj);

        assert_eq!(obj.element_str(tag).as_deref(), Some(""));
        assert_eq!(obj.element_vr(tag), Some(VR::LO));
    }

    #[test]
    fn anonymization_writes_keyword_derived_placeholders() {
        let mut obj = empty_obj();
        obj.put_str(Tag(0x0008, 0x0080), VR::LO, "General Hospital");

        anonymize_fields(&mut obj);

        assert_eq!(
            obj.element_str(Tag(0x0008, 0x0080)).as_deref(),
            Some("AnonymousInstitutionName")
        );
        // Absent attributes are created with their placeholder as well.
        assert_eq!(
            obj.element_str(Tag(0x0008, 0x1010)).as_deref(),
            Some("AnonymousStationName")
        );
    }

    #[test]
    fn dataset_uid_trim_is_guarded_by_presence() {
        let mut obj = empty_obj();
        obj.put_str(
            Tag(0x0008, 0x0018),
            VR::UI,
            "1.2.826.0.1.3680043.2.1125.1.2.3",
        );

        trim_uids(&mut obj);

        assert_eq!(
            obj.element_str(Tag(0x0008, 0x0018)).as_deref(),
            Some("1.2.826.0.1.3680043.2.1125.2.3")
        );
        // Absent UID attributes stay absent.
        assert!(!obj.has_element(Tag(0x0020, 0x000D)));
    }

    #[test]
    fn private_block_erasure_leaves_other_fields_alone() {
        let mut obj = empty_obj();
        obj.put_str(Tag(0x0029, 0x0010), VR::LO, "SIEMENS CSA HEADER");
        obj.put_str(Tag(0x0008, 0x0060), VR::CS, "MR");

        erase_private_blocks(&mut obj);

        assert!(!obj.has_element(Tag(0x0029, 0x0010)));
        assert_eq!(obj.element_str(Tag(0x0008, 0x0060)).as_deref(), Some("MR"));
    }
}
