//
// tables.rs
// dicom-scrub
//
// The redaction tables: which attributes get nulled, anonymized, trimmed, or erased.
//

use dicom::core::{Tag, VR};

/// A public attribute addressed by keyword and tag.
pub struct NamedField {
    pub keyword: &'static str,
    pub tag: Tag,
    pub vr: VR,
}

/// Attributes whose values are blanked outright.
pub const TO_NULL: &[NamedField] = &[
    NamedField {
        keyword: "ReferringPhysicianName",
        tag: Tag(0x0008, 0x0090),
        vr: VR::PN,
    },
    NamedField {
        keyword: "ReferencedImageSequence",
        tag: Tag(0x0008, 0x1140),
        vr: VR::SQ,
    },
    NamedField {
        keyword: "PerformedProcedureStepDescription",
        tag: Tag(0x0040, 0x0254),
        vr: VR::LO,
    },
];

/// Attributes replaced by an `Anonymous` + keyword placeholder.
pub const TO_ANONYMIZE: &[NamedField] = &[
    NamedField {
        keyword: "InstitutionName",
        tag: Tag(0x0008, 0x0080),
        vr: VR::LO,
    },
    NamedField {
        keyword: "InstitutionAddress",
        tag: Tag(0x0008, 0x0081),
        vr: VR::ST,
    },
    NamedField {
        keyword: "StationName",
        tag: Tag(0x0008, 0x1010),
        vr: VR::SH,
    },
    NamedField {
        keyword: "StudyDescription",
        tag: Tag(0x0008, 0x1030),
        vr: VR::LO,
    },
    NamedField {
        keyword: "InstitutionalDepartmentName",
        tag: Tag(0x0008, 0x1040),
        vr: VR::LO,
    },
];

/// UID-bearing attributes and the zero-based dot-segment each loses.
pub const UIDS_TO_TRIM: &[(NamedField, usize)] = &[
    // Media Storage SOP Instance UID lives in the file meta group, so this
    // dataset entry never matches; the file meta pass handles it.
    (
        NamedField {
            keyword: "MediaStorageSOPInstanceUID",
            tag: Tag(0x0002, 0x0003),
            vr: VR::UI,
        },
        8,
    ),
    (
        NamedField {
            keyword: "SOPInstanceUID",
            tag: Tag(0x0008, 0x0018),
            vr: VR::UI,
        },
        8,
    ),
    (
        NamedField {
            keyword: "PatientID",
            tag: Tag(0x0010, 0x0020),
            vr: VR::LO,
        },
        10,
    ),
    (
        NamedField {
            keyword: "StudyInstanceUID",
            tag: Tag(0x0020, 0x000D),
            vr: VR::UI,
        },
        8,
    ),
    (
        NamedField {
            keyword: "SeriesInstanceUID",
            tag: Tag(0x0020, 0x000E),
            vr: VR::UI,
        },
        8,
    ),
    (
        NamedField {
            keyword: "FrameOfReferenceUID",
            tag: Tag(0x0020, 0x0052),
            vr: VR::UI,
        },
        8,
    ),
];

/// Segment index removed from the file-meta Media Storage SOP Instance UID.
pub const META_SOP_INSTANCE_TRIM_INDEX: usize = 8;

/// Siemens CSA header blocks plus the large DTI tensor block.
pub const PRIVATE_BLOCKS: &[Tag] = &[
    Tag(0x0029, 0x0010),
    Tag(0x0029, 0x0011),
    Tag(0x0029, 0x0012),
    Tag(0x0029, 0x1008),
    Tag(0x0029, 0x1009),
    Tag(0x0029, 0x1010),
    Tag(0x0029, 0x1018),
    Tag(0x0029, 0x1019),
    Tag(0x0029, 0x1020),
    Tag(0x0029, 0x1110),
    Tag(0x0029, 0x1120),
    Tag(0x0029, 0x1220),
    Tag(0x7FE1, 0x0010),
    Tag(0x7FE1, 0x1010), // Large DTI tensor data
];

/// The bulk pixel payload.
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
