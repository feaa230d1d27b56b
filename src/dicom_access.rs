use dicom::core::value::PrimitiveValue;
use dicom::core::{DataElement, Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{DefaultDicomObject, InMemDicomObject};

/// Small helper trait so the redaction passes read and mutate different
/// DICOM object shapes the same way: absence is a value, never a fault.
pub trait ElementAccess {
    fn element_str(&self, tag: Tag) -> Option<String>;
    fn element_vr(&self, tag: Tag) -> Option<VR>;
    fn has_element(&self, tag: Tag) -> bool;
    /// Replace (or create) the element with a string value.
    fn put_str(&mut self, tag: Tag, vr: VR, value: &str);
    /// Blank the element's value, keeping its VR. Absent elements stay absent.
    fn clear_element(&mut self, tag: Tag);
    /// Remove the element; reports whether anything was removed.
    fn remove(&mut self, tag: Tag) -> bool;
}

impl ElementAccess for DefaultDicomObject {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| s.into_owned())
    }

    fn element_vr(&self, tag: Tag) -> Option<VR> {
        self.element(tag).ok().map(|e| e.header().vr)
    }

    fn has_element(&self, tag: Tag) -> bool {
        self.element(tag).is_ok()
    }

    fn put_str(&mut self, tag: Tag, vr: VR, value: &str) {
        self.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
    }

    fn clear_element(&mut self, tag: Tag) {
        if let Some(vr) = self.element_vr(tag) {
            self.put(DataElement::empty(tag, vr));
        }
    }

    fn remove(&mut self, tag: Tag) -> bool {
        self.remove_element(tag)
    }
}

impl ElementAccess for InMemDicomObject<StandardDataDictionary> {
    fn element_str(&self, tag: Tag) -> Option<String> {
        self.element(tag)
            .ok()
            .and_then(|e| e.to_str().ok())
            .map(|s| s.into_owned())
    }

    fn element_vr(&self, tag: Tag) -> Option<VR> {
        self.element(tag).ok().map(|e| e.header().vr)
    }

    fn has_element(&self, tag: Tag) -> bool {
        self.element(tag).is_ok()
    }

    fn put_str(&mut self, tag: Tag, vr: VR, value: &str) {
        self.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
    }

    fn clear_element(&mut self, tag: Tag) {
        if let Some(vr) = self.element_vr(tag) {
            self.put(DataElement::empty(tag, vr));
        }
    }

    fn remove(&mut self, tag: Tag) -> bool {
        self.remove_element(tag)
    }
}
