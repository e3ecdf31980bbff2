//! The file a user selected for conversion.

/// Media type the backend accepts for upload.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file chosen for conversion, held in memory until upload.
///
/// Created on user selection and invalidated on re-selection or on a
/// successful conversion. The declared media type is what the picker
/// reported, not a sniffed value; the workflow rejects anything that is
/// not `application/pdf` before it can reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name, also used as the document title after upload.
    pub name: String,
    /// Declared media type (e.g. `application/pdf`).
    pub media_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Creates a candidate file. No validation happens here; the workflow
    /// decides acceptance.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Whether the declared media type is the accepted PDF type.
    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}
