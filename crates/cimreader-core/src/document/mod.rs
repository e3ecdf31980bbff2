//! Document-side domain types: the file picked for upload, the conversion
//! result it produces, and the server-side summary records.

mod file;
mod summary;

pub use file::{SelectedFile, PDF_MEDIA_TYPE};
pub use summary::{ConversionResult, SummaryRecord};
