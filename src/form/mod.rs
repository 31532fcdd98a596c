//! Form state: the field catalogue and the editable parameter record.

pub mod field;
pub mod params;

pub use field::{Domain, Field};
pub use params::{coerce, PatientParameters};
