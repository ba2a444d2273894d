pub mod candidate;

pub use candidate::{CandidateRecord, EducationLevel, EducationRecord, ExtractedFields};
