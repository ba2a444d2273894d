//! Resume field extraction and scoring.
//!
//! `ResumeParser` is the entry point: PDF or text in, `CandidateRecord` out.

pub mod assembler;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod models;
pub mod pdf;
pub mod scoring;

pub use assembler::{IdGenerator, ResumeParser, SystemIdGenerator};
pub use errors::ParserError;
pub use extraction::{CandidateExtractor, HeuristicExtractor, LlmExtractor};
pub use models::{CandidateRecord, EducationLevel, EducationRecord, ExtractedFields};
