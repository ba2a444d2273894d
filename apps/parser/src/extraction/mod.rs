//! Field extraction: pluggable, trait-based backends that turn resume text into
//! `ExtractedFields`.
//!
//! Default: `HeuristicExtractor` (regex and vocabulary rules, never fails).
//! Optional: `LlmExtractor` (Gemini), tried first by `ResumeParser` when configured.

use async_trait::async_trait;

use crate::errors::ParserError;
use crate::models::ExtractedFields;

pub mod education;
pub mod fields;
pub mod llm;
pub mod prompts;
pub mod sections;
pub mod skills;

pub use llm::LlmExtractor;

/// The extractor trait. Implement this to add a backend without touching the
/// record assembler or its callers.
#[async_trait]
pub trait CandidateExtractor: Send + Sync {
    async fn extract(
        &self,
        text: &str,
        filename: &str,
        job_requirements: &[String],
    ) -> Result<ExtractedFields, ParserError>;

    /// Short label for logs: "heuristic" | "llm".
    fn backend(&self) -> &'static str;
}

/// Rule-based extraction over the decoded text. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

#[async_trait]
impl CandidateExtractor for HeuristicExtractor {
    async fn extract(
        &self,
        text: &str,
        filename: &str,
        _job_requirements: &[String],
    ) -> Result<ExtractedFields, ParserError> {
        Ok(extract_fields(text, filename))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Runs every field extractor over `text`. Empty text yields empty fields and
/// the default skill list.
pub fn extract_fields(text: &str, filename: &str) -> ExtractedFields {
    ExtractedFields {
        name: fields::extract_name(text, filename),
        email: fields::extract_email(text),
        phone: fields::extract_phone(text),
        skills: skills::extract_skills(text),
        experience: fields::extract_experience(text),
        education: education::extract_education(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | +1 (555) 123-4567\n\
        \n\
        SKILLS\n\
        Python, Docker, Git\n\
        \n\
        EXPERIENCE\n\
        Backend Engineer with 4 years of experience building services.\n\
        \n\
        EDUCATION\n\
        10th - St Marys High School, 2012, 92%\n\
        12th - Delhi Public School, 2014, 88.5%\n";

    #[test]
    fn test_extract_fields_full_resume() {
        let fields = extract_fields(RESUME, "jane_doe.pdf");

        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane.doe@example.com");
        assert_eq!(fields.phone, "+1 (555) 123-4567");
        assert_eq!(fields.skills, vec!["python", "docker", "git"]);
        assert_eq!(fields.experience, "4 years of experience");
        assert_eq!(fields.education.tenth.school, "St Marys High School");
        assert_eq!(fields.education.twelfth.percentage, "88.5%");
    }

    #[test]
    fn test_extract_fields_empty_text_degrades() {
        let fields = extract_fields("", "");
        assert_eq!(fields.name, "");
        assert_eq!(fields.email, "");
        assert_eq!(fields.phone, "");
        assert_eq!(fields.experience, "");
        assert_eq!(fields.skills, vec!["JavaScript", "React", "Node.js"]);
        assert!(fields.education.tenth.is_empty());
        assert!(fields.education.twelfth.is_empty());
    }

    #[test]
    fn test_extract_fields_is_idempotent() {
        assert_eq!(
            extract_fields(RESUME, "jane_doe.pdf"),
            extract_fields(RESUME, "jane_doe.pdf")
        );
    }

    #[tokio::test]
    async fn test_heuristic_backend_never_fails() {
        let extractor = HeuristicExtractor;
        let fields = extractor
            .extract("\u{0}\u{1}garbage%%%", "scan.pdf", &[])
            .await
            .unwrap();
        assert_eq!(fields.name, "\u{0}\u{1}garbage%%%");
        assert!(!fields.skills.is_empty());
        assert_eq!(extractor.backend(), "heuristic");
    }
}
