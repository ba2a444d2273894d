//! LLM-backed extraction. The service is untrusted: anything other than a
//! complete, well-typed JSON record is reported as an error so the caller can
//! fall back to heuristics.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::errors::ParserError;
use crate::extraction::prompts::{NO_REQUIREMENTS, RESUME_EXTRACT_PROMPT};
use crate::extraction::CandidateExtractor;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, MISSING_VALUES_INSTRUCTION};
use crate::llm_client::{parse_json_text, LlmClient, LlmError};
use crate::models::{EducationLevel, EducationRecord, ExtractedFields};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(job_requirements|filename|resume_text)\}")
        .expect("placeholder pattern is valid");
}

pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CandidateExtractor for LlmExtractor {
    async fn extract(
        &self,
        text: &str,
        filename: &str,
        job_requirements: &[String],
    ) -> Result<ExtractedFields, ParserError> {
        let prompt = build_prompt(text, filename, job_requirements);
        let response = self.llm.call(&prompt).await?;
        let body = response
            .text()
            .ok_or_else(|| ParserError::MalformedResponse("response has no text part".to_string()))?;
        parse_service_response(body)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(text: &str, filename: &str, job_requirements: &[String]) -> String {
    let requirements = if job_requirements.is_empty() {
        NO_REQUIREMENTS.to_string()
    } else {
        job_requirements.join(", ")
    };
    // One pass over the template, so values are never re-scanned for placeholders.
    let prompt = PLACEHOLDER.replace_all(RESUME_EXTRACT_PROMPT, |caps: &Captures| match &caps[1] {
        "job_requirements" => requirements.clone(),
        "filename" => filename.to_string(),
        _ => text.to_string(),
    });
    format!("{prompt}\n{MISSING_VALUES_INSTRUCTION}\n{JSON_ONLY_INSTRUCTION}")
}

/// Validates raw model output into `ExtractedFields`.
pub fn parse_service_response(body: &str) -> Result<ExtractedFields, ParserError> {
    let record: ServiceRecord = parse_json_text(body).map_err(|e| match e {
        LlmError::Parse(err) => ParserError::MalformedResponse(err.to_string()),
        LlmError::EmptyContent => ParserError::MalformedResponse("empty response".to_string()),
        other => ParserError::Service(other),
    })?;
    debug!(skills = record.skills.len(), "service record accepted");
    Ok(record.into())
}

// Wire shape of the service response. Every key is required; scalar values
// may arrive as strings, numbers or null.

#[derive(Debug, Deserialize)]
struct ServiceRecord {
    #[serde(deserialize_with = "lenient_string")]
    name: String,
    #[serde(deserialize_with = "lenient_string")]
    email: String,
    #[serde(deserialize_with = "lenient_string")]
    phone: String,
    skills: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    experience: String,
    education: ServiceEducation,
}

#[derive(Debug, Deserialize)]
struct ServiceEducation {
    tenth: ServiceLevel,
    twelfth: ServiceLevel,
}

#[derive(Debug, Deserialize)]
struct ServiceLevel {
    #[serde(deserialize_with = "lenient_string")]
    school: String,
    #[serde(deserialize_with = "lenient_string")]
    year: String,
    #[serde(deserialize_with = "lenient_string")]
    percentage: String,
}

impl From<ServiceLevel> for EducationLevel {
    fn from(level: ServiceLevel) -> Self {
        Self {
            school: level.school,
            year: level.year,
            percentage: level.percentage,
        }
    }
}

impl From<ServiceRecord> for ExtractedFields {
    fn from(record: ServiceRecord) -> Self {
        Self {
            name: record.name,
            email: record.email,
            phone: record.phone,
            skills: record.skills,
            experience: record.experience,
            education: EducationRecord {
                tenth: record.education.tenth.into(),
                twelfth: record.education.twelfth.into(),
            },
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555 123 4567",
        "skills": ["Python", "Django"],
        "experience": "5 years",
        "education": {
            "tenth": {"school": "St Marys High School", "year": "2012", "percentage": "92%"},
            "twelfth": {"school": "Delhi Public School", "year": 2014, "percentage": 88.5}
        }
    }"#;

    #[test]
    fn test_well_formed_response_is_accepted() {
        let fields = parse_service_response(WELL_FORMED).unwrap();
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.skills, vec!["Python", "Django"]);
        assert_eq!(fields.experience, "5 years");
        assert_eq!(fields.education.tenth.percentage, "92%");
    }

    #[test]
    fn test_numeric_scalars_are_normalized_to_strings() {
        let fields = parse_service_response(WELL_FORMED).unwrap();
        assert_eq!(fields.education.twelfth.year, "2014");
        assert_eq!(fields.education.twelfth.percentage, "88.5");
    }

    #[test]
    fn test_fenced_response_is_accepted() {
        let fenced = format!("```json\n{WELL_FORMED}\n```");
        assert!(parse_service_response(&fenced).is_ok());
    }

    #[test]
    fn test_null_scalar_becomes_empty() {
        let body = WELL_FORMED.replace(r#""phone": "+1 555 123 4567""#, r#""phone": null"#);
        let fields = parse_service_response(&body).unwrap();
        assert_eq!(fields.phone, "");
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let body = WELL_FORMED.replace(r#""experience": "5 years","#, "");
        let err = parse_service_response(&body).unwrap_err();
        assert!(matches!(err, ParserError::MalformedResponse(_)));
        assert!(err.to_string().contains("experience"));
    }

    #[test]
    fn test_missing_education_level_is_malformed() {
        let body = r#"{"name": "", "email": "", "phone": "", "skills": [], "experience": "",
            "education": {"tenth": {"school": "", "year": "", "percentage": ""}}}"#;
        assert!(matches!(
            parse_service_response(body),
            Err(ParserError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let body = WELL_FORMED.replace(r#"["Python", "Django"]"#, r#""Python, Django""#);
        assert!(matches!(
            parse_service_response(&body),
            Err(ParserError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_json_is_malformed() {
        assert!(matches!(
            parse_service_response("I could not read this resume."),
            Err(ParserError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_service_response(""),
            Err(ParserError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_prompt_substitutes_placeholders() {
        let prompt = build_prompt(
            "Jane Doe\nRust",
            "jane.pdf",
            &["rust".to_string(), "tokio".to_string()],
        );
        assert!(prompt.contains("Jane Doe\nRust"));
        assert!(prompt.contains("uploaded as: jane.pdf"));
        assert!(prompt.contains("requirements when present: rust, tokio"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_prompt_leaves_placeholders_inside_values() {
        let prompt = build_prompt(
            "resume body",
            "cv-{resume_text}.pdf",
            &["{filename} skills".to_string()],
        );
        assert!(prompt.contains("uploaded as: cv-{resume_text}.pdf"));
        assert!(prompt.contains("requirements when present: {filename} skills"));
        assert_eq!(prompt.matches("resume body").count(), 1);
    }

    #[test]
    fn test_prompt_leaves_placeholders_inside_resume_text() {
        let prompt = build_prompt("literal {filename} in resume", "cv.pdf", &[]);
        assert!(prompt.contains("literal {filename} in resume"));
        assert!(prompt.contains(NO_REQUIREMENTS));
    }
}
