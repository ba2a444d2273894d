use serde::{Deserialize, Serialize};

/// One level of schooling (10th or 12th standard). Absent facts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationLevel {
    pub school: String,
    pub year: String,
    pub percentage: String,
}

impl EducationLevel {
    pub fn is_empty(&self) -> bool {
        self.school.is_empty() && self.year.is_empty() && self.percentage.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub tenth: EducationLevel,
    pub twelfth: EducationLevel,
}

impl EducationRecord {
    /// True when at least one level carries a percentage, i.e. there is an
    /// education signal worth scoring.
    pub fn has_percentage(&self) -> bool {
        !self.tenth.percentage.trim().is_empty() || !self.twelfth.percentage.trim().is_empty()
    }
}

/// Facts pulled out of a resume by any extraction backend, before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: EducationRecord,
}

/// The parser's output: extracted fields plus an identifier and a 0–100 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: EducationRecord,
    pub candidate_id: String,
    pub match_score: u32,
}

impl CandidateRecord {
    pub fn from_fields(fields: ExtractedFields, candidate_id: String, match_score: u32) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            skills: fields.skills,
            experience: fields.experience,
            education: fields.education,
            candidate_id,
            match_score,
        }
    }
}
