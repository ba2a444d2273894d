//! Job description analyzer: turns a free-text job posting into a required-skill
//! list plus a few coarse role signals. Keyword based, no LLM call.

use serde::Serialize;

/// Technology vocabulary matched against job descriptions, in reporting order.
pub const JOB_SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "vue",
    "angular",
    "node",
    "express",
    "python",
    "django",
    "flask",
    "java",
    "spring",
    "c#",
    ".net",
    "php",
    "laravel",
    "ruby",
    "rails",
    "golang",
    "rust",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "nosql",
    "redis",
    "graphql",
    "rest",
    "html",
    "css",
    "sass",
    "less",
    "tailwind",
    "bootstrap",
    "material-ui",
    "git",
    "ci/cd",
    "jenkins",
    "github actions",
    "agile",
    "scrum",
    "jira",
    "figma",
    "adobe xd",
    "sketch",
    "photoshop",
    "illustrator",
    "ui",
    "ux",
    "responsive design",
    "mobile development",
    "react native",
    "flutter",
    "swift",
    "kotlin",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ai",
    "data science",
    "data analysis",
    "data visualization",
    "power bi",
    "tableau",
    "devops",
    "sre",
    "security",
    "penetration testing",
    "ethical hacking",
];

const SENIOR_MARKERS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "5+ years",
    "7+ years",
    "10+ years",
];
const ENTRY_MARKERS: &[&str] = &[
    "junior",
    "entry",
    "graduate",
    "0-2 years",
    "1-2 years",
];
const EDUCATION_MARKERS: &[&str] = &["degree", "bachelor", "master", "phd", "diploma"];
const REMOTE_MARKERS: &[&str] = &["remote", "work from home", "telecommute", "virtual", "wfh"];

const SKILL_OVERLAP_WEIGHT: f64 = 0.7;
const LEVEL_MATCH_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobProfile {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub education_required: bool,
    pub remote_option: bool,
}

pub fn analyze_job_description(text: &str) -> JobProfile {
    let text = text.to_lowercase();
    let mentions_any = |markers: &[&str]| markers.iter().any(|m| text.contains(m));

    let experience_level = if mentions_any(SENIOR_MARKERS) {
        ExperienceLevel::Senior
    } else if mentions_any(ENTRY_MARKERS) {
        ExperienceLevel::Entry
    } else {
        ExperienceLevel::Mid
    };

    JobProfile {
        skills: extract_job_skills(&text),
        experience_level,
        education_required: mentions_any(EDUCATION_MARKERS),
        remote_option: mentions_any(REMOTE_MARKERS),
    }
}

/// How alike two postings are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobComparison {
    /// 0 – 100: 70% skill overlap, 30% same experience level.
    pub similarity_score: u32,
    /// Skills of the first posting also required by the second, in its order.
    pub common_skills: Vec<String>,
}

pub fn compare_jobs(first: &JobProfile, second: &JobProfile) -> JobComparison {
    let common_skills: Vec<String> = first
        .skills
        .iter()
        .filter(|skill| second.skills.contains(skill))
        .cloned()
        .collect();

    let widest = first.skills.len().max(second.skills.len()).max(1);
    let overlap = common_skills.len() as f64 / widest as f64;
    let level_match = if first.experience_level == second.experience_level {
        1.0
    } else {
        0.0
    };

    let similarity_score =
        ((overlap * SKILL_OVERLAP_WEIGHT + level_match * LEVEL_MATCH_WEIGHT) * 100.0).round() as u32;

    JobComparison {
        similarity_score,
        common_skills,
    }
}

/// Vocabulary terms mentioned anywhere in `text` (case-insensitive substring).
pub fn extract_job_skills(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    JOB_SKILL_VOCABULARY
        .iter()
        .filter(|skill| text.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}
