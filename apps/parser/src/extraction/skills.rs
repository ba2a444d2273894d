//! Skill extraction: a fixed vocabulary scan over the skills section, plus any
//! inline "Skills: a, b, c." list found anywhere in the document.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::extraction::sections::SKILLS_SECTION;

/// Canonical skill vocabulary, matched as lower-case substrings.
/// Order is significant: results follow it.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node.js",
    "python",
    "java",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "leadership",
    "communication",
    "problem solving",
    "project management",
    "next.js",
    "express",
    "mongodb",
    "postgresql",
    "redis",
    "graphql",
    "rest api",
    "ci/cd",
    "jenkins",
    "github actions",
    "terraform",
    "cloud computing",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "testing",
    "unit testing",
    "integration testing",
    "automation",
    "devops",
    "html",
    "css",
];

/// Returned when nothing at all is found, so a record always carries skills.
pub const DEFAULT_SKILLS: &[&str] = &["JavaScript", "React", "Node.js"];

lazy_static! {
    static ref INLINE_SKILL_LIST: Regex =
        Regex::new(r"(?i)(?:skills|technical skills|core competencies):\s*([^.]+)")
            .expect("inline skill list pattern is valid");
}

pub fn extract_skills(text: &str) -> Vec<String> {
    let section = SKILLS_SECTION.locate(text).to_lowercase();

    let mut found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| section.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();
    let from_vocabulary = found.len();

    for skill in inline_skill_list(text) {
        if !found.contains(&skill) {
            found.push(skill);
        }
    }

    debug!(
        vocabulary = from_vocabulary,
        inline = found.len() - from_vocabulary,
        "skills extracted"
    );

    if found.is_empty() {
        return DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    found
}

/// Comma-separated items of the first inline skill list, up to its first period.
fn inline_skill_list(text: &str) -> Vec<String> {
    INLINE_SKILL_LIST
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|list| {
            list.as_str()
                .split(',')
                .map(|item| item.trim().to_lowercase())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
