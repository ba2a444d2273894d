//! Match score: a bounded 0–100 summary of skills, experience and education.
//!
//! Two formulas are kept side by side:
//!
//! Weighted (requirements and/or education supplied):
//! 1. skills, max 60: mean requirement strength × 60, where strength is 1.0 for a
//!    substring match either way and otherwise the best similarity ratio;
//!    without requirements, 5 points per skill
//! 2. experience, max 30: 6 points per year
//! 3. education, max 10: percentage / 20 per level, max 5 each
//!
//! Legacy (neither supplied): 5 points per skill (max 50) + 10 per year (max 50).

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::models::EducationRecord;
use crate::scoring::similarity::similarity;

pub const MAX_SCORE: u32 = 100;

const WEIGHTED_SKILL_MAX: f64 = 60.0;
const WEIGHTED_POINTS_PER_SKILL: u64 = 5;
/// Used when requirements were supplied but the list is empty.
const EMPTY_REQUIREMENTS_SKILL_POINTS: u64 = 30;
const WEIGHTED_EXPERIENCE_MAX: u64 = 30;
const WEIGHTED_POINTS_PER_YEAR: u64 = 6;
const EDUCATION_LEVEL_MAX: f64 = 5.0;
const PERCENTAGE_DIVISOR: f64 = 20.0;

const LEGACY_SKILL_MAX: u64 = 50;
const LEGACY_POINTS_PER_SKILL: u64 = 5;
const LEGACY_EXPERIENCE_MAX: u64 = 50;
const LEGACY_POINTS_PER_YEAR: u64 = 10;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"[0-9]+").expect("integer pattern is valid");
    static ref DECIMAL: Regex =
        Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("decimal pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Legacy,
    Weighted,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Legacy => write!(f, "legacy"),
            ScoringMode::Weighted => write!(f, "weighted"),
        }
    }
}

/// Per-component points, kept for logging and for callers that want to explain a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub mode: ScoringMode,
    pub skill_points: u64,
    pub experience_points: u64,
    pub education_points: f64,
    pub total: u32,
}

/// Scores a candidate. Passing neither requirements nor education selects the
/// legacy formula.
pub fn calculate_match_score(
    skills: &[String],
    experience: &str,
    job_requirements: Option<&[String]>,
    education: Option<&EducationRecord>,
) -> u32 {
    score_breakdown(skills, experience, job_requirements, education).total
}

pub fn score_breakdown(
    skills: &[String],
    experience: &str,
    job_requirements: Option<&[String]>,
    education: Option<&EducationRecord>,
) -> ScoreBreakdown {
    let years = first_integer(experience);

    let (mode, skill_points, experience_points, education_points) =
        if job_requirements.is_none() && education.is_none() {
            (
                ScoringMode::Legacy,
                (skills.len() as u64 * LEGACY_POINTS_PER_SKILL).min(LEGACY_SKILL_MAX),
                years.map_or(0, |y| {
                    y.saturating_mul(LEGACY_POINTS_PER_YEAR)
                        .min(LEGACY_EXPERIENCE_MAX)
                }),
                0.0,
            )
        } else {
            (
                ScoringMode::Weighted,
                weighted_skill_points(skills, job_requirements),
                years.map_or(0, |y| {
                    y.saturating_mul(WEIGHTED_POINTS_PER_YEAR)
                        .min(WEIGHTED_EXPERIENCE_MAX)
                }),
                education.map_or(0.0, education_bonus),
            )
        };

    let raw = (skill_points + experience_points) as f64 + education_points;
    let total = raw.clamp(0.0, MAX_SCORE as f64).round() as u32;

    ScoreBreakdown {
        mode,
        skill_points,
        experience_points,
        education_points,
        total,
    }
}

fn weighted_skill_points(skills: &[String], job_requirements: Option<&[String]>) -> u64 {
    if skills.is_empty() {
        return 0;
    }
    match job_requirements {
        Some([]) => EMPTY_REQUIREMENTS_SKILL_POINTS,
        Some(requirements) => {
            let total_strength: f64 = requirements
                .iter()
                .map(|req| requirement_strength(req, skills))
                .sum();
            (total_strength / requirements.len() as f64 * WEIGHTED_SKILL_MAX) as u64
        }
        None => (skills.len() as u64 * WEIGHTED_POINTS_PER_SKILL).min(WEIGHTED_SKILL_MAX as u64),
    }
}

/// 1.0 when the requirement and some skill contain one another, otherwise the
/// best similarity ratio across all skills.
pub fn requirement_strength(requirement: &str, skills: &[String]) -> f64 {
    let req = requirement.to_lowercase();
    let mut best = 0.0_f64;
    for skill in skills {
        let skill = skill.to_lowercase();
        if skill.contains(&req) || req.contains(&skill) {
            return 1.0;
        }
        best = best.max(similarity(&req, &skill));
    }
    best
}

fn education_bonus(education: &EducationRecord) -> f64 {
    [&education.tenth.percentage, &education.twelfth.percentage]
        .into_iter()
        .filter_map(|p| percentage_value(p))
        .map(|p| (p / PERCENTAGE_DIVISOR).min(EDUCATION_LEVEL_MAX))
        .sum()
}

/// First run of digits in `text`. Runs too long for u64 saturate.
fn first_integer(text: &str) -> Option<u64> {
    INTEGER
        .find(text)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
}

/// First decimal number in a percentage string such as "88.5%" or "CGPA 9.1".
fn percentage_value(text: &str) -> Option<f64> {
    DECIMAL
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
