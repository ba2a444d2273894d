//! Skill match report: which required skills a candidate covers and which are missing,
//! and a ranking of several candidates against one requirement list.

use serde::Serialize;

use crate::models::CandidateRecord;

/// Bigram (Sørensen–Dice) score a pair of skill names must exceed to count as a match.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillMatchReport {
    /// Percentage of required skills covered, 0 – 100.
    pub match_score: u32,
    /// Candidate skills that cover at least one requirement.
    pub matched: Vec<String>,
    /// Requirements no candidate skill covers.
    pub missing: Vec<String>,
}

/// One row of a candidate ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

fn covers(skill: &str, requirement: &str) -> bool {
    let skill = skill.to_lowercase();
    let requirement = requirement.to_lowercase();
    skill == requirement || strsim::sorensen_dice(&skill, &requirement) > SIMILARITY_THRESHOLD
}

pub fn match_skills(candidate_skills: &[String], required: &[String]) -> SkillMatchReport {
    if required.is_empty() {
        return SkillMatchReport {
            match_score: 0,
            matched: vec![],
            missing: vec![],
        };
    }

    let matched: Vec<String> = candidate_skills
        .iter()
        .filter(|skill| required.iter().any(|req| covers(skill, req)))
        .cloned()
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|req| !candidate_skills.iter().any(|skill| covers(skill, req)))
        .cloned()
        .collect();

    let covered = required.len() - missing.len();
    let match_score = (covered as f64 / required.len() as f64 * 100.0).round() as u32;

    SkillMatchReport {
        match_score,
        matched,
        missing,
    }
}

/// Scores every record against `required`, best coverage first. Ties keep input order.
pub fn rank_candidates(records: &[CandidateRecord], required: &[String]) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = records
        .iter()
        .map(|record| {
            let report = match_skills(&record.skills, required);
            RankedCandidate {
                candidate_id: record.candidate_id.clone(),
                name: record.name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone(),
                match_score: report.match_score,
                matched_skills: report.matched,
                missing_skills: report.missing,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
