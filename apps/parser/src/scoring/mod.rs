//! Scoring: converts extracted fields (plus optional job requirements) into a
//! bounded match score, reports skill coverage against a job, ranks candidates
//! and compares job postings.

pub mod jd_analyzer;
pub mod match_score;
pub mod similarity;
pub mod skill_match;

pub use jd_analyzer::{
    analyze_job_description, compare_jobs, ExperienceLevel, JobComparison, JobProfile,
};
pub use match_score::{calculate_match_score, score_breakdown, ScoreBreakdown, ScoringMode};
pub use similarity::similarity;
pub use skill_match::{match_skills, rank_candidates, RankedCandidate, SkillMatchReport};
