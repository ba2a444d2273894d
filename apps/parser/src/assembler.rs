//! Record assembler: the one entry point callers use.
//!
//! text → extraction (optional primary backend, heuristic fallback) → scoring →
//! `CandidateRecord` with a fresh `candidateId`. Never returns an error: every
//! failure below this layer has a degraded result.

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::extraction::{CandidateExtractor, HeuristicExtractor};
use crate::models::{CandidateRecord, ExtractedFields};
use crate::pdf;
use crate::scoring::score_breakdown;

/// Source of `candidateId` values. Swappable so tests get stable ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `CAND-<unix-seconds>-<1000..=9999>`. Not unique under concurrent calls in the
/// same second; callers needing uniqueness should plug in their own generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdGenerator;

impl IdGenerator for SystemIdGenerator {
    fn next_id(&self) -> String {
        let seconds = chrono::Utc::now().timestamp();
        let suffix: u32 = rand::rng().random_range(1000..=9999);
        format!("CAND-{seconds}-{suffix}")
    }
}

#[derive(Clone)]
pub struct ResumeParser {
    primary: Option<Arc<dyn CandidateExtractor>>,
    heuristic: HeuristicExtractor,
    ids: Arc<dyn IdGenerator>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    /// Heuristic-only parser with the system id generator.
    pub fn new() -> Self {
        Self {
            primary: None,
            heuristic: HeuristicExtractor,
            ids: Arc::new(SystemIdGenerator),
        }
    }

    /// Tries `extractor` before the heuristics on every call.
    pub fn with_primary(mut self, extractor: Arc<dyn CandidateExtractor>) -> Self {
        self.primary = Some(extractor);
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Label of the backend tried first.
    pub fn primary_backend(&self) -> &'static str {
        self.primary
            .as_ref()
            .map_or(self.heuristic.backend(), |p| p.backend())
    }

    /// Decodes the PDF at `pdf_path` and parses it. An unreadable PDF parses as
    /// empty text.
    pub async fn parse_resume(
        &self,
        pdf_path: &Path,
        filename: &str,
        job_requirements: Option<&[String]>,
    ) -> CandidateRecord {
        let text = pdf::extract_text(pdf_path).await;
        self.parse_text(&text, filename, job_requirements).await
    }

    pub async fn parse_text(
        &self,
        text: &str,
        filename: &str,
        job_requirements: Option<&[String]>,
    ) -> CandidateRecord {
        let requirements = job_requirements.unwrap_or_default();
        let fields = self.extract(text, filename, requirements).await;

        let breakdown = score_breakdown(
            &fields.skills,
            &fields.experience,
            job_requirements.filter(|reqs| !reqs.is_empty()),
            Some(&fields.education).filter(|edu| edu.has_percentage()),
        );

        let candidate_id = self.ids.next_id();
        info!(
            candidate_id = %candidate_id,
            mode = %breakdown.mode,
            skills = fields.skills.len(),
            skill_points = breakdown.skill_points,
            experience_points = breakdown.experience_points,
            education_points = breakdown.education_points,
            match_score = breakdown.total,
            "Resume parsed"
        );

        CandidateRecord::from_fields(fields, candidate_id, breakdown.total)
    }

    async fn extract(&self, text: &str, filename: &str, requirements: &[String]) -> ExtractedFields {
        if let Some(primary) = self.primary.as_ref().filter(|_| !text.trim().is_empty()) {
            match primary.extract(text, filename, requirements).await {
                Ok(fields) => return fields,
                Err(e) => warn!(
                    backend = primary.backend(),
                    error = e.code(),
                    "Extraction backend failed, falling back to heuristics: {e}"
                ),
            }
        }

        crate::extraction::extract_fields(text, filename)
    }
}
