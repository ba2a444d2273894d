//! Section Locator: narrows a resume down to the text under a known header.
//!
//! A header is a line holding nothing but one of the keywords (case-insensitive).
//! When no header line is present the whole document is searched instead.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

pub const SKILLS_HEADERS: &[&str] = &["SKILLS", "TECHNICAL SKILLS", "CORE COMPETENCIES"];

pub const EXPERIENCE_HEADERS: &[&str] = &["EXPERIENCE", "WORK EXPERIENCE", "EMPLOYMENT HISTORY"];

pub const EDUCATION_HEADERS: &[&str] = &[
    "EDUCATION",
    "QUALIFICATION",
    "ACADEMIC",
    "EDUCATIONAL BACKGROUND",
];

lazy_static! {
    pub static ref SKILLS_SECTION: SectionLocator = SectionLocator::new("skills", SKILLS_HEADERS);
    pub static ref EXPERIENCE_SECTION: SectionLocator =
        SectionLocator::new("experience", EXPERIENCE_HEADERS);
    pub static ref EDUCATION_SECTION: SectionLocator =
        SectionLocator::new("education", EDUCATION_HEADERS);
}

/// Finds the subsection that follows one of a fixed set of header lines.
pub struct SectionLocator {
    label: &'static str,
    header_line: Regex,
}

impl SectionLocator {
    pub fn new(label: &'static str, headers: &[&str]) -> Self {
        let mut keywords: Vec<String> = headers.iter().map(|h| regex::escape(h)).collect();
        // Longer variants first so "WORK EXPERIENCE" is not shadowed by "EXPERIENCE".
        keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));
        let pattern = format!(r"(?im)^[ \t]*(?:{})[ \t]*\r?$", keywords.join("|"));
        Self {
            label,
            header_line: Regex::new(&pattern).expect("header keywords are escaped literals"),
        }
    }

    /// Returns the text between the first header line and the next one of the
    /// same set. Falls back to `text` when there is no header or the section is blank.
    pub fn locate<'a>(&self, text: &'a str) -> &'a str {
        let mut headers = self.header_line.find_iter(text);
        let Some(first) = headers.next() else {
            debug!(section = self.label, "no header found, searching whole document");
            return text;
        };

        let end = headers.next().map(|m| m.start()).unwrap_or(text.len());
        let section = &text[first.end()..end];
        if section.trim().is_empty() {
            debug!(section = self.label, "header found but section is blank");
            return text;
        }

        debug!(
            section = self.label,
            offset = first.start(),
            len = section.len(),
            "section located"
        );
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_returns_full_text() {
        let text = "Jane Doe\nPython developer with Django background\n";
        assert_eq!(SKILLS_SECTION.locate(text), text);
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        let text = "Jane Doe\n\nSKILLS\nPython, Docker\nGit\n";
        assert_eq!(SKILLS_SECTION.locate(text).trim(), "Python, Docker\nGit");
    }

    #[test]
    fn test_header_match_is_case_insensitive_and_allows_indent() {
        let text = "Intro line\n   Technical Skills  \nRust, Go\n";
        assert_eq!(SKILLS_SECTION.locate(text).trim(), "Rust, Go");
    }

    #[test]
    fn test_header_on_first_line_is_found() {
        let text = "EDUCATION\n10th - St Marys High School\n";
        assert_eq!(
            EDUCATION_SECTION.locate(text).trim(),
            "10th - St Marys High School"
        );
    }

    #[test]
    fn test_section_stops_at_next_header_of_same_set() {
        let text = "EXPERIENCE\n3 years of experience at Acme\nWORK EXPERIENCE\nOlder roles\n";
        assert_eq!(
            EXPERIENCE_SECTION.locate(text).trim(),
            "3 years of experience at Acme"
        );
    }

    #[test]
    fn test_inline_keyword_is_not_a_header() {
        let text = "Skills: Python, Rust.\nMore text\n";
        assert_eq!(SKILLS_SECTION.locate(text), text);
    }

    #[test]
    fn test_blank_section_falls_back_to_full_text() {
        let text = "Jane Doe\nPython\nSKILLS\n   \n";
        assert_eq!(SKILLS_SECTION.locate(text), text);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Jane\r\nSKILLS\r\nPython\r\n";
        assert_eq!(SKILLS_SECTION.locate(text).trim(), "Python");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(EDUCATION_SECTION.locate(""), "");
    }
}
