//! Education extraction for the two school-leaving levels (10th and 12th standard).
//!
//! School, year and percentage are matched independently against the education
//! section; each pattern starts from a level token such as "10th" or "HSC".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::extraction::sections::EDUCATION_SECTION;
use crate::models::{EducationLevel, EducationRecord};

const TENTH_TOKENS: &str = r"10th|X|SSC|Secondary School Certificate";
const TWELFTH_TOKENS: &str = r"12th|XII|HSC|Higher Secondary Certificate";

const TENTH_SCHOOL_SUFFIXES: &str = r"School|College|Institution|Academy|High School";
const TWELFTH_SCHOOL_SUFFIXES: &str = r"School|College|Institution|Academy|Junior College";

/// The three patterns for one level.
struct LevelPatterns {
    school: Regex,
    year: Regex,
    percentage: Regex,
}

impl LevelPatterns {
    fn new(tokens: &str, school_suffixes: &str) -> Self {
        let lead = format!(r"(?i)\b(?:{tokens})\b.*?");
        let compile = |tail: &str| {
            Regex::new(&format!("{lead}{tail}")).expect("education patterns are valid")
        };
        Self {
            school: compile(&format!(
                r"(?:from|at|in)?\s*([A-Za-z0-9\s.]+(?:{school_suffixes}))"
            )),
            year: compile(r"([0-9]{4})"),
            percentage: compile(r"([0-9]+(?:\.[0-9]+)?%)"),
        }
    }

    fn extract(&self, section: &str) -> EducationLevel {
        EducationLevel {
            school: capture(&self.school, section),
            year: capture(&self.year, section),
            percentage: capture(&self.percentage, section),
        }
    }
}

lazy_static! {
    static ref TENTH: LevelPatterns = LevelPatterns::new(TENTH_TOKENS, TENTH_SCHOOL_SUFFIXES);
    static ref TWELFTH: LevelPatterns = LevelPatterns::new(TWELFTH_TOKENS, TWELFTH_SCHOOL_SUFFIXES);
}

pub fn extract_education(text: &str) -> EducationRecord {
    let section = EDUCATION_SECTION.locate(text);
    let record = EducationRecord {
        tenth: TENTH.extract(section),
        twelfth: TWELFTH.extract(section),
    };
    debug!(
        tenth_found = !record.tenth.is_empty(),
        twelfth_found = !record.twelfth.is_empty(),
        "education extracted"
    );
    record
}

fn capture(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDUCATION: &str = "Jane Doe\n\nEDUCATION\n\
        10th - St Marys High School, 2012, 92%\n\
        12th - Delhi Public School, 2014, 88.5%\n";

    #[test]
    fn test_both_levels_fully_extracted() {
        let record = extract_education(EDUCATION);

        assert_eq!(record.tenth.school, "St Marys High School");
        assert_eq!(record.tenth.year, "2012");
        assert_eq!(record.tenth.percentage, "92%");

        assert_eq!(record.twelfth.school, "Delhi Public School");
        assert_eq!(record.twelfth.year, "2014");
        assert_eq!(record.twelfth.percentage, "88.5%");
    }

    #[test]
    fn test_abbreviated_tokens() {
        let text = "SSC 2010 with 81%\nHSC 2012 with 76.4%\n";
        let record = extract_education(text);
        assert_eq!(record.tenth.year, "2010");
        assert_eq!(record.tenth.percentage, "81%");
        assert_eq!(record.twelfth.year, "2012");
        assert_eq!(record.twelfth.percentage, "76.4%");
    }

    #[test]
    fn test_fields_are_independent() {
        let text = "EDUCATION\n12th passed in 2015\n";
        let record = extract_education(text);
        assert_eq!(record.twelfth.year, "2015");
        assert_eq!(record.twelfth.percentage, "");
        assert_eq!(record.twelfth.school, "");
        assert!(record.tenth.is_empty());
    }

    #[test]
    fn test_roman_numeral_x_does_not_match_inside_words() {
        let text = "Experienced engineer. XII 2013 90%\n";
        let record = extract_education(text);
        assert!(record.tenth.is_empty());
        assert_eq!(record.twelfth.year, "2013");
        assert_eq!(record.twelfth.percentage, "90%");
    }

    #[test]
    fn test_no_education_yields_empty_record() {
        assert_eq!(extract_education(""), EducationRecord::default());
        assert_eq!(
            extract_education("Senior engineer, lots of Rust."),
            EducationRecord::default()
        );
    }
}
