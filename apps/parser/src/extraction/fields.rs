//! Single-fact extractors: name, email, phone, experience.
//!
//! Every function is total: a missing match yields an empty string.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::sections::EXPERIENCE_SECTION;

/// Lines containing any of these are headers or contact lines, never a name.
const NAME_BLOCKLIST: &[&str] = &[
    "resume",
    "cv",
    "curriculum vitae",
    "email",
    "phone",
    "address",
];

/// How many leading lines may hold the candidate's name.
const NAME_SCAN_LINES: usize = 5;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is valid");
    static ref PHONE: Regex = Regex::new(
        r"(?:\+[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}"
    )
    .expect("phone pattern is valid");
    static ref EXPERIENCE: Regex =
        Regex::new(r"(?i)[0-9]+\+?\s*(?:years?|yrs?)\s*(?:of)?\s*experience")
            .expect("experience pattern is valid");
    static ref DOCUMENT_EXTENSION: Regex =
        Regex::new(r"(?i)\.(?:pdf|doc|docx)$").expect("extension pattern is valid");
}

/// Picks the first plausible name line from the top of the document, falling
/// back to a title-cased version of the file name.
pub fn extract_name(text: &str, filename: &str) -> String {
    let from_text = text
        .trim()
        .lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            !line.is_empty() && !NAME_BLOCKLIST.iter().any(|word| lower.contains(word))
        });

    match from_text {
        Some(line) => line.to_string(),
        None => name_from_filename(filename),
    }
}

/// "jane_doe-resume.PDF" → "Jane Doe Resume"
pub fn name_from_filename(filename: &str) -> String {
    let stem = DOCUMENT_EXTENSION.replace(filename, "");
    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn extract_email(text: &str) -> String {
    first_match(&EMAIL, text)
}

pub fn extract_phone(text: &str) -> String {
    first_match(&PHONE, text)
}

/// Returns the experience phrase verbatim, e.g. "5+ years of experience".
pub fn extract_experience(text: &str) -> String {
    first_match(&EXPERIENCE, EXPERIENCE_SECTION.locate(text))
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_first_clean_line() {
        let text = "\n  Jane Doe  \njane@example.com\n";
        assert_eq!(extract_name(text, "whatever.pdf"), "Jane Doe");
    }

    #[test]
    fn test_name_skips_blocklisted_lines() {
        let text = "RESUME\nEmail: jane@example.com\nJohn Smith\n";
        assert_eq!(extract_name(text, ""), "John Smith");
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "Resume\nCurriculum Vitae\nemail\nphone\naddress\nJohn Smith\n";
        assert_eq!(extract_name(text, "john_smith.pdf"), "John Smith");
        assert_eq!(extract_name(text, ""), "");
    }

    #[test]
    fn test_name_falls_back_to_filename() {
        assert_eq!(extract_name("", "jane_doe-resume.PDF"), "Jane Doe Resume");
        assert_eq!(extract_name("", "MARY-ann.docx"), "Mary Ann");
    }

    #[test]
    fn test_name_from_filename_keeps_other_extensions() {
        assert_eq!(name_from_filename("jane.txt"), "Jane.txt");
    }

    #[test]
    fn test_name_empty_when_everything_missing() {
        assert_eq!(extract_name("", ""), "");
        assert_eq!(extract_name("   \n  ", ".pdf"), "");
    }

    #[test]
    fn test_email_first_match() {
        let text = "Contact: jane.doe+jobs@mail.example.co.uk or jd@other.org";
        assert_eq!(extract_email(text), "jane.doe+jobs@mail.example.co.uk");
    }

    #[test]
    fn test_email_missing() {
        assert_eq!(extract_email("no contact here @ all"), "");
    }

    #[test]
    fn test_phone_with_country_code_and_parens() {
        assert_eq!(
            extract_phone("Phone: +1 (555) 123-4567"),
            "+1 (555) 123-4567"
        );
    }

    #[test]
    fn test_phone_plain_and_dotted() {
        assert_eq!(extract_phone("call 555.123.4567 today"), "555.123.4567");
        assert_eq!(extract_phone("mobile 9876543210"), "9876543210");
    }

    #[test]
    fn test_phone_missing() {
        assert_eq!(extract_phone("Born in 1990, ZIP 12345"), "");
    }

    #[test]
    fn test_experience_phrase_verbatim() {
        let text = "EXPERIENCE\nBackend engineer, 5+ Years of Experience in fintech\n";
        assert_eq!(extract_experience(text), "5+ Years of Experience");
    }

    #[test]
    fn test_experience_short_form() {
        assert_eq!(extract_experience("3 yrs experience with Go"), "3 yrs experience");
    }

    #[test]
    fn test_experience_missing() {
        assert_eq!(extract_experience("Worked at Acme since 2019"), "");
    }
}
