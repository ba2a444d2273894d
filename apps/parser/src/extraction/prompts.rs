// Resume extraction prompt for the LLM backend.
// Placeholders: {resume_text}, {filename}, {job_requirements}.

pub const RESUME_EXTRACT_PROMPT: &str = r#"You are a resume parser API. Extract the following information from the resume text below:

1. Full name
2. Email address
3. Phone number
4. Skills (as a list)
5. Experience (duration, e.g. "2 years")
6. Education details, particularly 10th and 12th standard information:
   - School name
   - Year
   - Percentage/CGPA

Format the output as a JSON object with EXACTLY this structure:
{
  "name": "Extracted name",
  "email": "Extracted email",
  "phone": "Extracted phone",
  "skills": ["Skill 1", "Skill 2"],
  "experience": "Experience duration (e.g., 2 years)",
  "education": {
    "tenth": {"school": "School name", "year": "Year of completion", "percentage": "Percentage or CGPA"},
    "twelfth": {"school": "School name", "year": "Year of completion", "percentage": "Percentage or CGPA"}
  }
}

Extract the most relevant skills even if they are not explicitly listed under a "Skills" section.
Prefer skills relevant to these job requirements when present: {job_requirements}

The document was uploaded as: {filename}
If the resume text does not contain the candidate's name, derive it from the file name.

Resume text:
{resume_text}
"#;

/// Substituted for `{job_requirements}` when the caller supplied none.
pub const NO_REQUIREMENTS: &str = "(none provided)";
