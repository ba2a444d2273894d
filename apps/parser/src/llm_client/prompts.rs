// Shared prompt fragments.
// Task-specific prompts live next to their caller (see extraction/prompts.rs).

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond ONLY with the JSON object and no additional text. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Tells the model how to represent facts it cannot find.
pub const MISSING_VALUES_INSTRUCTION: &str = "\
    If you can't find specific information, use empty strings or empty arrays \
    for those fields. Never omit a key and never use null.";
