// All LLM prompt constants for the pathway module.

/// System instruction for pathway generation — enforces JSON-only output.
pub const PATHWAY_SYSTEM: &str =
    "You are an expert AI solutions architect for India's vocational skilling ecosystem. \
    Your role is to generate a personalized, adaptive learning path based on a learner's profile. \
    All recommendations must be relevant to the Indian context and aligned with NSQF/NCVET frameworks. \
    The pathway must be structured, multi-phased, and actionable, progressing from foundational to practical skills. \
    Mention specific NSQF levels where appropriate. \
    Recommendations should reflect current labor market demands in India. \
    You MUST provide the output ONLY in the specified JSON format and ensure all fields in the schema are present. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Pathway prompt template. Replace `{name}`, `{location}`, `{education}`,
/// `{skills}`, `{aspiration}` and `{language}` before sending.
pub const PATHWAY_PROMPT_TEMPLATE: &str = r#"Generate a personalized vocational skilling pathway for the following learner:
- Name: {name}
- Location (State): {location}
- Education: {education}
- Prior Skills: {skills}
- Career Aspiration: {aspiration}
- Preferred Language for Learning: {language}

The pathway should be detailed, actionable, and broken down into logical phases (e.g., Foundation, Specialization, Practical Application). For each step, provide a type, title, description, suggested NSQF level, and estimated duration."#;
