//! Request builder — turns a validated profile into a provider call.

use serde_json::{json, Value};

use crate::llm_client::CompletionRequest;
use crate::models::pathway::StepType;
use crate::models::profile::LearnerProfile;
use crate::pathway::prompts::{PATHWAY_PROMPT_TEMPLATE, PATHWAY_SYSTEM};

/// Fixed sampling temperature for pathway generation. Moderate randomness:
/// plans should vary in content across calls, never in structure.
pub const TEMPERATURE: f32 = 0.7;

/// Builds the completion request for a validated profile.
/// Pure; every profile field is embedded verbatim in the prompt.
pub fn build_request(profile: &LearnerProfile) -> CompletionRequest {
    let prompt = PATHWAY_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{location}", &profile.location)
        .replace("{education}", &profile.education)
        .replace("{skills}", &profile.skills)
        .replace("{aspiration}", &profile.aspiration)
        .replace("{language}", &profile.language);

    CompletionRequest {
        prompt,
        system: PATHWAY_SYSTEM.to_string(),
        response_schema: response_schema(),
        temperature: TEMPERATURE,
    }
}

/// The schema descriptor sent with every request, mirroring the pathway
/// data model exactly. A hint for the provider only — the decoder
/// re-validates the payload independently.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pathwayTitle": {
                "type": "STRING",
                "description": "A catchy title for the entire learning path for the user."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief, encouraging summary of the generated pathway for the learner."
            },
            "phases": {
                "type": "ARRAY",
                "description": "The learning path broken down into distinct phases.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "phaseTitle": {
                            "type": "STRING",
                            "description": "Title of the phase, e.g., 'Phase 1: Foundational Skills'."
                        },
                        "phaseDescription": {
                            "type": "STRING",
                            "description": "A short description of the goal of this phase."
                        },
                        "steps": {
                            "type": "ARRAY",
                            "description": "A list of steps within this phase.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "stepType": {
                                        "type": "STRING",
                                        "enum": StepType::ALL,
                                        "description": "Type of learning activity."
                                    },
                                    "title": {
                                        "type": "STRING",
                                        "description": "Title of the course, certification, or activity."
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "Brief description of what the step entails and its importance."
                                    },
                                    "nsqfLevel": {
                                        "type": "STRING",
                                        "description": "Suggested NSQF Level for this step, e.g., 'Level 4'. Use 'N/A' if not applicable."
                                    },
                                    "duration": {
                                        "type": "STRING",
                                        "description": "Estimated duration to complete the step, e.g., '4 weeks', '3 months'."
                                    }
                                },
                                "required": ["stepType", "title", "description", "nsqfLevel", "duration"]
                            }
                        }
                    },
                    "required": ["phaseTitle", "phaseDescription", "steps"]
                }
            }
        },
        "required": ["pathwayTitle", "summary", "phases"]
    })
}
