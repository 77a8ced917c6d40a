//! Response decoder — strict validation of the provider payload.
//!
//! The response schema sent with the request is a hint, not a contract:
//! the provider may return malformed JSON, truncated text, or a payload
//! missing required fields. Everything is re-validated here. Decoding is
//! all-or-nothing: any violation rejects the payload as a whole, and the
//! error carries the exact path of the offending field.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::pathway::{LearningPathwayData, PathwayPhase, PathwayStep, StepType};

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Payload is not valid JSON: {0}")]
    Malformed(String),

    #[error("Payload violates the pathway schema at '{path}': {reason}")]
    SchemaViolation { path: String, reason: String },
}

/// Decodes a raw provider payload into a validated pathway.
pub fn decode(raw: &str) -> Result<LearningPathwayData, DecodeError> {
    let text = strip_json_fences(raw);
    let value: Value =
        serde_json::from_str(text).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    pathway_from_value(&value)
}

/// Strips ```json ... ``` or ``` ... ``` code fences the model may wrap
/// its output in despite the JSON-only instruction, then trims whitespace.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    for prefix in ["```json", "```"] {
        if let Some(inner) = text.strip_prefix(prefix) {
            let inner = inner.trim_start();
            return inner.strip_suffix("```").map(str::trim).unwrap_or(inner);
        }
    }
    text
}

fn violation(path: &str, reason: impl Into<String>) -> DecodeError {
    DecodeError::SchemaViolation {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn require_str(obj: &Map<String, Value>, parent: &str, key: &str) -> Result<String, DecodeError> {
    match obj.get(key) {
        None => Err(violation(&join(parent, key), "required field is missing")),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(violation(
            &join(parent, key),
            format!("expected a string, got {}", type_name(other)),
        )),
    }
}

fn require_array<'a>(
    obj: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Vec<Value>, DecodeError> {
    match obj.get(key) {
        None => Err(violation(&join(parent, key), "required field is missing")),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(violation(
            &join(parent, key),
            format!("expected an array, got {}", type_name(other)),
        )),
    }
}

fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| violation(path, format!("expected an object, got {}", type_name(value))))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn pathway_from_value(value: &Value) -> Result<LearningPathwayData, DecodeError> {
    let obj = require_object(value, "")?;

    let pathway_title = require_str(obj, "", "pathwayTitle")?;
    let summary = require_str(obj, "", "summary")?;

    let phase_values = require_array(obj, "", "phases")?;
    let mut phases = Vec::with_capacity(phase_values.len());
    for (i, phase) in phase_values.iter().enumerate() {
        phases.push(phase_from_value(phase, &format!("phases[{i}]"))?);
    }

    Ok(LearningPathwayData {
        pathway_title,
        summary,
        phases,
    })
}

fn phase_from_value(value: &Value, path: &str) -> Result<PathwayPhase, DecodeError> {
    let obj = require_object(value, path)?;

    let phase_title = require_str(obj, path, "phaseTitle")?;
    let phase_description = require_str(obj, path, "phaseDescription")?;

    let step_values = require_array(obj, path, "steps")?;
    let mut steps = Vec::with_capacity(step_values.len());
    for (i, step) in step_values.iter().enumerate() {
        steps.push(step_from_value(step, &format!("{path}.steps[{i}]"))?);
    }

    Ok(PathwayPhase {
        phase_title,
        phase_description,
        steps,
    })
}

fn step_from_value(value: &Value, path: &str) -> Result<PathwayStep, DecodeError> {
    let obj = require_object(value, path)?;

    let raw_type = require_str(obj, path, "stepType")?;
    let step_type = StepType::parse(&raw_type).ok_or_else(|| {
        violation(
            &join(path, "stepType"),
            format!("'{raw_type}' is not a recognized step type"),
        )
    })?;

    Ok(PathwayStep {
        step_type,
        title: require_str(obj, path, "title")?,
        description: require_str(obj, path, "description")?,
        nsqf_level: require_str(obj, path, "nsqfLevel")?,
        duration: require_str(obj, path, "duration")?,
    })
}
