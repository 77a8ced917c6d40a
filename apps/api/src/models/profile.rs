//! Learner profile — the validated input to pathway generation.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Indian states and union territories accepted for `location`.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Education levels accepted for `education`.
pub const EDUCATION_LEVELS: &[&str] = &[
    "Below 10th",
    "10th Pass",
    "12th Pass",
    "ITI",
    "Diploma",
    "Graduate",
    "Post Graduate",
];

/// Languages accepted for `language`.
pub const LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "Bengali",
    "Marathi",
    "Telugu",
    "Tamil",
    "Gujarati",
    "Urdu",
    "Kannada",
    "Odia",
    "Malayalam",
    "Punjabi",
    "Assamese",
];

pub const DEFAULT_LOCATION: &str = "Maharashtra";
pub const DEFAULT_EDUCATION: &str = "12th Pass";
pub const DEFAULT_LANGUAGE: &str = "English";

/// A profile as submitted by the client. The enumerated fields are
/// optional and take their defaults when omitted; the required free-text
/// fields default to empty so a missing key and a blank value are
/// rejected the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: String,
    pub location: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub aspiration: String,
    pub language: Option<String>,
}

/// A validated learner profile. Construction goes through [`validate`],
/// so the enumerated fields always hold a member of their allowed set and
/// the free-text fields are never blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub name: String,
    pub location: String,
    pub education: String,
    pub skills: String,
    pub aspiration: String,
    pub language: String,
}

/// Validates a draft. Blank required fields are rejected as a unit with
/// one combined message naming every offender; location/education/language
/// must be members of their enumerations. Submitted values are carried
/// through verbatim.
pub fn validate(draft: &ProfileDraft) -> Result<LearnerProfile, AppError> {
    let mut blank = Vec::new();
    if draft.name.trim().is_empty() {
        blank.push("name");
    }
    if draft.skills.trim().is_empty() {
        blank.push("skills");
    }
    if draft.aspiration.trim().is_empty() {
        blank.push("aspiration");
    }
    if !blank.is_empty() {
        return Err(AppError::Validation(format!(
            "required fields are missing: {}",
            blank.join(", ")
        )));
    }

    Ok(LearnerProfile {
        name: draft.name.clone(),
        location: enumerated(draft.location.as_deref(), INDIAN_STATES, DEFAULT_LOCATION, "location")?,
        education: enumerated(
            draft.education.as_deref(),
            EDUCATION_LEVELS,
            DEFAULT_EDUCATION,
            "education",
        )?,
        skills: draft.skills.clone(),
        aspiration: draft.aspiration.clone(),
        language: enumerated(draft.language.as_deref(), LANGUAGES, DEFAULT_LANGUAGE, "language")?,
    })
}

fn enumerated(
    value: Option<&str>,
    allowed: &[&str],
    default: &str,
    field: &str,
) -> Result<String, AppError> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if allowed.contains(&v) => Ok(v.to_string()),
        Some(v) => Err(AppError::Validation(format!(
            "{field} must be one of the supported values, got '{v}'"
        ))),
    }
}
