//! Pathway data model — the structured plan returned by the provider.
//!
//! Wire names are camelCase (`pathwayTitle`, `nsqfLevel`, ...) because the
//! schema sent to the provider uses them. Order of `phases` and `steps` is
//! meaningful: phases progress from foundational to advanced, steps run in
//! sequence through a phase.

use serde::{Deserialize, Serialize};

/// Closed set of learning activity types a step may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    Course,
    #[serde(rename = "Micro-credential")]
    MicroCredential,
    Certification,
    #[serde(rename = "On-the-Job Training")]
    OnTheJobTraining,
    Project,
    Assessment,
}

impl StepType {
    /// Wire spellings, in schema order.
    pub const ALL: &'static [&'static str] = &[
        "Course",
        "Micro-credential",
        "Certification",
        "On-the-Job Training",
        "Project",
        "Assessment",
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Course" => Some(Self::Course),
            "Micro-credential" => Some(Self::MicroCredential),
            "Certification" => Some(Self::Certification),
            "On-the-Job Training" => Some(Self::OnTheJobTraining),
            "Project" => Some(Self::Project),
            "Assessment" => Some(Self::Assessment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "Course",
            Self::MicroCredential => "Micro-credential",
            Self::Certification => "Certification",
            Self::OnTheJobTraining => "On-the-Job Training",
            Self::Project => "Project",
            Self::Assessment => "Assessment",
        }
    }
}

/// One atomic activity within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayStep {
    pub step_type: StepType,
    pub title: String,
    pub description: String,
    /// Qualifications-framework tier label, e.g. "Level 4". Opaque display
    /// text; may be the literal "N/A".
    pub nsqf_level: String,
    /// Free-text estimate, e.g. "4 weeks". Never parsed.
    pub duration: String,
}

/// A named stage of the plan grouping an ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayPhase {
    pub phase_title: String,
    pub phase_description: String,
    pub steps: Vec<PathwayStep>,
}

/// The full structured plan for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathwayData {
    pub pathway_title: String,
    pub summary: String,
    pub phases: Vec<PathwayPhase>,
}
