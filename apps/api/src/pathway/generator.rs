//! Pathway generation — orchestrates the profile-to-plan pipeline.
//!
//! Flow: build_request → provider call → strict decode. The provider is
//! awaited exactly once per submission; there are no retries at any layer,
//! and a decode failure discards the entire response.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::models::pathway::LearningPathwayData;
use crate::models::profile::LearnerProfile;
use crate::pathway::decoder::decode;
use crate::pathway::request::build_request;

/// Runs the full pipeline for an already-validated profile.
pub async fn generate_pathway(
    provider: &dyn CompletionProvider,
    profile: &LearnerProfile,
) -> Result<LearningPathwayData, AppError> {
    let request = build_request(profile);
    info!("Requesting pathway for aspiration '{}'", profile.aspiration);

    let raw = provider.complete(&request).await?;
    let pathway = decode(&raw)?;

    info!(
        "Decoded pathway '{}' with {} phases",
        pathway.pathway_title,
        pathway.phases.len()
    );
    Ok(pathway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::models::pathway::StepType;

    fn priya() -> LearnerProfile {
        LearnerProfile {
            name: "Priya Sharma".to_string(),
            location: "Maharashtra".to_string(),
            education: "12th Pass".to_string(),
            skills: "Basic computer knowledge".to_string(),
            aspiration: "Become a certified electrician".to_string(),
            language: "English".to_string(),
        }
    }

    const PAYLOAD: &str = r#"{
        "pathwayTitle": "Electrician Pathway",
        "summary": "A phased route from basics to certification.",
        "phases": [
            {
                "phaseTitle": "Foundation",
                "phaseDescription": "Safety and electrical basics.",
                "steps": [
                    {
                        "stepType": "Course",
                        "title": "Basic Electrical Safety",
                        "description": "Fundamentals of safe wiring practice.",
                        "nsqfLevel": "Level 2",
                        "duration": "4 weeks"
                    }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_generate_decodes_provider_payload() {
        let provider = ScriptedProvider::ok(PAYLOAD);
        let pathway = generate_pathway(&provider, &priya()).await.unwrap();

        assert_eq!(pathway.pathway_title, "Electrician Pathway");
        assert_eq!(pathway.phases.len(), 1);
        assert_eq!(pathway.phases[0].steps[0].step_type, StepType::Course);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_maps_provider_failure() {
        let provider = ScriptedProvider::failing("quota exceeded");
        let err = generate_pathway(&provider, &priya()).await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_maps_garbage_payload_to_decode_error() {
        let provider = ScriptedProvider::ok("I'm sorry, I can't produce JSON today.");
        let err = generate_pathway(&provider, &priya()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn test_generate_rejects_partial_payload_entirely() {
        let partial = PAYLOAD.replace("\"summary\": \"A phased route from basics to certification.\",", "");
        let provider = ScriptedProvider::ok(&partial);
        let err = generate_pathway(&provider, &priya()).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
