//! Summary pipeline: validate → classify → build prompt → generate → trim.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::scouting::archetype::determine_archetype;
use crate::scouting::prompts::build_summary_prompt;
use crate::scouting::report::{ScoutingReport, ScoutingReportPayload};

/// Produces a summary for a raw report. Validation runs before the generator
/// is touched, so an incomplete report never costs a provider call.
pub async fn generate_summary(
    payload: ScoutingReportPayload,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let report = ScoutingReport::try_from(payload)?;
    summarize_report(&report, generator).await
}

pub async fn summarize_report(
    report: &ScoutingReport,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let archetype = determine_archetype(&report.ratings);
    info!("Classified report as {archetype}");

    let prompt = build_summary_prompt(report, archetype);

    let text = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Records every prompt it sees and replies with a fixed result.
    struct RecordingGenerator {
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        reply: Result<&'static str, u16>,
    }

    impl RecordingGenerator {
        fn replying(text: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                reply: Ok(text),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                reply: Err(status),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "Rate limit reached".to_string(),
                }),
            }
        }
    }

    fn payload() -> ScoutingReportPayload {
        serde_json::from_str(
            r#"{
                "strengths": "Pull-up shooting",
                "weaknesses": "Point-of-attack defense",
                "comparison": "Tyrese Haliburton",
                "role": "Starter",
                "ceiling": "All-Star",
                "range": "Lottery",
                "ratings": {"Playmaking": 9, "Ball Handling": 8, "Shooting": 7}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_summary_is_trimmed_generator_output() {
        let generator = RecordingGenerator::replying("\n  Crafty lead guard.  \n");
        let summary = generate_summary(payload(), &generator).await.unwrap();
        assert_eq!(summary, "Crafty lead guard.");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_archetype_and_fields() {
        let generator = RecordingGenerator::replying("ok");
        generate_summary(payload(), &generator).await.unwrap();

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Archetype: Playmaking Guard"));
        assert!(prompt.contains("Player Comparison: Tyrese Haliburton"));
        assert!(prompt.contains("Intangibles: N/A"));
        assert!(prompt.contains("Ball Handling: 8"));
    }

    #[tokio::test]
    async fn test_missing_field_skips_generator() {
        let generator = RecordingGenerator::replying("never used");
        let mut payload = payload();
        payload.comparison = None;

        let err = generate_summary(payload, &generator).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("comparison"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_llm_error_with_message() {
        let generator = RecordingGenerator::failing(429);
        let err = generate_summary(payload(), &generator).await.unwrap_err();
        match err {
            AppError::Llm(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("Rate limit reached"));
            }
            other => panic!("expected LLM error, got {other:?}"),
        }
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }
}
