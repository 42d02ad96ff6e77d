//! Scouting report as received over the wire, and its validated form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::AppError;
use crate::scouting::archetype::TraitRatings;

/// Rendered in place of intangibles when the scout left them out.
pub const INTANGIBLES_FALLBACK: &str = "N/A";

/// Raw request body. Every field is optional here so that a missing one
/// surfaces as a named validation error rather than a serde rejection.
/// Text fields take any JSON value; non-strings are rendered as JSON text.
/// Unknown fields (`playerId`, `createdAt`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoutingReportPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub strengths: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub weaknesses: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub intangibles: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub comparison: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ceiling: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub range: Option<String>,
    pub ratings: Option<TraitRatings>,
}

/// `null` → `None`, strings as-is, anything else as its JSON rendering.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// A report with every required field present.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutingReport {
    pub strengths: String,
    pub weaknesses: String,
    pub intangibles: Option<String>,
    pub comparison: String,
    pub role: String,
    pub ceiling: String,
    pub range: String,
    pub ratings: TraitRatings,
}

impl ScoutingReport {
    pub fn intangibles_or_default(&self) -> &str {
        self.intangibles.as_deref().unwrap_or(INTANGIBLES_FALLBACK)
    }
}

impl TryFrom<ScoutingReportPayload> for ScoutingReport {
    type Error = AppError;

    fn try_from(payload: ScoutingReportPayload) -> Result<Self, Self::Error> {
        Ok(ScoutingReport {
            strengths: require(payload.strengths, "strengths")?,
            weaknesses: require(payload.weaknesses, "weaknesses")?,
            intangibles: payload.intangibles,
            comparison: require(payload.comparison, "comparison")?,
            role: require(payload.role, "role")?,
            ceiling: require(payload.ceiling, "ceiling")?,
            range: require(payload.range, "range")?,
            ratings: payload.ratings.unwrap_or_default(),
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field '{field}'")))
}
