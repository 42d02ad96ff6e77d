// Prompt template for the scouting summary.
// Placeholders are replaced in `build_summary_prompt`; no other module formats this text.

use crate::scouting::archetype::{Archetype, TraitRatings};
use crate::scouting::report::ScoutingReport;

/// Summary prompt template.
/// Replace: {strengths}, {weaknesses}, {intangibles}, {comparison}, {role},
///          {ceiling}, {range}, {archetype}, {ratings}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate a 5–7 sentence NBA draft scouting summary based on the following evaluation:
Strengths: {strengths}
Weaknesses: {weaknesses}
Intangibles: {intangibles}
Player Comparison: {comparison}
Projected Role: {role}
Ceiling: {ceiling}
Draft Range: {range}
Archetype: {archetype}

From the trait ratings below, highlight strengths with a rating of 8 or higher and weaknesses with a rating of 3 or lower — but do not repeat traits already mentioned in the Strengths or Weaknesses section.

Trait Ratings:
{ratings}
"#;

/// Builds the user message for one report. Deterministic for a given input.
pub fn build_summary_prompt(report: &ScoutingReport, archetype: Archetype) -> String {
    let ratings = render_ratings(&report.ratings);
    fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("strengths", report.strengths.as_str()),
            ("weaknesses", report.weaknesses.as_str()),
            ("intangibles", report.intangibles_or_default()),
            ("comparison", report.comparison.as_str()),
            ("role", report.role.as_str()),
            ("ceiling", report.ceiling.as_str()),
            ("range", report.range.as_str()),
            ("archetype", archetype.label()),
            ("ratings", ratings.as_str()),
        ],
    )
}

/// Single-pass `{name}` substitution. Substituted text is never rescanned, so
/// braces inside report fields come through literally. Unknown placeholders
/// are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// One `Trait: rating` line per entry, in trait-name order.
pub fn render_ratings(ratings: &TraitRatings) -> String {
    if ratings.is_empty() {
        return "None provided".to_string();
    }
    ratings
        .iter()
        .map(|(name, rating)| format!("{name}: {rating}"))
        .collect::<Vec<_>>()
        .join("\n")
}
