use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::result::RawBreakdown;

/// Validated ensemble breakdown. The backend is the source of truth for the
/// combined verdict; the client renders sub-scores and range-checks, it
/// never recomputes the aggregate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnsembleReport {
    pub cloud_score: u8,
    pub heatmap_score: u8,
    pub neural_score: u8,
    pub final_verdict: u8,
    /// Set when any sub-score or the final verdict was missing or out of
    /// range and had to be substituted with 0.
    pub inconsistent: bool,
}

impl EnsembleReport {
    pub fn from_raw(breakdown: &RawBreakdown, final_verdict: &Value) -> Self {
        let mut inconsistent = false;
        let cloud_score = validated(&breakdown.api, &mut inconsistent);
        let heatmap_score = validated(&breakdown.heatmap, &mut inconsistent);
        let neural_score = validated(&breakdown.neural, &mut inconsistent);
        let final_verdict = validated(final_verdict, &mut inconsistent);

        EnsembleReport {
            cloud_score,
            heatmap_score,
            neural_score,
            final_verdict,
            inconsistent,
        }
    }
}

fn validated(value: &Value, inconsistent: &mut bool) -> u8 {
    match checked_score(value) {
        Some(score) => score,
        None => {
            *inconsistent = true;
            0
        }
    }
}

/// Unlike the headline confidence score, ensemble fields are not clamped:
/// an out-of-range value means the aggregation step misbehaved, so it is
/// replaced by 0 and flagged.
fn checked_score(value: &Value) -> Option<u8> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (score.is_finite() && (0.0..=100.0).contains(&score)).then(|| score.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn breakdown(api: Value, heatmap: Value, neural: Value) -> RawBreakdown {
        RawBreakdown {
            api,
            heatmap,
            neural,
        }
    }

    #[test]
    fn well_formed_breakdown_passes_through() {
        let report =
            EnsembleReport::from_raw(&breakdown(json!(80), json!(64), json!(72)), &json!(74));
        assert_eq!(report.cloud_score, 80);
        assert_eq!(report.heatmap_score, 64);
        assert_eq!(report.neural_score, 72);
        assert_eq!(report.final_verdict, 74);
        assert!(!report.inconsistent);
    }

    #[test]
    fn missing_sub_score_defaults_without_discarding_the_rest() {
        let report =
            EnsembleReport::from_raw(&breakdown(json!(80), Value::Null, json!(72)), &json!(74));
        assert_eq!(report.heatmap_score, 0);
        assert_eq!(report.cloud_score, 80);
        assert_eq!(report.neural_score, 72);
        assert_eq!(report.final_verdict, 74);
        assert!(report.inconsistent);
    }

    #[test]
    fn out_of_range_values_are_substituted_not_clamped() {
        let report =
            EnsembleReport::from_raw(&breakdown(json!(140), json!(64), json!(-2)), &json!(101));
        assert_eq!(report.cloud_score, 0);
        assert_eq!(report.heatmap_score, 64);
        assert_eq!(report.neural_score, 0);
        assert_eq!(report.final_verdict, 0);
        assert!(report.inconsistent);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let report =
            EnsembleReport::from_raw(&breakdown(json!("80"), json!(64), json!(72)), &json!("74"));
        assert_eq!(report.cloud_score, 80);
        assert_eq!(report.final_verdict, 74);
        assert!(!report.inconsistent);
    }
}
