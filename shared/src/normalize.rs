use serde_json::Value;

use crate::ensemble::EnsembleReport;
use crate::mode::AnalysisMode;
use crate::result::{AnalysisResult, RawAnalysisPayload, coerce_score};

/// Converts whatever the backend returned into a canonical result. Total:
/// any input shape (JSON object, JSON-encoded string, freeform text) yields
/// a valid `AnalysisResult`, never an error. This is the single boundary
/// that absorbs the unreliability of the upstream generator.
pub fn normalize(raw: &str, mode: AnalysisMode) -> AnalysisResult {
    let (candidate, text) = match serde_json::from_str::<Value>(raw) {
        // A bare JSON string holds the real payload one level down.
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(value) => (Some(value), inner),
            Err(_) => (None, inner),
        },
        Ok(value) => (Some(value), raw.to_string()),
        Err(_) => (None, raw.to_string()),
    };

    let payload = candidate
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value::<RawAnalysisPayload>(value).ok());

    match payload {
        Some(payload) => assemble(payload, mode),
        None => AnalysisResult::error_report(mode, &text),
    }
}

fn assemble(payload: RawAnalysisPayload, mode: AnalysisMode) -> AnalysisResult {
    // Breakdown validation only applies to the aggregation endpoint.
    let ensemble = match (&payload.breakdown, mode) {
        (Some(breakdown), AnalysisMode::Ensemble) => {
            Some(EnsembleReport::from_raw(breakdown, &payload.final_verdict))
        }
        _ => None,
    };

    AnalysisResult {
        mode,
        verdict_title: payload.verdict_title,
        confidence_score: coerce_score(&payload.confidence_score),
        visual_evidence: payload.visual_evidence,
        audio_evidence: payload.audio_evidence,
        fact_check_analysis: payload.fact_check_analysis,
        video_url: payload.video_url,
        is_demo_mode: payload.is_demo_mode,
        ensemble,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_object_is_used_directly() {
        let result = normalize(
            r#"{"confidence_score": 87, "verdict_title": "FAKE"}"#,
            AnalysisMode::Cloud,
        );
        assert_eq!(result.confidence_score, 87);
        assert_eq!(result.verdict_title.as_deref(), Some("FAKE"));
        assert!(result.visual_evidence.is_empty());
        assert!(result.audio_evidence.is_empty());
    }

    #[test]
    fn json_encoded_string_is_parsed_a_second_time() {
        let raw = r#""{\"confidence_score\": 87, \"verdict_title\": \"FAKE\"}""#;
        let result = normalize(raw, AnalysisMode::Cloud);
        assert_eq!(result.confidence_score, 87);
        assert_eq!(result.verdict_title.as_deref(), Some("FAKE"));
    }

    #[test]
    fn freeform_text_becomes_a_visible_error_report() {
        let result = normalize("not json at all", AnalysisMode::Cloud);
        assert_eq!(result.confidence_score, 0);
        assert_eq!(result.verdict_title.as_deref(), Some("ANALYSIS ERROR"));
        assert_eq!(
            result.fact_check_analysis.as_deref(),
            Some("Raw Output: not json at all")
        );
    }

    #[test]
    fn string_wrapping_freeform_text_preserves_the_inner_text() {
        let result = normalize(r#""the model rambled instead""#, AnalysisMode::Cloud);
        assert_eq!(result.verdict_title.as_deref(), Some("ANALYSIS ERROR"));
        assert_eq!(
            result.fact_check_analysis.as_deref(),
            Some("Raw Output: the model rambled instead")
        );
    }

    #[test]
    fn non_object_json_is_treated_as_unparsable() {
        for raw in ["[1, 2, 3]", "42", "true", "null"] {
            let result = normalize(raw, AnalysisMode::Cloud);
            assert_eq!(result.verdict_title.as_deref(), Some("ANALYSIS ERROR"), "{}", raw);
        }
    }

    #[test]
    fn missing_fields_default_and_title_stays_absent() {
        let result = normalize("{}", AnalysisMode::Local);
        assert_eq!(result.confidence_score, 0);
        assert_eq!(result.verdict_title, None);
        assert!(result.visual_evidence.is_empty());
        assert!(result.audio_evidence.is_empty());
        assert_eq!(result.fact_check_analysis, None);
        assert_eq!(result.video_url, None);
        assert!(!result.is_demo_mode);
        assert!(result.ensemble.is_none());
    }

    #[test]
    fn stringified_confidence_is_coerced() {
        let result = normalize(r#"{"confidence_score": "91"}"#, AnalysisMode::Cloud);
        assert_eq!(result.confidence_score, 91);
    }

    #[test]
    fn breakdown_is_validated_only_in_ensemble_mode() {
        let raw = r#"{
            "confidence_score": 70,
            "breakdown": {"api": 80, "heatmap": 64, "neural": 72},
            "final_verdict": 74
        }"#;

        let ensemble = normalize(raw, AnalysisMode::Ensemble);
        let report = ensemble.ensemble.expect("ensemble report");
        assert_eq!(report.cloud_score, 80);
        assert_eq!(report.final_verdict, 74);
        assert!(!report.inconsistent);

        let cloud = normalize(raw, AnalysisMode::Cloud);
        assert!(cloud.ensemble.is_none());
    }

    #[test]
    fn gradcam_reply_keeps_media_and_demo_flag() {
        let raw = r#"{
            "confidence_score": 63,
            "video_url": "http://127.0.0.1:8000/static/overlay.mp4",
            "is_demo_mode": true,
            "visual_evidence": ["High activation around the jawline."]
        }"#;
        let result = normalize(raw, AnalysisMode::GradCam);
        assert_eq!(result.confidence_score, 63);
        assert_eq!(
            result.video_url.as_deref(),
            Some("http://127.0.0.1:8000/static/overlay.mp4")
        );
        assert!(result.is_demo_mode);
        assert_eq!(result.visual_evidence.len(), 1);
    }

    #[test]
    fn mistyped_evidence_degrades_to_error_report_not_a_panic() {
        let result = normalize(r#"{"visual_evidence": "not a list"}"#, AnalysisMode::Cloud);
        assert_eq!(result.verdict_title.as_deref(), Some("ANALYSIS ERROR"));
        assert_eq!(result.confidence_score, 0);
    }
}
