use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ensemble::EnsembleReport;
use crate::mode::AnalysisMode;
use crate::verdict;

/// Backend reply as it arrives on the wire. The upstream generator is free
/// to omit, mistype, or stringify any of these, so nothing here is trusted.
#[derive(Deserialize, Debug, Default)]
pub struct RawAnalysisPayload {
    #[serde(default)]
    pub confidence_score: Value,
    #[serde(default)]
    pub verdict_title: Option<String>,
    #[serde(default)]
    pub visual_evidence: Vec<String>,
    #[serde(default)]
    pub audio_evidence: Vec<String>,
    #[serde(default)]
    pub fact_check_analysis: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_demo_mode: bool,
    #[serde(default)]
    pub breakdown: Option<RawBreakdown>,
    #[serde(default)]
    pub final_verdict: Value,
}

/// Per-engine sub-scores of an ensemble reply. `api` is the cloud engine.
#[derive(Deserialize, Debug, Default)]
pub struct RawBreakdown {
    #[serde(default)]
    pub api: Value,
    #[serde(default)]
    pub heatmap: Value,
    #[serde(default)]
    pub neural: Value,
}

/// Canonical result published to the UI, built once per completed request
/// and immutable afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub mode: AnalysisMode,
    pub verdict_title: Option<String>,
    pub confidence_score: u8,
    pub visual_evidence: Vec<String>,
    pub audio_evidence: Vec<String>,
    pub fact_check_analysis: Option<String>,
    pub video_url: Option<String>,
    pub is_demo_mode: bool,
    pub ensemble: Option<EnsembleReport>,
}

impl AnalysisResult {
    /// Degraded-but-valid stand-in for a reply that could not be parsed.
    /// The raw text is preserved in the fact-check panel instead of being
    /// silently dropped.
    pub fn error_report(mode: AnalysisMode, raw: &str) -> Self {
        AnalysisResult {
            mode,
            verdict_title: Some("ANALYSIS ERROR".to_string()),
            confidence_score: 0,
            visual_evidence: Vec::new(),
            audio_evidence: Vec::new(),
            fact_check_analysis: Some(format!("Raw Output: {}", raw)),
            video_url: None,
            is_demo_mode: false,
            ensemble: None,
        }
    }

    /// Backend title when present, otherwise the canned verdict for this
    /// score and engine.
    pub fn title(&self) -> String {
        match &self.verdict_title {
            Some(title) => title.clone(),
            None => {
                let is_fake = verdict::classify(self.confidence_score).is_fake;
                verdict::default_title(is_fake, self.mode).to_string()
            }
        }
    }
}

/// Total number-like coercion: numbers and numeric strings (a trailing `%`
/// is tolerated) are rounded and clamped to [0, 100]; anything else is 0.
pub fn coerce_score(value: &Value) -> u8 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// Appends a client clock stamp so repeated analyses never resolve to a
/// stale cached media asset under the same URL.
pub fn freshen_media_url(url: &str, stamp: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, stamp)
}
