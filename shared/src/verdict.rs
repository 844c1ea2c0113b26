use crate::mode::AnalysisMode;

/// Presentation palette for one side of the decision boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerdictTheme {
    pub color: &'static str,
    pub border: &'static str,
    pub background: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub is_fake: bool,
    pub theme: VerdictTheme,
}

const FAKE_THEME: VerdictTheme = VerdictTheme {
    color: "#ef4444",
    border: "#dc2626",
    background: "rgba(69, 10, 10, 0.4)",
};

const AUTHENTIC_THEME: VerdictTheme = VerdictTheme {
    color: "#22c55e",
    border: "#16a34a",
    background: "rgba(5, 46, 22, 0.4)",
};

/// The single user-facing decision boundary of the whole system: the score
/// is the probability of manipulation, anything above 50 reads as fake, a
/// tie at exactly 50 reads as authentic.
pub fn classify(confidence_score: u8) -> Verdict {
    let is_fake = confidence_score > 50;
    Verdict {
        is_fake,
        theme: if is_fake { FAKE_THEME } else { AUTHENTIC_THEME },
    }
}

/// Canned verdict used when the backend omits `verdict_title`.
pub fn default_title(is_fake: bool, mode: AnalysisMode) -> &'static str {
    match (mode, is_fake) {
        (AnalysisMode::Cloud, true) => "MANIPULATION DETECTED",
        (AnalysisMode::Cloud, false) => "NO MANIPULATION FOUND",
        (AnalysisMode::Local, true) => "DEEPFAKE DETECTED",
        (AnalysisMode::Local, false) => "LIKELY AUTHENTIC",
        (AnalysisMode::GradCam, true) => "SYNTHETIC REGIONS FLAGGED",
        (AnalysisMode::GradCam, false) => "NO SYNTHETIC REGIONS",
        (AnalysisMode::Ensemble, true) => "CONSENSUS: MANIPULATED",
        (AnalysisMode::Ensemble, false) => "CONSENSUS: AUTHENTIC",
    }
}
